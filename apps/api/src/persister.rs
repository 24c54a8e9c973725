//! Application Persister: dumps one generation run to its own directory.
//!
//! Layout: `<output_dir>/<YYYYmmdd_HHMMSS>_<sanitized-company>/` with
//! `company_info.txt`, `cover_letter_short.txt`, `cover_letter_medium.txt`,
//! optionally `cover_letter_long.txt`, and `linkedin_message.txt`.
//! Files are overwritten whole; a failed write leaves earlier files behind.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::Local;
use regex::Regex;
use tokio::fs;
use tracing::info;

use crate::models::company::CompanyProfile;
use crate::models::content::LetterVariants;

pub const COMPANY_INFO_FILE: &str = "company_info.txt";
pub const SHORT_LETTER_FILE: &str = "cover_letter_short.txt";
pub const MEDIUM_LETTER_FILE: &str = "cover_letter_medium.txt";
pub const LONG_LETTER_FILE: &str = "cover_letter_long.txt";
pub const OUTREACH_FILE: &str = "linkedin_message.txt";

/// Upper bound in bytes for the sanitized name. Keeps the run directory
/// name well under the usual 255-byte component limit.
pub const MAX_SANITIZED_BYTES: usize = 100;

/// Makes a company name safe to use as a directory name component.
///
/// Drops characters outside word/space/hyphen, collapses whitespace and
/// hyphen runs into one underscore, trims underscores at both ends and
/// truncates to `MAX_SANITIZED_BYTES` on a char boundary.
pub fn sanitize_company_name(name: &str) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let disallowed =
        DISALLOWED.get_or_init(|| Regex::new(r"[^\w\s-]").expect("valid sanitize pattern"));
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[\s-]+").expect("valid separator pattern"));

    let stripped = disallowed.replace_all(name, "");
    let joined = separators.replace_all(&stripped, "_");
    let trimmed = truncate_on_char_boundary(joined.trim_matches('_'), MAX_SANITIZED_BYTES)
        .trim_matches('_');
    if trimmed.is_empty() {
        "company".to_string()
    } else {
        trimmed.to_string()
    }
}

fn truncate_on_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&idx| text.is_char_boundary(idx))
        .unwrap_or(0);
    &text[..end]
}

/// Writes all artifacts of one run and returns the run directory.
pub async fn save_application(
    output_dir: &Path,
    company: &CompanyProfile,
    letters: &LetterVariants,
    outreach_message: &str,
    position: &str,
) -> Result<PathBuf> {
    let now = Local::now();
    let run_dir = output_dir.join(format!(
        "{}_{}",
        now.format("%Y%m%d_%H%M%S"),
        sanitize_company_name(&company.name)
    ));

    fs::create_dir_all(&run_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", run_dir.display()))?;

    let company_info = format!(
        "Company: {}\n\
         URL: {}\n\
         Description: {}\n\
         Position: {}\n\
         Generated: {}\n\
         \n\
         {}",
        company.name,
        company.source_url,
        company.description,
        position,
        now.format("%Y-%m-%d %H:%M:%S"),
        company.summary_text
    );

    write_file(&run_dir, COMPANY_INFO_FILE, &company_info).await?;
    write_file(&run_dir, SHORT_LETTER_FILE, &letters.short).await?;
    write_file(&run_dir, MEDIUM_LETTER_FILE, &letters.medium).await?;
    if let Some(long) = &letters.long {
        write_file(&run_dir, LONG_LETTER_FILE, long).await?;
    }
    write_file(&run_dir, OUTREACH_FILE, outreach_message).await?;

    info!("Saved application to {}", run_dir.display());
    Ok(run_dir)
}

async fn write_file(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
