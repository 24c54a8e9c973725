//! CV Semantic Parser: turns extracted CV text into a `CvProfile`.
//!
//! Never fails: a malformed model answer degrades to the raw answer as the
//! summary, and a failed model call degrades to an error-marker summary.

use tracing::{info, warn};

use crate::cv::prompts::CV_PARSE_PROMPT_TEMPLATE;
use crate::cv::render::render_cv_summary;
use crate::llm_client::{strip_json_fences, LanguageModel};
use crate::models::cv::{CvProfile, StructuredCv, PLACEHOLDER_NAME};

/// Line prefix the older plain-text answer format used for the name.
const LEGACY_NAME_PREFIX: &str = "NAME:";

pub async fn parse_cv(cv_text: &str, llm: &dyn LanguageModel) -> CvProfile {
    let prompt = CV_PARSE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);

    let answer = match llm.complete(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!("CV analysis call failed: {e}");
            return CvProfile {
                raw_text: cv_text.to_string(),
                structured: None,
                rendered_summary: format!("[CV analysis failed: {e}]"),
                extracted_name: PLACEHOLDER_NAME.to_string(),
            };
        }
    };

    match parse_structured(&answer) {
        Some(structured) => {
            let extracted_name = structured
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(PLACEHOLDER_NAME)
                .to_string();
            info!("CV parsed as structured data (name: {extracted_name})");
            CvProfile {
                raw_text: cv_text.to_string(),
                rendered_summary: render_cv_summary(&structured),
                structured: Some(structured),
                extracted_name,
            }
        }
        None => {
            warn!("CV analysis answer is not valid JSON; falling back to plain text");
            let (extracted_name, rendered_summary) = legacy_text_fallback(&answer);
            CvProfile {
                raw_text: cv_text.to_string(),
                structured: None,
                rendered_summary,
                extracted_name,
            }
        }
    }
}

/// Strict parse of the answer, then of its outermost `{...}` span.
fn parse_structured(answer: &str) -> Option<StructuredCv> {
    let text = strip_json_fences(answer);
    if let Ok(cv) = serde_json::from_str::<StructuredCv>(text) {
        return Some(cv);
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<StructuredCv>(&text[start..=end]).ok()
}

/// Older answers started with a `NAME: <name>` line followed by a free-form
/// summary. Anything else is kept verbatim under the placeholder name.
fn legacy_text_fallback(answer: &str) -> (String, String) {
    let Some(rest) = answer.strip_prefix(LEGACY_NAME_PREFIX) else {
        return (PLACEHOLDER_NAME.to_string(), answer.to_string());
    };
    let (name_line, summary) = rest.split_once('\n').unwrap_or((rest, ""));
    let name = name_line.trim();
    let name = if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name.to_string()
    };
    (name, summary.trim().to_string())
}
