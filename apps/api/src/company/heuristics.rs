//! Heuristic text extraction over scraped page text.
//!
//! Every function here is pure and total: arbitrary input produces a
//! (possibly empty) result, never a panic. Precision is best-effort.
//!
//! Matching is done against an ASCII-lowercased copy of the page text. ASCII
//! lowercasing preserves byte offsets, so a match position can be used to
//! slice the original-case text for the secondary pattern pass.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const NO_DESCRIPTION: &str = "No description found";
pub const GENERIC_COMPANY_NAME: &str = "your company";
pub const GENERIC_DESCRIPTION: &str =
    "A company whose website could not be analyzed in detail.";

/// Title tokens that mean the page rendered an error instead of content.
pub const TITLE_ERROR_TOKENS: &[&str] = &["403", "forbidden", "error"];

/// Names that are really scraping failures, compared case-insensitively.
const KNOWN_ERROR_NAMES: &[&str] = &[
    "unknown company",
    "403 forbidden",
    "forbidden",
    "access denied",
    "error",
    "not found",
    "404 not found",
    "just a moment...",
];

pub const CLIENT_WINDOW: usize = 500;
pub const TECHNOLOGY_WINDOW: usize = 300;
pub const PROJECT_WINDOW: usize = 400;

pub const MAX_CLIENTS: usize = 5;
pub const MAX_PROJECTS: usize = 3;

const CLIENT_INDICATORS: &[&str] = &[
    "our clients",
    "clients include",
    "trusted by",
    "we work with",
    "our customers",
    "customers include",
    "worked with",
    "onze klanten",
];

const TECHNOLOGY_INDICATORS: &[&str] = &[
    "technologies",
    "tech stack",
    "our stack",
    "built with",
    "we use",
    "technology",
    "expertise in",
];

const PROJECT_INDICATORS: &[&str] = &[
    "our projects",
    "case studies",
    "case study",
    "our work",
    "portfolio",
    "recent projects",
    "projecten",
];

/// Sentence keywords that mark a sentence as describing a project.
const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "developed",
    "built",
    "created",
    "launched",
    "delivered",
    "platform",
    "application",
    "app",
    "solution",
    "website",
];

const TECHNOLOGY_VOCABULARY: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "java",
    "kotlin",
    "swift",
    "php",
    "laravel",
    "ruby",
    "rails",
    "django",
    "flask",
    "go",
    "rust",
    "c#",
    ".net",
    "c++",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "graphql",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "google cloud",
    "terraform",
    "flutter",
    "machine learning",
    "ai",
];

/// Capitalized words that open sentences rather than name clients.
const CLIENT_STOPWORDS: &[&str] = &[
    "We", "Our", "The", "They", "This", "These", "And", "With", "For", "From", "Including",
    "Clients", "Customers", "Trusted", "Read", "More", "View", "All", "See",
];

/// First `|`-separated segment of the page title, trimmed.
pub fn company_name_from_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return UNKNOWN_COMPANY.to_string();
    }
    title.split('|').next().unwrap_or(title).trim().to_string()
}

/// The first error token found in the title, if any.
pub fn title_error_token(title: &str) -> Option<&'static str> {
    let lower = title.to_lowercase();
    TITLE_ERROR_TOKENS
        .iter()
        .copied()
        .find(|token| lower.contains(token))
}

/// A candidate name is meaningful when it is longer than three characters
/// and is not one of the known error strings.
pub fn is_meaningful_name(name: &str) -> bool {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();
    trimmed.chars().count() > 3 && !KNOWN_ERROR_NAMES.contains(&lower.as_str())
}

/// Up to `window` characters of `text` starting at the earliest occurrence
/// of any indicator phrase, whichever indicator that is.
pub fn keyword_window<'a>(text: &'a str, indicators: &[&str], window: usize) -> Option<&'a str> {
    let lower = text.to_ascii_lowercase();
    let start = indicators
        .iter()
        .filter_map(|indicator| lower.find(indicator))
        .min()?;
    let tail = &text[start..];
    let end = tail
        .char_indices()
        .nth(window)
        .map(|(idx, _)| idx)
        .unwrap_or(tail.len());
    Some(&tail[..end])
}

fn capitalized_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Za-z0-9&'\-]+(?:[ \t]+[A-Z][A-Za-z0-9&'\-]+)*")
            .expect("capitalized-run pattern is valid")
    })
}

/// Capitalized word runs following a client indicator, deduplicated in
/// order of appearance and capped at `MAX_CLIENTS`.
pub fn extract_clients(text: &str) -> Vec<String> {
    let Some(window) = keyword_window(text, CLIENT_INDICATORS, CLIENT_WINDOW) else {
        return Vec::new();
    };

    let mut clients: Vec<String> = Vec::new();
    for found in capitalized_run_regex().find_iter(window) {
        let candidate = strip_leading_stopwords(found.as_str());
        if candidate.chars().count() < 3 {
            continue;
        }
        if clients.iter().any(|c| c.eq_ignore_ascii_case(&candidate)) {
            continue;
        }
        clients.push(candidate);
        if clients.len() == MAX_CLIENTS {
            break;
        }
    }
    clients
}

fn strip_leading_stopwords(run: &str) -> String {
    run.split_whitespace()
        .skip_while(|word| CLIENT_STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vocabulary terms found near a technology indicator. Unbounded, deduplicated.
pub fn extract_technologies(text: &str) -> BTreeSet<String> {
    let Some(window) = keyword_window(text, TECHNOLOGY_INDICATORS, TECHNOLOGY_WINDOW) else {
        return BTreeSet::new();
    };
    let window = window.to_lowercase();
    TECHNOLOGY_VOCABULARY
        .iter()
        .filter(|term| contains_term(&window, term))
        .map(|term| term.to_string())
        .collect()
}

/// Whole-term containment: the match may not be glued to other alphanumerics.
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(idx, _)| {
        let before = haystack[..idx].chars().next_back();
        let after = haystack[idx + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Sentences near a project indicator that mention a project keyword,
/// capped at `MAX_PROJECTS`. Abbreviations break the naive splitting.
pub fn extract_projects(text: &str) -> Vec<String> {
    let Some(window) = keyword_window(text, PROJECT_INDICATORS, PROJECT_WINDOW) else {
        return Vec::new();
    };
    window
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > 20)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            PROJECT_KEYWORDS.iter().any(|k| contains_term(&lower, k))
        })
        .take(MAX_PROJECTS)
        .map(String::from)
        .collect()
}

/// Collapses every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
