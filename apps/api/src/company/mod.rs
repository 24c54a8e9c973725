// Company analysis: fetch a public website and derive a CompanyProfile.
// Heuristics are pure functions; the analyzer owns fetching and DOM access.

pub mod analyzer;
pub mod heuristics;
pub mod summary;

use thiserror::Error;

/// Classified failure of a company analysis. Each class carries a
/// remediation hint for the caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Access to {url} was denied: {reason}")]
    AccessDenied { url: String, reason: String },

    #[error("Page {url} was not found")]
    NotFound { url: String },

    #[error("Could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
}

impl AnalysisError {
    pub fn hint(&self) -> &'static str {
        match self {
            AnalysisError::AccessDenied { .. } => {
                "The website blocks automated access. Try the company's root domain \
                 (e.g. https://company.com) instead of a sub-page, or another page of the site."
            }
            AnalysisError::NotFound { .. } => {
                "Check the URL for typos, or use the company's root domain instead of a sub-page."
            }
            AnalysisError::Fetch { .. } => {
                "Check that the URL is correct and the website is reachable, then try again. \
                 The root domain usually works best."
            }
        }
    }

    /// Error message followed by the remediation hint.
    pub fn detail(&self) -> String {
        format!("{self}. {}", self.hint())
    }
}
