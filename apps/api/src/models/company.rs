use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured summary derived from a company's public website.
/// Built once per analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub about_url: Option<String>,
    pub source_url: String,
    pub summary_text: String,
    pub clients: Vec<String>,
    pub technologies: BTreeSet<String>,
    pub projects: Vec<String>,
}
