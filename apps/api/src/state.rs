use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::cv::store::CvSlot;
use crate::generation::splitter::{KeywordSectionSplitter, SectionSplitter};
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable model backend. Default: Ollama.
    pub llm: Arc<dyn LanguageModel>,
    /// Client for company page fetches, carrying the fetch timeout.
    pub http: reqwest::Client,
    /// The single "current CV".
    pub cv_slot: CvSlot,
    pub splitter: Arc<dyn SectionSplitter>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn LanguageModel>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jobpost-helper/", env!("CARGO_PKG_VERSION")))
            .timeout(config.fetch_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            splitter: Arc::new(KeywordSectionSplitter::new(config.include_long_letter)),
            config,
            llm,
            http,
            cv_slot: CvSlot::new(),
        })
    }
}
