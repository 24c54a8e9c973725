// Content generation: cover letters and the outreach message.
// All model calls go through llm_client::LanguageModel.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod splitter;

use thiserror::Error;

use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Could not generate cover letter: {0}")]
    CoverLetter(#[source] LlmError),

    #[error("Could not generate outreach message: {0}")]
    Outreach(#[source] LlmError),

    #[error("Could not generate cover letter: the model answer contained no letter sections")]
    EmptySections,
}
