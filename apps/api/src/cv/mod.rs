// CV pipeline: uploaded document → extracted text → model-parsed profile,
// held in the single "current CV" slot until replaced or removed.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod render;
pub mod store;
