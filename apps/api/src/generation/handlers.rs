//! Axum route handler for the generation pipeline.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::company::analyzer::{analyze, normalize_url};
use crate::errors::AppError;
use crate::generation::generator::{
    generate_cover_letters, generate_outreach_message, CoverLetterRequest, DEFAULT_POSITION,
};
use crate::models::content::{GeneratedContent, LetterVariants};
use crate::models::cv::PLACEHOLDER_NAME;
use crate::persister::save_application;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub company_url: String,
    pub position_title: Option<String>,
    pub user_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: String,
    pub company: String,
    pub output_path: String,
    pub company_analysis: String,
    pub cover_letters: LetterVariants,
    pub outreach_message: String,
    pub cv_used: bool,
    /// Seconds spent on the whole request.
    pub processing_time: f64,
}

/// POST /generate
///
/// Analyze company → generate letters (one call) → generate outreach
/// message (one call) → persist → respond.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let started = Instant::now();
    let Json(request) = payload?;

    if request.company_url.trim().is_empty() {
        return Err(AppError::Validation("company_url cannot be empty".to_string()));
    }
    let url = normalize_url(&request.company_url);
    let position = request
        .position_title
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_POSITION);
    let notes = request.user_notes.as_deref().unwrap_or("");

    info!("Received generation request for {url}");

    let company = analyze(&state.http, &url).await?;

    let current_cv = state.cv_slot.current().await;
    let cv = current_cv.as_ref().map(|c| &c.profile);
    let applicant_name = cv
        .map(|p| p.extracted_name.as_str())
        .unwrap_or(PLACEHOLDER_NAME);

    let letters = generate_cover_letters(
        state.llm.as_ref(),
        state.splitter.as_ref(),
        &CoverLetterRequest {
            company: &company,
            cv,
            position,
            notes,
            applicant_name,
            include_long: state.config.include_long_letter,
        },
    )
    .await?;

    let outreach_message =
        generate_outreach_message(state.llm.as_ref(), &company, applicant_name).await?;

    let content = GeneratedContent::new(letters, outreach_message);

    let output_path = save_application(
        &state.config.output_dir,
        &company,
        &content.letters(),
        &content.outreach_message,
        position,
    )
    .await?;

    let processing_time = started.elapsed().as_secs_f64();
    info!(
        "Generated application for {:?} in {processing_time:.2}s",
        company.name
    );

    Ok(Json(GenerateResponse {
        status: "success".to_string(),
        output_path: output_path.display().to_string(),
        cover_letters: content.letters(),
        outreach_message: content.outreach_message,
        cv_used: cv.is_some(),
        processing_time,
        company: company.name,
        company_analysis: company.summary_text,
    }))
}
