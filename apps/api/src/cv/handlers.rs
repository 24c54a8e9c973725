//! Axum route handlers for the CV slot.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::cv::parser::parse_cv;
use crate::cv::store::CurrentCv;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub message: String,
    pub filename: String,
    pub extracted_name: String,
}

#[derive(Debug, Serialize)]
pub struct CvStatusResponse {
    pub has_cv: bool,
    pub filename: Option<String>,
    pub cv_analysis: Option<String>,
    pub extracted_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RemoveCvResponse {
    pub status: String,
    pub message: String,
}

/// POST /upload-cv
///
/// Accepts one multipart file (.pdf, .docx or .txt), extracts its text,
/// parses it with the model and replaces the current CV. The slot is left
/// untouched on any failure.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart?;
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if let Some(filename) = field.file_name().map(str::to_string) {
            let content = field.bytes().await?;
            upload = Some((filename, content));
            break;
        }
    }
    let (filename, content) =
        upload.ok_or_else(|| AppError::Validation("No file was uploaded".to_string()))?;

    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::UnsupportedFormat(format!(
            "'{filename}' is not supported. Please upload a .pdf, .docx or .txt file"
        ))
    })?;

    info!("Received CV upload {filename:?} ({kind:?}, {} bytes)", content.len());

    let text = extract_text(content, kind).await;
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "No extractable text found in '{filename}'"
        )));
    }

    let profile = parse_cv(&text, state.llm.as_ref()).await;
    let extracted_name = profile.extracted_name.clone();

    state
        .cv_slot
        .replace(CurrentCv {
            filename: filename.clone(),
            profile,
        })
        .await;

    info!("Current CV replaced by {filename:?} (name: {extracted_name})");

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        message: format!("CV '{filename}' uploaded and analyzed"),
        filename,
        extracted_name,
    }))
}

/// GET /cv-status
pub async fn handle_cv_status(State(state): State<AppState>) -> Json<CvStatusResponse> {
    let response = match state.cv_slot.current().await {
        Some(cv) => CvStatusResponse {
            has_cv: true,
            filename: Some(cv.filename),
            cv_analysis: Some(cv.profile.rendered_summary),
            extracted_name: Some(cv.profile.extracted_name),
        },
        None => CvStatusResponse {
            has_cv: false,
            filename: None,
            cv_analysis: None,
            extracted_name: None,
        },
    };
    Json(response)
}

/// DELETE /cv
///
/// Always succeeds, whether or not a CV was stored.
pub async fn handle_remove_cv(State(state): State<AppState>) -> Json<RemoveCvResponse> {
    let removed = state.cv_slot.clear().await;
    let message = if removed {
        "CV removed"
    } else {
        "No CV was stored"
    };
    info!("{message}");
    Json(RemoveCvResponse {
        status: "success".to_string(),
        message: message.to_string(),
    })
}
