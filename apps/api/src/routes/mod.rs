pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::cv::handlers as cv_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(generation_handlers::handle_generate))
        .route("/upload-cv", post(cv_handlers::handle_upload_cv))
        .route("/cv-status", get(cv_handlers::handle_cv_status))
        .route("/cv", delete(cv_handlers::handle_remove_cv))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::cv::store::CurrentCv;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::LanguageModel;
    use crate::models::cv::{CvProfile, PLACEHOLDER_NAME};
    use crate::persister::SHORT_LETTER_FILE;

    const BOUNDARY: &str = "jobpost-test-boundary";

    fn state_with(llm: Arc<dyn LanguageModel>, output_dir: &std::path::Path) -> AppState {
        AppState::new(Config::for_tests(output_dir.to_path_buf()), llm).unwrap()
    }

    fn upload_request(filename: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\
             \r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/upload-cv")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn stored_cv(filename: &str) -> CurrentCv {
        CurrentCv {
            filename: filename.to_string(),
            profile: CvProfile {
                raw_text: "raw".to_string(),
                structured: None,
                rendered_summary: "Technical Skills: Rust".to_string(),
                extracted_name: "Jane Doe".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(Arc::new(ScriptedModel::new()), dir.path()));

        let response = app.clone().oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");

        let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_txt_replaces_slot_and_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(
            ScriptedModel::new().reply(r#"{"name": "Jane Doe", "technical_skills": ["Rust"]}"#),
        );
        let state = state_with(llm, dir.path());
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(upload_request("Jane_CV.TXT", "Jane Doe\nRust developer"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["filename"], "Jane_CV.TXT");
        assert_eq!(body["extracted_name"], "Jane Doe");

        let response = app.oneshot(empty_request("GET", "/cv-status")).await.unwrap();
        let status = body_json(response).await;
        assert_eq!(status["has_cv"], true);
        assert_eq!(status["filename"], "Jane_CV.TXT");
        assert_eq!(status["extracted_name"], "Jane Doe");
        assert!(status["cv_analysis"]
            .as_str()
            .unwrap()
            .contains("Technical Skills: Rust"));
    }

    #[tokio::test]
    async fn test_upload_unsupported_extension_keeps_slot() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedModel::new());
        let state = state_with(llm.clone(), dir.path());
        state.cv_slot.replace(stored_cv("old.pdf")).await;

        let response = build_router(state.clone())
            .oneshot(upload_request("cv.xyz", "whatever"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "UNSUPPORTED_FORMAT");
        assert_eq!(state.cv_slot.current().await.unwrap().filename, "old.pdf");
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_upload_whitespace_only_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(Arc::new(ScriptedModel::new()), dir.path());

        let response = build_router(state.clone())
            .oneshot(upload_request("empty.txt", "  \n\t "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["detail"].as_str().unwrap().contains("No extractable text"));
        assert!(state.cv_slot.current().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_cv_always_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(Arc::new(ScriptedModel::new()), dir.path());
        state.cv_slot.replace(stored_cv("cv.pdf")).await;
        let app = build_router(state.clone());

        let response = app.clone().oneshot(empty_request("DELETE", "/cv")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.cv_slot.current().await.is_none());

        let response = app.clone().oneshot(empty_request("DELETE", "/cv")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(empty_request("GET", "/cv-status")).await.unwrap();
        let status = body_json(response).await;
        assert_eq!(status["has_cv"], false);
        assert!(status["filename"].is_null());
    }

    #[tokio::test]
    async fn test_generate_end_to_end_with_cv() {
        let mut site = mockito::Server::new_async().await;
        site.mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(
                "<html><head><title>Acme Software | Home</title>\
                 <meta name=\"description\" content=\"Custom software\"></head>\
                 <body><p>Our tech stack: Rust and Go.</p></body></html>",
            )
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(
            ScriptedModel::new()
                .reply("1. Short version\nHello there.\n2. Medium version\nLonger text.")
                .reply("Hi Acme!"),
        );
        let state = state_with(llm.clone(), dir.path());
        state.cv_slot.replace(stored_cv("cv.pdf")).await;

        let response = build_router(state)
            .oneshot(json_request(
                "POST",
                "/generate",
                serde_json::json!({
                    "company_url": format!("{}/", site.url()),
                    "position_title": "backend intern",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["company"], "Acme Software");
        assert_eq!(body["cover_letters"]["short"], "Hello there.\n");
        assert_eq!(body["cover_letters"]["medium"], "Longer text.\n");
        assert!(body["cover_letters"].get("long").is_none());
        assert_eq!(body["outreach_message"], "Hi Acme!");
        assert_eq!(body["cv_used"], true);
        assert!(body["processing_time"].as_f64().unwrap() >= 0.0);
        assert!(body["company_analysis"]
            .as_str()
            .unwrap()
            .contains("Technologies: go, rust"));

        let output_path = std::path::PathBuf::from(body["output_path"].as_str().unwrap());
        let short = std::fs::read_to_string(output_path.join(SHORT_LETTER_FILE)).unwrap();
        assert_eq!(short, "Hello there.\n");

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("Technical Skills: Rust"));
        assert!(prompts[1].contains("Sender name: Jane Doe"));
    }

    #[tokio::test]
    async fn test_generate_missing_company_url_is_json_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedModel::new());
        let response = build_router(state_with(llm.clone(), dir.path()))
            .oneshot(json_request(
                "POST",
                "/generate",
                serde_json::json!({ "position_title": "backend intern" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["detail"].as_str().unwrap().contains("company_url"));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_multipart_body_is_json_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(Arc::new(ScriptedModel::new()), dir.path());

        let response = build_router(state.clone())
            .oneshot(json_request(
                "POST",
                "/upload-cv",
                serde_json::json!({ "file": "cv.txt" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(!body["detail"].as_str().unwrap().is_empty());
        assert!(state.cv_slot.current().await.is_none());
    }

    #[tokio::test]
    async fn test_generate_forbidden_page_is_bad_request() {
        let mut site = mockito::Server::new_async().await;
        site.mock("GET", "/")
            .with_status(200)
            .with_body("<title>403 Forbidden</title>")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedModel::new());
        let response = build_router(state_with(llm.clone(), dir.path()))
            .oneshot(json_request(
                "POST",
                "/generate",
                serde_json::json!({ "company_url": site.url() }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "ACCESS_DENIED");
        assert!(body["detail"].as_str().unwrap().contains("root domain"));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generate_model_failure_is_server_error() {
        let mut site = mockito::Server::new_async().await;
        site.mock("GET", "/")
            .with_status(200)
            .with_body("<title>Acme Software</title>")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedModel::new().fail(500, "model crashed"));
        let response = build_router(state_with(llm.clone(), dir.path()))
            .oneshot(json_request(
                "POST",
                "/generate",
                serde_json::json!({ "company_url": site.url() }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "GENERATION_ERROR");
        assert!(body["detail"].as_str().unwrap().contains("model crashed"));
        assert!(llm.prompts()[0].contains(PLACEHOLDER_NAME));
    }
}
