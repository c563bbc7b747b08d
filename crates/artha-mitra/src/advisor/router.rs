use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::analysis::AnalysisReport;
use super::intake::AnalyzeRequest;
use super::service::AdvisorService;

/// Router builder exposing the advisory endpoints.
pub fn advisor_router(service: Arc<AdvisorService>) -> Router {
    Router::new()
        .route("/api/v1/advisor/analyze", post(analyze_handler))
        .route("/api/v1/advisor/chat", post(chat_handler))
        .with_state(service)
}

/// Analysis report plus the response timestamp. Timestamping happens here at
/// the edge; the engine itself never reads the clock.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub generated_at: DateTime<Local>,
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<AdvisorService>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match request.into_profile() {
        Ok(profile) => {
            let report = service.analyze(&profile);
            let body = AnalyzeResponse {
                report,
                generated_at: Local::now(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn chat_handler(
    State(service): State<Arc<AdvisorService>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let body = ChatResponse {
        response: service.chat(&request.message).to_string(),
        generated_at: Local::now(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
