//! # StockChat Widget HTTP Routes
//!
//! File: cli/src/commands/srv/routes.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The HTTP surface behind the browser widget:
//!
//! | Method | Path            | Response                                   |
//! |--------|-----------------|--------------------------------------------|
//! | GET    | `/`             | The rendered widget page                   |
//! | POST   | `/api/respond`  | `{ "reply", "kind" }` for `{ "text" }`     |
//! | GET    | `/api/symbols`  | The symbol table as a JSON array           |
//!
//! The browser owns the transcript and the reply delay; the server is
//! stateless per request. Blank text is rejected with `400` and an
//! `{ "error" }` body, mirroring the surface's "ignore blank input" rule.
//!
use crate::chat::{ReplyKind, Responder};
use crate::core::error::StockchatError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub page: Arc<str>,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub reply: String,
    #[serde(flatten)]
    pub kind: ReplyKind,
}

#[derive(Debug, Serialize)]
pub struct SymbolEntry {
    pub symbol: &'static str,
    pub company: &'static str,
    pub price: f64,
    pub outlook: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing error; everything the API can reject is a bad request.
pub struct ApiError(StockchatError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/respond", post(respond))
        .route("/api/symbols", get(symbols))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<RespondResponse>, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError(StockchatError::EmptyInput));
    }
    let (reply, kind) = state.responder.respond_with_kind(text);
    debug!("Answered widget request as {:?}", kind);
    Ok(Json(RespondResponse { reply, kind }))
}

async fn symbols(State(state): State<AppState>) -> Json<Vec<SymbolEntry>> {
    let entries = state
        .responder
        .table()
        .iter()
        .map(|(symbol, record)| SymbolEntry {
            symbol,
            company: record.company,
            price: record.price,
            outlook: record.outlook,
        })
        .collect();
    Json(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::GREETING_REPLY;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            responder: Arc::new(Responder::new().unwrap()),
            page: Arc::from("<html>widget</html>"),
        })
    }

    async fn post_text(body: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/respond")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>widget</html>");
    }

    #[tokio::test]
    async fn test_respond_quote() {
        let (status, json) = post_text(r#"{"text":"Tell me about AAPL"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "quote");
        assert_eq!(json["symbol"], "AAPL");
        assert!(json["reply"].as_str().unwrap().contains("Apple Inc."));
    }

    #[tokio::test]
    async fn test_respond_greeting() {
        let (status, json) = post_text(r#"{"text":"  hey there "}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "greeting");
        assert_eq!(json["reply"], GREETING_REPLY);
    }

    #[tokio::test]
    async fn test_respond_rejects_blank_text() {
        let (status, json) = post_text(r#"{"text":"   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Message text must not be blank.");
    }

    #[tokio::test]
    async fn test_respond_rejects_malformed_body() {
        let (status, _) = post_text("not json").await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_symbols_lists_table() {
        let response = app()
            .oneshot(Request::builder().uri("/api/symbols").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0]["symbol"], "AAPL");
        assert_eq!(list[3]["company"], "Alphabet Inc.");
    }
}
