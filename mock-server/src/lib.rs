//! Stand-in for the Ed slides endpoint.
//!
//! Accepts `POST /api/lessons/{lesson_id}/slides`, records the raw request
//! and answers with the new slide's id inside a `{"lesson": ...}` envelope,
//! the shape Ed's slide creation reply is decoded as. Tests read the recorded requests back
//! through `MockState`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::http::StatusCode;

/// A request exactly as the server received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRequest {
    pub lesson_id: u64,
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LessonEnvelope {
    pub lesson: Slide,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
}

/// Shared recorder plus the status to answer authorised requests with.
#[derive(Clone)]
pub struct MockState {
    captured: Arc<RwLock<Vec<CapturedRequest>>>,
    status: StatusCode,
}

impl Default for MockState {
    fn default() -> Self {
        Self::with_status(StatusCode::CREATED)
    }
}

impl MockState {
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            captured: Arc::new(RwLock::new(Vec::new())),
            status,
        }
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.read().await.clone()
    }

    /// Same as `captured`, for callers outside the runtime. Panics if called
    /// from async context.
    pub fn captured_blocking(&self) -> Vec<CapturedRequest> {
        self.captured.blocking_read().clone()
    }
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/api/lessons/{lesson_id}/slides", post(create_slide))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn create_slide(
    State(state): State<MockState>,
    Path(lesson_id): Path<u64>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorised = headers.contains_key("x-token");

    let id = {
        let mut captured = state.captured.write().await;
        captured.push(CapturedRequest {
            lesson_id,
            method: method.to_string(),
            path: uri.path().to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect(),
            body: body.to_vec(),
        });
        captured.len() as u64
    };

    if !authorised {
        let body = ErrorBody {
            code: "bad_token".to_string(),
        };
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let lesson = Slide {
        id,
        kind: "document".to_string(),
    };
    (state.status, Json(LessonEnvelope { lesson })).into_response()
}
