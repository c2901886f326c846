//! The forwarding error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can hit falls into one of four tiers, and each
//! tier maps to a fixed HTTP shape. Responses always carry a JSON body of
//! the form `{"error": "<message>"}`; user-facing messages are Japanese,
//! matching the UI the proxy serves.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Outcome classification for one forwarded request.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// A required input was absent or empty after trimming. Surfaced as
    /// HTTP 400 with the message verbatim.
    #[error("{0}")]
    MissingField(&'static str),

    /// The outbound call could not complete (DNS, connection, timeout).
    /// Surfaced as HTTP 500.
    #[error("通信エラー: {0}")]
    Transport(String),

    /// The outbound call completed with a non-200 transport status.
    /// Surfaced with that same status code and the raw upstream body.
    #[error("APIエラー ({status}): {body}")]
    UpstreamHttp { status: u16, body: String },

    /// Transport succeeded but the upstream envelope's `code` was not 200
    /// (or the body was not a valid envelope). Surfaced as HTTP 500 with
    /// the envelope's message or a per-endpoint fallback.
    #[error("{0}")]
    UpstreamLogical(String),
}

impl ForwardError {
    fn status(&self) -> StatusCode {
        match self {
            ForwardError::MissingField(_) => StatusCode::BAD_REQUEST,
            ForwardError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ForwardError::UpstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ForwardError::UpstreamLogical(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
