use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::{
    config::AppContext,
    error::ForwardError,
    suno::{UpstreamCall, forward, task_id_from},
    types::GeneratePayload,
};

const SUBMIT_FAILED: &str = "生成に失敗しました";
const STATUS_FAILED: &str = "ステータス取得に失敗しました";

/// Submits a song generation job to the upstream `POST /generate`
/// endpoint.
///
/// The payload uses the upstream's custom mode: lyrics, style and title
/// are caller-controlled, everything else is fixed. Returns the task
/// identifier the browser polls with.
///
/// # Arguments
///
/// * `ctx` - Immutable process context (API base URL)
/// * `api_key` - Resolved bearer credential for this request
/// * `payload` - The fully-defaulted generation payload
///
/// # Errors
///
/// Returns a [`ForwardError`] for transport failures, non-200 upstream
/// statuses and logical failures, including a success envelope without a
/// `taskId`.
pub async fn submit(
    ctx: &AppContext,
    api_key: &str,
    payload: &GeneratePayload,
) -> Result<String, ForwardError> {
    let data = forward(
        ctx,
        api_key,
        UpstreamCall {
            method: Method::POST,
            path: "/generate",
            query: None,
            body: Some(serde_json::to_value(payload).unwrap_or_default()),
            timeout: Duration::from_secs(30),
            fallback_msg: SUBMIT_FAILED,
        },
    )
    .await?;

    task_id_from(data, SUBMIT_FAILED)
}

/// Polls a song generation job via `GET /generate/record-info`.
///
/// Returns the envelope's `data` mapping verbatim; its shape (progress
/// state, audio URLs) is interpreted by the browser, not here.
pub async fn status(
    ctx: &AppContext,
    api_key: &str,
    task_id: &str,
) -> Result<Value, ForwardError> {
    forward(
        ctx,
        api_key,
        UpstreamCall {
            method: Method::GET,
            path: "/generate/record-info",
            query: Some(&[("taskId", task_id)]),
            body: None,
            timeout: Duration::from_secs(15),
            fallback_msg: STATUS_FAILED,
        },
    )
    .await
}
