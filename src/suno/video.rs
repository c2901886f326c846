use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::{
    config::AppContext,
    error::ForwardError,
    suno::{UpstreamCall, forward, task_id_from},
    types::MvPayload,
};

const SUBMIT_FAILED: &str = "MV生成リクエストに失敗しました";
const STATUS_FAILED: &str = "MVステータス取得に失敗しました";

/// Submits a music video render for a finished song via the upstream
/// `POST /mp4/generate` endpoint.
///
/// `payload.task_id` identifies the song generation job and
/// `payload.music_index` selects which of its tracks to render. Returns a
/// new task identifier for the video job.
pub async fn submit(
    ctx: &AppContext,
    api_key: &str,
    payload: &MvPayload,
) -> Result<String, ForwardError> {
    let data = forward(
        ctx,
        api_key,
        UpstreamCall {
            method: Method::POST,
            path: "/mp4/generate",
            query: None,
            body: Some(serde_json::to_value(payload).unwrap_or_default()),
            timeout: Duration::from_secs(30),
            fallback_msg: SUBMIT_FAILED,
        },
    )
    .await?;

    task_id_from(data, SUBMIT_FAILED)
}

/// Polls a music video render via `GET /mp4/record-info`.
///
/// Same contract as [`crate::suno::music::status`] against the mp4
/// endpoint.
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
            path: "/mp4/record-info",
            query: Some(&[("taskId", task_id)]),
            body: None,
            timeout: Duration::from_secs(15),
            fallback_msg: STATUS_FAILED,
        },
    )
    .await
}
