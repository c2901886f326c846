use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    config::AppContext,
    error::ForwardError,
    suno,
    types::{
        CALLBACK_URL, DEFAULT_TITLE, GENERATION_MODEL, GeneratePayload, GenerateRequest,
        TaskAccepted,
    },
    warning,
};

/// `POST /api/generate`: submit a song generation job.
///
/// Requires non-blank lyrics and a resolvable credential; style and title
/// fall back to the J-rap defaults. On success returns the upstream task
/// identifier the browser polls `/api/status` with.
pub async fn generate(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<TaskAccepted>, ForwardError> {
    let lyrics = req.lyrics.trim();
    if lyrics.is_empty() {
        return Err(ForwardError::MissingField("歌詞を入力してください"));
    }

    let api_key = ctx
        .resolve_api_key(req.api_key.as_deref())
        .ok_or(ForwardError::MissingField("Suno APIキーを入力してください"))?;

    // A present-but-blank title also falls back to the default.
    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let payload = GeneratePayload {
        custom_mode: true,
        instrumental: false,
        model: GENERATION_MODEL.to_string(),
        style: req.style,
        title,
        prompt: lyrics.to_string(),
        call_back_url: CALLBACK_URL.to_string(),
    };

    let task_id = suno::music::submit(&ctx, &api_key, &payload)
        .await
        .inspect_err(|e| warning!("Generation submit failed: {}", e))?;

    Ok(Json(TaskAccepted { task_id }))
}
