use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde_json::Value;

use crate::{
    config::AppContext,
    error::ForwardError,
    suno,
    types::{CALLBACK_URL, MvPayload, MvRequest, StatusQuery, TaskAccepted},
    warning,
};

/// `POST /api/generate-mv`: request a music video render for a finished
/// song.
///
/// `music_id` is the song generation task and `music_index` selects the
/// track within it (default 0, passed through unvalidated). Returns a new
/// task identifier for the video job.
pub async fn generate_mv(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(req): Json<MvRequest>,
) -> Result<Json<TaskAccepted>, ForwardError> {
    let music_id = req.music_id.trim();
    if music_id.is_empty() {
        return Err(ForwardError::MissingField("music_idが指定されていません"));
    }

    let api_key = ctx
        .resolve_api_key(req.api_key.as_deref())
        .ok_or(ForwardError::MissingField("Suno APIキーを入力してください"))?;

    let payload = MvPayload {
        task_id: music_id.to_string(),
        music_index: req.music_index,
        call_back_url: CALLBACK_URL.to_string(),
    };

    let task_id = suno::video::submit(&ctx, &api_key, &payload)
        .await
        .inspect_err(|e| warning!("MV submit failed: {}", e))?;

    Ok(Json(TaskAccepted { task_id }))
}

/// `GET /api/mv-status`: poll a music video render.
pub async fn mv_status(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Value>, ForwardError> {
    if params.task_id.is_empty() {
        return Err(ForwardError::MissingField("task_idが指定されていません"));
    }

    let api_key = ctx
        .resolve_api_key(params.api_key.as_deref())
        .ok_or(ForwardError::MissingField("Suno APIキーを入力してください"))?;

    let data = suno::video::status(&ctx, &api_key, &params.task_id).await?;
    Ok(Json(data))
}
