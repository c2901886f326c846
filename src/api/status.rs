use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde_json::Value;

use crate::{config::AppContext, error::ForwardError, suno, types::StatusQuery};

/// `GET /api/status`: poll a song generation job.
///
/// Relays the upstream record-info `data` mapping verbatim; the browser
/// interprets its progress state and audio URLs.
pub async fn status(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Value>, ForwardError> {
    if params.task_id.is_empty() {
        return Err(ForwardError::MissingField("task_idが指定されていません"));
    }

    let api_key = ctx
        .resolve_api_key(params.api_key.as_deref())
        .ok_or(ForwardError::MissingField("Suno APIキーを入力してください"))?;

    let data = suno::music::status(&ctx, &api_key, &params.task_id).await?;
    Ok(Json(data))
}
