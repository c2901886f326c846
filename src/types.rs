use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default musical style applied when a request omits `style`.
pub const DEFAULT_STYLE: &str = "Japanese hip-hop rap, J-rap";

/// Default track title applied when a request omits `title` or sends a
/// blank one.
pub const DEFAULT_TITLE: &str = "日本語ラップ";

/// Upstream model identifier sent with every generation request.
pub const GENERATION_MODEL: &str = "V4_5";

/// Placeholder callback URL. The upstream API requires the field but this
/// proxy polls for results instead of receiving webhooks, so it is never
/// called.
pub const CALLBACK_URL: &str = "https://example.com/callback";

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub lyrics: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Query parameters of `GET /api/status` and `GET /api/mv-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Body of `POST /api/generate-mv`.
#[derive(Debug, Clone, Deserialize)]
pub struct MvRequest {
    #[serde(default)]
    pub music_id: String,
    #[serde(default)]
    pub music_index: i64,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Successful submission response: the upstream task identifier the
/// browser polls with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAccepted {
    pub task_id: String,
}

/// The upstream API's uniform response wrapper.
///
/// `code` 200 signals logical success; any other value is a failure even
/// when the transport status is 200. `data` is deliberately kept opaque:
/// its shape varies per endpoint and the browser interprets it.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Payload of the upstream `POST /generate` call (custom mode).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayload {
    pub custom_mode: bool,
    pub instrumental: bool,
    pub model: String,
    pub style: String,
    pub title: String,
    pub prompt: String,
    pub call_back_url: String,
}

/// Payload of the upstream `POST /mp4/generate` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MvPayload {
    pub task_id: String,
    pub music_index: i64,
    pub call_back_url: String,
}
