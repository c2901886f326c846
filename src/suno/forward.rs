use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};

use crate::{config::AppContext, error::ForwardError, types::Envelope};

/// One parameterized upstream call: everything that varies between the
/// four proxy operations.
pub struct UpstreamCall<'a> {
    pub method: Method,
    /// Path below the API base, with a leading slash.
    pub path: &'a str,
    /// Query parameters (status calls); `None` for submissions.
    pub query: Option<&'a [(&'a str, &'a str)]>,
    /// JSON body (submissions); `None` for status calls.
    pub body: Option<Value>,
    pub timeout: Duration,
    /// Message used when the upstream fails logically without one of its
    /// own.
    pub fallback_msg: &'a str,
}

/// Executes one bounded outbound call and classifies the outcome.
///
/// Builds the request from `ctx.api_base` and the call description,
/// attaches the bearer credential and sends it with the call's timeout.
/// On logical success the envelope's `data` mapping is returned verbatim
/// (an empty object when the upstream omits it); every failure maps onto
/// the [`ForwardError`] taxonomy.
///
/// A body that is not a valid `{code, msg, data}` envelope despite a 200
/// transport status is treated as a logical failure with the fallback
/// message.
pub async fn forward(
    ctx: &AppContext,
    api_key: &str,
    call: UpstreamCall<'_>,
) -> Result<Value, ForwardError> {
    let url = format!("{}{}", ctx.api_base, call.path);

    let client = Client::new();
    let mut request = client
        .request(call.method, &url)
        .bearer_auth(api_key)
        .timeout(call.timeout);
    if let Some(query) = call.query {
        request = request.query(query);
    }
    if let Some(body) = &call.body {
        request = request.json(body);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => return Err(ForwardError::Transport(e.to_string())),
    };

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(ForwardError::UpstreamHttp {
            status: status.as_u16(),
            body,
        });
    }

    let envelope = response
        .json::<Envelope>()
        .await
        .map_err(|_| ForwardError::UpstreamLogical(call.fallback_msg.to_string()))?;

    if envelope.code != 200 {
        let msg = envelope
            .msg
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| call.fallback_msg.to_string());
        return Err(ForwardError::UpstreamLogical(msg));
    }

    Ok(envelope
        .data
        .unwrap_or_else(|| Value::Object(Map::new())))
}

/// Pulls the upstream task identifier out of a submission's `data`
/// mapping.
///
/// The upstream occasionally changes its success shapes; a logical
/// success without a `taskId` is reported as a logical failure rather
/// than a crash.
pub(crate) fn task_id_from(data: Value, fallback_msg: &str) -> Result<String, ForwardError> {
    data.get("taskId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ForwardError::UpstreamLogical(fallback_msg.to_string()))
}
