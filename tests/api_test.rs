use std::sync::Arc;

use serde_json::{Value, json};
use sunoproxy::{config::AppContext, server};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path, query_param},
};

// Spawns the real app on an ephemeral port, pointed at the given upstream
// base URL, and returns its address.
async fn spawn_app(api_base: String, default_api_key: &str) -> String {
    let ctx = Arc::new(AppContext {
        api_base,
        default_api_key: default_api_key.to_string(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, server::router(ctx)).await.unwrap();
    });

    format!("http://{}", addr)
}

fn success_envelope(task_id: &str) -> Value {
    json!({"code": 200, "msg": "success", "data": {"taskId": task_id}})
}

#[tokio::test]
async fn missing_lyrics_is_rejected_with_400() {
    let app = spawn_app("http://unused.invalid".to_string(), "key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "   "}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "歌詞を入力してください");
}

#[tokio::test]
async fn missing_credential_is_rejected_with_400() {
    // No default key and no override.
    let app = spawn_app("http://unused.invalid".to_string(), "").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "夜の街を歩く"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Suno APIキーを入力してください");
}

#[tokio::test]
async fn blank_credential_override_falls_back_to_empty_default() {
    let app = spawn_app("http://unused.invalid".to_string(), "").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "夜の街を歩く", "api_key": "   "}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn successful_submission_returns_task_id() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "customMode": true,
            "instrumental": false,
            "model": "V4_5",
            "prompt": "夜の街を歩く"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("abc")))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "夜の街を歩く"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"task_id": "abc"}));
}

#[tokio::test]
async fn omitted_and_blank_titles_use_the_japanese_default() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_partial_json(json!({"title": "日本語ラップ"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("abc")))
        .expect(2)
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;
    let client = reqwest::Client::new();

    // Title omitted.
    let resp = client
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // Title present but blank after trimming.
    let resp = client
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞", "title": "  "}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn request_api_key_overrides_process_default() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer override-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("abc")))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "default-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞", "api_key": " override-key "}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn upstream_http_error_status_and_body_are_surfaced() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(451).set_body_string("region blocked"))
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 451);
    let body: Value = resp.json().await.unwrap();
    let msg = body["error"].as_str().unwrap();
    assert!(msg.contains("451"), "message was: {msg}");
    assert!(msg.contains("region blocked"), "message was: {msg}");
}

#[tokio::test]
async fn upstream_logical_error_maps_to_500_with_its_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 400, "msg": "bad style"})),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "bad style");
}

#[tokio::test]
async fn upstream_logical_error_without_message_uses_fallback() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 500})))
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "生成に失敗しました");
}

#[tokio::test]
async fn transport_failure_maps_to_500() {
    // Nothing listens on port 1; the connection is refused immediately.
    let app = spawn_app("http://127.0.0.1:1".to_string(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate"))
        .json(&json!({"lyrics": "歌詞"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().starts_with("通信エラー:"),
        "message was: {}",
        body["error"]
    );
}

#[tokio::test]
async fn status_requires_task_id() {
    let app = spawn_app("http://unused.invalid".to_string(), "key").await;

    let resp = reqwest::get(format!("{app}/api/status")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "task_idが指定されていません");
}

#[tokio::test]
async fn status_relays_upstream_data_and_is_idempotent() {
    let upstream = MockServer::start().await;
    let data = json!({
        "taskId": "abc",
        "status": "PENDING",
        "response": {"sunoData": []}
    });
    Mock::given(method("GET"))
        .and(path("/generate/record-info"))
        .and(query_param("taskId", "abc"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 200, "msg": "success", "data": data.clone()})),
        )
        .expect(2)
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;
    let client = reqwest::Client::new();

    let first: Value = client
        .get(format!("{app}/api/status?task_id=abc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("{app}/api/status?task_id=abc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, data);
    assert_eq!(first, second);
}

#[tokio::test]
async fn mv_submission_requires_music_id() {
    let app = spawn_app("http://unused.invalid".to_string(), "key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate-mv"))
        .json(&json!({"music_index": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "music_idが指定されていません");
}

#[tokio::test]
async fn mv_submission_defaults_music_index_to_zero() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mp4/generate"))
        .and(body_partial_json(json!({"taskId": "song-1", "musicIndex": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("mv-1")))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/generate-mv"))
        .json(&json!({"music_id": "song-1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"task_id": "mv-1"}));
}

#[tokio::test]
async fn mv_status_relays_upstream_data() {
    let upstream = MockServer::start().await;
    let data = json!({"taskId": "mv-1", "successFlag": "SUCCESS", "response": {"videoUrl": "https://cdn.example/mv-1.mp4"}});
    Mock::given(method("GET"))
        .and(path("/mp4/record-info"))
        .and(query_param("taskId", "mv-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 200, "msg": "success", "data": data.clone()})),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app(upstream.uri(), "test-key").await;

    let resp = reqwest::get(format!("{app}/api/mv-status?task_id=mv-1"))
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, data);
}

#[tokio::test]
async fn health_reports_ok_and_version() {
    let app = spawn_app("http://unused.invalid".to_string(), "").await;

    let resp = reqwest::get(format!("{app}/health")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn landing_page_is_served() {
    let app = spawn_app("http://unused.invalid".to_string(), "").await;

    let resp = reqwest::get(format!("{app}/")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(resp.text().await.unwrap().contains("日本語ラップ"));
}
