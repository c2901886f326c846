use axum::response::Html;

/// Serves the bundled single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
