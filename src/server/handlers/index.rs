use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET / — the bundled chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
