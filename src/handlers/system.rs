use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

// Embed the stylesheet in the binary
const STYLESHEET: &str = include_str!("../../static/styles.css");

/// Liveness check.
pub async fn status_get() -> &'static str {
    "ok"
}

pub async fn stylesheet_get() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=86400"),
        ],
        STYLESHEET,
    )
}
