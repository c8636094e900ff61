use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

/// `GET /` - static greeting, no side effects.
#[tracing::instrument(name = "Index")]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Bienvenue",
    })
}
