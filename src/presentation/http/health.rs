use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health() -> Json<HealthResp> {
    // No backing store to probe; reachable means healthy.
    Json(HealthResp { status: "ok" })
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
