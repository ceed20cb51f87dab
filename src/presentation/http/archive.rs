use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::use_cases::archive::latest_posts::LatestArchivePosts;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct ArchiveResponse {
    /// Upstream post records, forwarded unmodified.
    #[schema(value_type = Vec<Object>)]
    pub posts: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArchiveError {
    pub error: String,
}

#[utoipa::path(
    get,
    path = "/api/substack",
    tag = "Archive",
    responses(
        (status = 200, description = "Newest archive posts", body = ArchiveResponse),
        (status = 500, description = "Archive unavailable", body = ArchiveError)
    )
)]
pub async fn list_archive_posts(
    State(ctx): State<AppContext>,
) -> Result<Json<ArchiveResponse>, (StatusCode, Json<ArchiveError>)> {
    let source = ctx.archive_source();
    let uc = LatestArchivePosts {
        source: source.as_ref(),
    };
    match uc.execute().await {
        Ok(posts) => Ok(Json(ArchiveResponse { posts })),
        Err(err) => {
            // The cause stays in the logs; callers only see the fixed message.
            error!(error = ?err, "substack_archive_fetch_failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ArchiveError {
                    error: "Unable to load Substack posts".to_string(),
                }),
            ))
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/substack", get(list_archive_posts))
        .with_state(ctx)
}
