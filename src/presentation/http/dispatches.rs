use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::dispatches::list_dispatches::ListDispatches;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct DispatchItem {
    pub id: String,
    pub title: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/dispatches",
    tag = "Dispatches",
    responses((status = 200, description = "Journal entries, newest first", body = [DispatchItem]))
)]
pub async fn list_dispatches(State(ctx): State<AppContext>) -> Json<Vec<DispatchItem>> {
    let uc = ListDispatches {
        providers: ctx.dispatch_providers(),
    };
    // Source failures degrade inside the use case; this endpoint never 5xxs.
    let items = uc
        .execute()
        .await
        .into_iter()
        .map(|d| DispatchItem {
            id: d.id,
            title: d.title,
            date: d.date,
            content: d.content,
        })
        .collect();
    Json(items)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/dispatches", get(list_dispatches))
        .with_state(ctx)
}
