use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::content::{self, About, Book, Project};

#[derive(Debug, Serialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<Book>,
    pub goodreads_profile: String,
}

#[utoipa::path(
    get,
    path = "/api/content/projects",
    tag = "Content",
    responses((status = 200, description = "Portfolio projects", body = [Project]))
)]
pub async fn list_projects() -> Json<Vec<Project>> {
    Json(content::projects())
}

#[utoipa::path(
    get,
    path = "/api/content/books",
    tag = "Content",
    responses((status = 200, description = "Bookshelf", body = BooksResponse))
)]
pub async fn list_books() -> Json<BooksResponse> {
    Json(BooksResponse {
        books: content::books(),
        goodreads_profile: content::goodreads_profile(),
    })
}

#[utoipa::path(
    get,
    path = "/api/content/about",
    tag = "Content",
    responses((status = 200, description = "About page content", body = About))
)]
pub async fn get_about() -> Json<About> {
    Json(content::about())
}

pub fn routes() -> Router {
    Router::new()
        .route("/content/projects", get(list_projects))
        .route("/content/books", get(list_books))
        .route("/content/about", get(get_about))
}
