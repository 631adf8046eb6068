use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{error::AppError, models::blog::BlogDetail, repo};

/// Lists published blogs (most recently updated first).
pub async fn list_blogs(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs = repo::blogs::list_published(&pool).await?;

    Ok(Json(blogs))
}

/// Retrieves a single blog by slug, with its threaded comment tree.
///
/// Only approved comments appear anywhere in the tree; a reply whose parent
/// was rejected is hidden along with its own replies.
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blog = repo::blogs::find_by_slug(&pool, &slug)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    let comments = repo::comments::fetch_approved(&pool, blog.id).await?;
    let tree = repo::comments::build_tree(&comments);

    Ok(Json(BlogDetail::new(blog, tree)))
}
