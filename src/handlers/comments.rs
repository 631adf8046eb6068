use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{error::AppError, models::comment::CreateCommentRequest, repo};

/// Creates a top-level comment on a blog.
///
/// The blog must exist (404 otherwise); the fields must pass validation
/// (400 otherwise). Comments are auto-approved.
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let blog = repo::blogs::find_by_slug(&pool, &slug)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    let comment = repo::comments::create(&pool, &blog, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": comment.id,
            "name": comment.name,
            "email": comment.email,
            "text": comment.text,
            "parent": comment.parent_id,
        })),
    ))
}

/// Creates a reply to an existing comment.
///
/// Resolution order is observable through status codes: unknown blog slug and
/// unknown parent id are both 404, and only then is the cross-blog ownership
/// rule evaluated (400).
pub async fn create_reply(
    State(pool): State<SqlitePool>,
    Path((slug, parent_id)): Path<(String, i64)>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let blog = repo::blogs::find_by_slug(&pool, &slug)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    let comment = repo::comments::create_reply(&pool, &blog, parent_id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": comment.id,
            "name": comment.name,
            "email": comment.email,
            "text": comment.text,
            "parent": comment.parent_id,
        })),
    ))
}
