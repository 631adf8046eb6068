use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::project::{ProjectDetail, ProjectListParams},
    repo,
};

/// Lists all projects, optionally filtered by category, status and keyword.
pub async fn list_projects(
    State(pool): State<SqlitePool>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    let projects = repo::projects::list(&pool, &params).await?;

    Ok(Json(projects))
}

/// Retrieves a single project by slug, with its full gallery.
pub async fn get_project(
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = repo::projects::find_by_slug(&pool, &slug)
        .await?
        .ok_or(AppError::NotFound("Project not found".to_string()))?;

    let gallery_items = repo::projects::gallery_images(&pool, project.id).await?;

    Ok(Json(ProjectDetail {
        title: project.title,
        description: project.description,
        size: project.size,
        dimensions: project.dimensions,
        creation_year: project.creation_year,
        scale: project.scale,
        gallery_items,
    }))
}
