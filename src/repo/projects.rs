use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::project::{Project, ProjectListParams, ProjectSummary},
};

/// Lists project summaries, newest first, with optional category/status
/// filters and a keyword search over project and category titles.
pub async fn list(
    pool: &SqlitePool,
    params: &ProjectListParams,
) -> Result<Vec<ProjectSummary>, AppError> {
    let search_pattern = params.q.as_ref().map(|k| format!("%{}%", k));

    let projects = sqlx::query_as::<_, ProjectSummary>(
        "SELECT p.title, p.slug, c.title AS category, p.creation_year, \
                (SELECT g.image_url FROM gallery_items g \
                 WHERE g.project_id = p.id \
                 ORDER BY g.created_at ASC, g.id ASC LIMIT 1) AS banner_image \
         FROM projects p \
         LEFT JOIN categories c ON p.category_id = c.id \
         WHERE (?1 IS NULL OR c.title = ?1 COLLATE NOCASE) \
           AND (?2 IS NULL OR p.status = ?2 COLLATE NOCASE) \
           AND (?3 IS NULL OR p.title LIKE ?3 OR c.title LIKE ?3) \
         ORDER BY p.created_at DESC, p.title ASC",
    )
    .bind(&params.category)
    .bind(&params.status)
    .bind(search_pattern)
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

/// Resolves a project by its unique slug.
pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Project>, AppError> {
    let project = sqlx::query_as::<_, Project>(
        "SELECT id, title, slug, description, category_id, size, dimensions, \
                creation_year, scale, status, created_at \
         FROM projects \
         WHERE slug = ?1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(project)
}

/// Gallery image URLs of a project, oldest first.
pub async fn gallery_images(pool: &SqlitePool, project_id: i64) -> Result<Vec<String>, AppError> {
    let images = sqlx::query_scalar::<_, String>(
        "SELECT image_url FROM gallery_items \
         WHERE project_id = ?1 \
         ORDER BY created_at ASC, id ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}
