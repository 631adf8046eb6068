use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::blog::{Blog, BlogStatus, BlogSummary},
};

/// Lists published blogs, most recently updated first.
/// Archived blogs never appear in the listing.
pub async fn list_published(pool: &SqlitePool) -> Result<Vec<BlogSummary>, AppError> {
    let blogs = sqlx::query_as::<_, BlogSummary>(
        "SELECT title, slug, description, summary, cover \
         FROM blogs \
         WHERE status = ?1 \
         ORDER BY updated_at DESC, created_at DESC, title ASC",
    )
    .bind(BlogStatus::Published)
    .fetch_all(pool)
    .await?;

    Ok(blogs)
}

/// Resolves a blog by its unique slug, regardless of status.
pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Blog>, AppError> {
    let blog = sqlx::query_as::<_, Blog>(
        "SELECT id, title, slug, description, summary, body, cover, status, \
                created_at, updated_at \
         FROM blogs \
         WHERE slug = ?1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(blog)
}
