use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'projects' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub size: String,
    pub dimensions: String,
    pub creation_year: String,
    pub scale: String,
    pub status: ProjectStatus,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProjectStatus {
    Finished,
    Ongoing,
}

/// List-endpoint shape: one card per project.
/// `banner_image` is the oldest gallery image, or null when the project has
/// no gallery yet.
#[derive(Debug, Serialize, FromRow)]
pub struct ProjectSummary {
    pub title: String,
    pub slug: String,
    pub category: Option<String>,
    pub creation_year: String,
    pub banner_image: Option<String>,
}

/// Detail-endpoint shape, with the full gallery.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub title: String,
    pub description: String,
    pub size: String,
    pub dimensions: String,
    pub creation_year: String,
    pub scale: String,
    pub gallery_items: Vec<String>,
}

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    /// Case-insensitive exact match on the category title.
    pub category: Option<String>,

    /// 'finished' or 'ongoing'.
    pub status: Option<String>,

    /// Search keyword matched against project and category titles.
    pub q: Option<String>,
}
