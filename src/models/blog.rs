use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::comment::CommentNode;

/// Represents the 'blogs' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub summary: String,
    pub body: String,
    pub cover: String,
    pub status: BlogStatus,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BlogStatus {
    Published,
    Archived,
}

/// List-endpoint shape. Only published blogs are listed.
#[derive(Debug, Serialize, FromRow)]
pub struct BlogSummary {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub summary: String,
    pub cover: String,
}

/// Detail-endpoint shape, carrying the threaded comment tree.
#[derive(Debug, Serialize)]
pub struct BlogDetail {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub cover: String,
    pub comments: Vec<CommentNode>,
}

impl BlogDetail {
    pub fn new(blog: Blog, comments: Vec<CommentNode>) -> Self {
        Self {
            title: blog.title,
            summary: blog.summary,
            body: blog.body,
            cover: blog.cover,
            comments,
        }
    }
}
