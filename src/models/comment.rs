use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'comments' table in the database.
///
/// A comment with a null `parent_id` is top-level; otherwise it is a reply to
/// another comment on the same blog. Both statuses are fixed at creation time
/// except `status`, which an administrator may flip to `Rejected` directly in
/// the store.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub blog_id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub text: String,
    pub status: CommentStatus,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CommentStatus {
    Approved,
    Rejected,
}

/// DTO for creating a comment or a reply.
///
/// Fields default to empty strings when absent from the request body, so
/// missing and blank input are rejected identically by the validators.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 2000, message = "Text must not be empty"))]
    pub text: String,
}

/// Public shape of a comment in the blog detail tree.
#[derive(Debug, Serialize)]
pub struct CommentNode {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub text: String,
    pub parent: Option<i64>,
    pub replies: Vec<CommentNode>,
}
