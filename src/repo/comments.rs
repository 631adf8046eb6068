use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        blog::Blog,
        comment::{Comment, CommentNode, CommentStatus, CreateCommentRequest},
    },
    utils::html::clean_html,
};

const COMMENT_COLUMNS: &str = "id, blog_id, parent_id, name, email, text, status, created_at";

/// Fetches every approved comment of a blog, most recent first.
///
/// Returns a flat list; threading is applied separately by [`build_tree`].
pub async fn fetch_approved(pool: &SqlitePool, blog_id: i64) -> Result<Vec<Comment>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments \
         WHERE blog_id = ?1 AND status = ?2 \
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(blog_id)
    .bind(CommentStatus::Approved)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Threads a flat comment list into a tree of [`CommentNode`]s.
///
/// One pass groups replies by parent id into an adjacency list, then the
/// nodes are assembled recursively from the top-level comments down. Relative
/// input order is preserved among siblings at every level.
///
/// A reply whose parent is not present in `comments` (typically because the
/// parent was rejected by moderation) is unreachable from any top-level
/// comment and therefore omitted, together with its own replies.
pub fn build_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let mut replies_by_parent: HashMap<i64, Vec<&Comment>> = HashMap::new();
    let mut top_level: Vec<&Comment> = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent_id) => replies_by_parent.entry(parent_id).or_default().push(comment),
            None => top_level.push(comment),
        }
    }

    top_level
        .into_iter()
        .map(|comment| to_node(comment, &replies_by_parent))
        .collect()
}

fn to_node(comment: &Comment, replies_by_parent: &HashMap<i64, Vec<&Comment>>) -> CommentNode {
    let replies = replies_by_parent
        .get(&comment.id)
        .map(|children| {
            children
                .iter()
                .map(|child| to_node(child, replies_by_parent))
                .collect()
        })
        .unwrap_or_default();

    CommentNode {
        id: comment.id,
        name: comment.name.clone(),
        email: comment.email.clone(),
        text: comment.text.clone(),
        parent: comment.parent_id,
        replies,
    }
}

/// Creates a top-level comment on a blog.
///
/// Comments are auto-approved; moderation happens after the fact by flipping
/// the status in the store.
pub async fn create(
    pool: &SqlitePool,
    blog: &Blog,
    payload: &CreateCommentRequest,
) -> Result<Comment, AppError> {
    let comment = sqlx::query_as::<_, Comment>(&format!(
        "INSERT INTO comments (blog_id, parent_id, name, email, text, status, created_at) \
         VALUES (?1, NULL, ?2, ?3, ?4, ?5, ?6) \
         RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(blog.id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(clean_html(&payload.text))
    .bind(CommentStatus::Approved)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Creates a reply to an existing comment on a blog.
///
/// The parent lookup, the ownership check and the insert run in one
/// transaction; the comments.parent_id foreign key backstops a concurrent
/// deletion of the parent (surfaced as NotFound via `From<sqlx::Error>`).
pub async fn create_reply(
    pool: &SqlitePool,
    blog: &Blog,
    parent_id: i64,
    payload: &CreateCommentRequest,
) -> Result<Comment, AppError> {
    let mut tx = pool.begin().await?;

    let parent = sqlx::query_as::<_, Comment>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?1"
    ))
    .bind(parent_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound("Parent comment not found".to_string()))?;

    // The one real business rule in the system: a reply may only target a
    // comment on the same blog, whatever the client claims.
    if parent.blog_id != blog.id {
        return Err(AppError::BadRequest(
            "Parent comment does not belong to this blog".to_string(),
        ));
    }

    let comment = sqlx::query_as::<_, Comment>(&format!(
        "INSERT INTO comments (blog_id, parent_id, name, email, text, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
         RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(blog.id)
    .bind(parent.id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(clean_html(&payload.text))
    .bind(CommentStatus::Approved)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(comment)
}
