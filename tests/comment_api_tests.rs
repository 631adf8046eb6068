// tests/comment_api_tests.rs

use chrono::{Duration, Utc};
use portfolio_backend::{
    config::Config, error::AppError, models::comment::CreateCommentRequest, repo, routes,
    state::AppState,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

/// Spawns the app on a random port against a fresh in-memory database.
/// Returns the base URL and the pool for seeding and assertions.
async fn spawn_app() -> (String, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
    };

    let state = AppState {
        pool: pool.clone(),
        config,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, pool)
}

/// Inserts a published blog and returns (id, slug).
async fn seed_blog(pool: &SqlitePool) -> (i64, String) {
    let slug = format!("blog-{}", &Uuid::new_v4().to_string()[..8]);
    let now = Utc::now();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO blogs (title, slug, description, summary, body, cover, status, created_at, updated_at) \
         VALUES ('A title', ?1, 'A description', 'A summary', '<p>Body</p>', '/media/cover.jpg', 'published', ?2, ?2) \
         RETURNING id",
    )
    .bind(&slug)
    .bind(now)
    .fetch_one(pool)
    .await
    .expect("Failed to seed blog");

    (id, slug)
}

/// Inserts a comment directly, `minutes_ago` controlling its age.
async fn seed_comment(
    pool: &SqlitePool,
    blog_id: i64,
    parent_id: Option<i64>,
    status: &str,
    name: &str,
    minutes_ago: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO comments (blog_id, parent_id, name, email, text, status, created_at) \
         VALUES (?1, ?2, ?3, 'seed@example.com', 'seeded text', ?4, ?5) \
         RETURNING id",
    )
    .bind(blog_id)
    .bind(parent_id)
    .bind(name)
    .bind(status)
    .bind(Utc::now() - Duration::minutes(minutes_ago))
    .fetch_one(pool)
    .await
    .expect("Failed to seed comment")
}

async fn comment_count(pool: &SqlitePool, blog_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE blog_id = ?1")
        .bind(blog_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn reply_count(pool: &SqlitePool, parent_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE parent_id = ?1")
        .bind(parent_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn valid_comment_body() -> serde_json::Value {
    serde_json::json!({
        "name": "test name",
        "email": "test@email.com",
        "text": "test text",
    })
}

#[tokio::test]
async fn create_comment_returns_201() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments", address, slug))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["parent"], serde_json::Value::Null);
    assert_eq!(body["name"], "test name");
    assert_eq!(comment_count(&pool, blog_id).await, 1);
}

#[tokio::test]
async fn create_comment_with_missing_fields_returns_400() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments", address, slug))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(comment_count(&pool, blog_id).await, 0);
}

#[tokio::test]
async fn create_comment_with_malformed_email_returns_400() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments", address, slug))
        .json(&serde_json::json!({
            "name": "test name",
            "email": "not-an-email",
            "text": "test text",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(comment_count(&pool, blog_id).await, 0);
}

#[tokio::test]
async fn create_comment_on_unknown_blog_returns_404() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/blogs/no-such-blog/comments", address))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn create_reply_returns_201() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    let c1 = seed_comment(&pool, blog_id, None, "approved", "first", 10).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments/{}/reply", address, slug, c1))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["parent"], serde_json::json!(c1));
    assert_eq!(comment_count(&pool, blog_id).await, 2);
    assert_eq!(reply_count(&pool, c1).await, 1);
}

#[tokio::test]
async fn create_reply_with_missing_fields_returns_400() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    let c1 = seed_comment(&pool, blog_id, None, "approved", "first", 10).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments/{}/reply", address, slug, c1))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(comment_count(&pool, blog_id).await, 1);
    assert_eq!(reply_count(&pool, c1).await, 0);
}

#[tokio::test]
async fn create_reply_to_unknown_parent_returns_404() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments/12345/reply", address, slug))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(comment_count(&pool, blog_id).await, 0);
}

#[tokio::test]
async fn create_reply_to_parent_from_other_blog_returns_400() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (b1_id, b1_slug) = seed_blog(&pool).await;
    let (b2_id, _b2_slug) = seed_blog(&pool).await;
    let c2 = seed_comment(&pool, b2_id, None, "approved", "other blog", 10).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments/{}/reply", address, b1_slug, c2))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Parent comment does not belong to this blog")
    );
    assert_eq!(comment_count(&pool, b1_id).await, 0);
    assert_eq!(comment_count(&pool, b2_id).await, 1);
}

#[tokio::test]
async fn create_reply_under_deleted_blog_returns_404() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (b1_id, b1_slug) = seed_blog(&pool).await;
    seed_comment(&pool, b1_id, None, "approved", "doomed", 10).await;
    let (b2_id, _b2_slug) = seed_blog(&pool).await;
    let c2 = seed_comment(&pool, b2_id, None, "approved", "survivor", 10).await;

    sqlx::query("DELETE FROM blogs WHERE id = ?1")
        .bind(b1_id)
        .execute(&pool)
        .await
        .unwrap();

    // The blog's own comments cascade away with it.
    assert_eq!(comment_count(&pool, b1_id).await, 0);

    // The surviving comment from another blog cannot rescue the stale slug.
    let response = client
        .post(format!("{}/api/blogs/{}/comments/{}/reply", address, b1_slug, c2))
        .json(&valid_comment_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn blog_detail_excludes_rejected_comments() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    seed_comment(&pool, blog_id, None, "approved", "visible", 10).await;
    seed_comment(&pool, blog_id, None, "rejected", "hidden", 5).await;

    let response = client
        .get(format!("{}/api/blogs/{}", address, slug))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["name"], "visible");
}

#[tokio::test]
async fn blog_detail_hides_subtree_of_rejected_parent() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    let rejected = seed_comment(&pool, blog_id, None, "rejected", "bad parent", 30).await;
    let orphan = seed_comment(&pool, blog_id, Some(rejected), "approved", "orphan", 20).await;
    seed_comment(&pool, blog_id, Some(orphan), "approved", "orphan child", 10).await;
    seed_comment(&pool, blog_id, None, "approved", "unrelated", 5).await;

    let response = client
        .get(format!("{}/api/blogs/{}", address, slug))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.unwrap();
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["name"], "unrelated");
    assert!(comments[0]["replies"].as_array().unwrap().is_empty());
    // Neither the orphaned reply nor its child appear anywhere in the tree.
    assert!(!body.to_string().contains("orphan"));
}

#[tokio::test]
async fn blog_detail_orders_siblings_newest_first() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    let oldest = seed_comment(&pool, blog_id, None, "approved", "oldest", 30).await;
    seed_comment(&pool, blog_id, None, "approved", "newest", 5).await;
    seed_comment(&pool, blog_id, Some(oldest), "approved", "old reply", 20).await;
    seed_comment(&pool, blog_id, Some(oldest), "approved", "new reply", 10).await;

    let response = client
        .get(format!("{}/api/blogs/{}", address, slug))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.unwrap();
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments[0]["name"], "newest");
    assert_eq!(comments[1]["name"], "oldest");

    let replies = comments[1]["replies"].as_array().unwrap();
    assert_eq!(replies[0]["name"], "new reply");
    assert_eq!(replies[1]["name"], "old reply");
}

#[tokio::test]
async fn blog_detail_nests_reply_chains() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (blog_id, slug) = seed_blog(&pool).await;
    let top = seed_comment(&pool, blog_id, None, "approved", "top", 30).await;
    let reply = seed_comment(&pool, blog_id, Some(top), "approved", "reply", 20).await;
    seed_comment(&pool, blog_id, Some(reply), "approved", "reply to reply", 10).await;

    let response = client
        .get(format!("{}/api/blogs/{}", address, slug))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.unwrap();
    let top_node = &body["comments"][0];
    assert_eq!(top_node["name"], "top");
    let reply_node = &top_node["replies"][0];
    assert_eq!(reply_node["name"], "reply");
    assert_eq!(reply_node["replies"][0]["name"], "reply to reply");
}

#[tokio::test]
async fn insert_into_vanished_blog_maps_to_not_found() {
    // The blog is deleted between resolution and insert, so the existence
    // check passes and only the foreign key can catch the stale reference.
    let (_address, pool) = spawn_app().await;
    let (_blog_id, slug) = seed_blog(&pool).await;

    let blog = repo::blogs::find_by_slug(&pool, &slug)
        .await
        .unwrap()
        .expect("seeded blog should resolve");

    sqlx::query("DELETE FROM blogs WHERE id = ?1")
        .bind(blog.id)
        .execute(&pool)
        .await
        .unwrap();

    let payload = CreateCommentRequest {
        name: "test name".to_string(),
        email: "test@email.com".to_string(),
        text: "test text".to_string(),
    };

    let result = repo::comments::create(&pool, &blog, &payload).await;

    match result {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn comment_text_is_sanitized_before_storage() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let (_blog_id, slug) = seed_blog(&pool).await;

    let response = client
        .post(format!("{}/api/blogs/{}/comments", address, slug))
        .json(&serde_json::json!({
            "name": "test name",
            "email": "test@email.com",
            "text": "hello <script>alert(1)</script>world",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let text = body["text"].as_str().unwrap();
    assert!(!text.contains("<script>"));
    assert!(text.contains("hello"));
    assert!(text.contains("world"));
}
