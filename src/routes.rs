// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{blogs, comments, projects, submissions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (projects, blogs, submissions).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let project_routes = Router::new()
        .route("/", get(projects::list_projects))
        .route("/{slug}", get(projects::get_project));

    let blog_routes = Router::new()
        .route("/", get(blogs::list_blogs))
        .route("/{slug}", get(blogs::get_blog))
        .route("/{slug}/comments", post(comments::create_comment))
        .route("/{slug}/comments/{id}/reply", post(comments::create_reply));

    let submission_routes = Router::new()
        .route("/contact", post(submissions::create_contact))
        .route("/order", post(submissions::create_order))
        .route("/apply", post(submissions::create_application));

    Router::new()
        .nest("/api/projects", project_routes)
        .nest("/api/blogs", blog_routes)
        .nest("/api/submissions", submission_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
