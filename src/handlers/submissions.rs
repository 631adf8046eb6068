use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::submission::{CreateApplicationRequest, CreateContactRequest, CreateOrderRequest},
    repo,
};

/// Accepts a contact form submission.
pub async fn create_contact(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = repo::submissions::insert_contact(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Accepts an order form submission.
pub async fn create_order(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = repo::submissions::insert_order(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// Accepts a job application.
pub async fn create_application(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = repo::submissions::insert_application(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}
