use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::submission::{CreateApplicationRequest, CreateContactRequest, CreateOrderRequest},
};

/// Stores a contact form submission and returns its id.
pub async fn insert_contact(
    pool: &SqlitePool,
    payload: &CreateContactRequest,
) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO contacts (first_name, last_name, email, phone_number, message, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
         RETURNING id",
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone_number)
    .bind(&payload.message)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Stores an order form submission and returns its id.
pub async fn insert_order(
    pool: &SqlitePool,
    payload: &CreateOrderRequest,
) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (company_name, activity_area, email, contact_number, explanation, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
         RETURNING id",
    )
    .bind(&payload.company_name)
    .bind(&payload.activity_area)
    .bind(&payload.email)
    .bind(&payload.contact_number)
    .bind(&payload.explanation)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Stores a job application and returns its id.
/// New applications always start in the 'pending' review state.
pub async fn insert_application(
    pool: &SqlitePool,
    payload: &CreateApplicationRequest,
) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO job_applications \
             (first_name, last_name, email, phone_number, education_degree, \
              study_field, resume_url, cover_letter, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'pending', ?9) \
         RETURNING id",
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone_number)
    .bind(&payload.education_degree)
    .bind(&payload.study_field)
    .bind(&payload.resume_url)
    .bind(&payload.cover_letter)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}
