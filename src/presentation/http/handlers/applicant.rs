//! Applicant Handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dto::{CreateApplicantRequest, EmailQuery};
use crate::domain::Applicant;
use crate::presentation::http::extractors::{parse_applicant_id, JsonBody};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new applicant
///
/// Responds `201 Created` with `Location: applicants/{id}` and the stored applicant.
pub async fn create_applicant(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateApplicantRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Validation failures never reach the service
    let applicant = body.into_applicant()?;

    let saved = state.applicants.save(applicant).await?;
    let applicant_id = saved
        .applicant_id
        .ok_or_else(|| AppError::Internal("Stored applicant has no id".into()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("applicants/{}", applicant_id))],
        Json(saved),
    ))
}

/// Get applicant by email (`GET /applicants?email=...`)
pub async fn get_applicant_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Applicant>, AppError> {
    let email = query
        .email
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter: email".into()))?;

    let applicant = state.applicants.get_by_email(&email).await?;

    Ok(Json(applicant))
}

/// Get applicant by ID
pub async fn get_applicant(
    State(state): State<AppState>,
    Path(applicant_id): Path<String>,
) -> Result<Json<Applicant>, AppError> {
    let applicant_id = parse_applicant_id(&applicant_id)?;

    let applicant = state.applicants.get_by_id(applicant_id).await?;

    Ok(Json(applicant))
}

/// Delete applicant by ID
pub async fn delete_applicant(
    State(state): State<AppState>,
    Path(applicant_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let applicant_id = parse_applicant_id(&applicant_id)?;

    state.applicants.delete_by_id(applicant_id).await?;

    Ok(StatusCode::OK)
}
