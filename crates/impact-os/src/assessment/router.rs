use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{ApplicantId, IntakeSubmission};
use super::repository::{ApplicantRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router exposing intake, assessment and summary endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route("/api/v1/applicants", post(intake_handler::<R>))
        .route("/api/v1/applicants/:applicant_id", get(applicant_handler::<R>))
        .route(
            "/api/v1/assessment/:applicant_id/assess",
            post(assess_handler::<R>),
        )
        .route(
            "/api/v1/assessment/:applicant_id/summary",
            get(summary_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn intake_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(submission): Json<IntakeSubmission>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.intake(submission) {
        Ok(record) => {
            let payload = json!({
                "applicant_id": record.applicant_id(),
                "status": record.status_label(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn applicant_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.get(&ApplicantId(applicant_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.assess(&ApplicantId(applicant_id)) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match service.summary(&ApplicantId(applicant_id)) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        AssessmentServiceError::NotAssessed(_)
        | AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
