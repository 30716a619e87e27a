//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::AdjustmentSheet;
use crate::models::PayMonth;

use super::request::{GenerateRequest, ListQuery};
use super::response::{
    ApiError, ApiErrorResponse, GenerateResponse, ListResponse, PreviewResponse, RecordResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/generate", post(generate_handler))
        .route("/payroll/preview", post(preview_handler))
        .route("/payroll", get(list_handler))
        .route("/payroll/:record_id/pay", post(mark_paid_handler))
        .route("/payroll/:record_id/cancel", post(cancel_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /payroll/generate.
///
/// Validates the month token, then runs the batch and returns the
/// partial-success summary.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let month: PayMonth = match request.month.parse() {
        Ok(month) => month,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                month = %request.month,
                "Rejected payroll month token"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let sheet = AdjustmentSheet::from(request.adjustments);
    match state.engine().generate(&request.company_id, month, &sheet).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                company_id = %request.company_id,
                created = outcome.created.len(),
                skipped = outcome.skipped.len(),
                errors = outcome.errors.len(),
                "Payroll generation request completed"
            );
            let response = GenerateResponse {
                success: true,
                data: outcome.created,
                skipped: outcome.skipped,
                errors: outcome.errors.into_iter().map(Into::into).collect(),
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll generation request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /payroll/preview.
///
/// Identical input shape to generation; nothing is persisted.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let month: PayMonth = match request.month.parse() {
        Ok(month) => month,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let sheet = AdjustmentSheet::from(request.adjustments);
    match state.engine().preview(&request.company_id, month, &sheet).await {
        Ok(outcome) => {
            let response = PreviewResponse {
                success: true,
                data: outcome.rows,
                errors: outcome.errors.into_iter().map(Into::into).collect(),
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll preview request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /payroll.
async fn list_handler(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let month = match query.month.as_deref().map(str::parse::<PayMonth>) {
        None => None,
        Some(Ok(month)) => Some(month),
        Some(Err(err)) => return ApiErrorResponse::from(err).into_response(),
    };

    match state
        .engine()
        .ledger()
        .list(&query.company_id, month, query.employee_id.as_deref())
        .await
    {
        Ok(records) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ListResponse {
                success: true,
                data: records,
            }),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /payroll/{record_id}/pay.
async fn mark_paid_handler(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> Response {
    match state.engine().ledger().mark_paid(record_id).await {
        Ok(record) => {
            info!(record_id = %record_id, "Payroll record marked paid");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(RecordResponse {
                    success: true,
                    data: record,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(record_id = %record_id, error = %err, "Mark-paid rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /payroll/{record_id}/cancel.
async fn cancel_handler(State(state): State<AppState>, Path(record_id): Path<Uuid>) -> Response {
    match state.engine().ledger().cancel(record_id).await {
        Ok(record) => {
            info!(record_id = %record_id, "Payroll record cancelled");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(RecordResponse {
                    success: true,
                    data: record,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(record_id = %record_id, error = %err, "Cancel rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
