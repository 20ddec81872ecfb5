//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler tags its log lines with a fresh correlation id.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{WorkTypeId, WorkerId};

use super::request::{NewWorkRecordRequest, NewWorkTypeRequest, NewWorkerRequest, SurnameQuery};
use super::response::{ApiError, ApiErrorResponse, CreatedResponse, WorkerSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/work-types", post(create_work_type).get(list_work_types))
        .route("/work-types/:id", get(get_work_type))
        .route("/workers", post(create_worker).get(list_workers))
        .route("/workers/search", get(find_worker_by_surname))
        .route("/workers/:id", get(get_worker))
        .route("/workers/:id/records", post(add_work_record))
        .route("/workers/:id/salary", get(get_salary))
        .route("/payout", get(get_payout))
        .with_state(state)
}

fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn created(id: u32) -> Response {
    (StatusCode::CREATED, Json(CreatedResponse { id })).into_response()
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path parameter");
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text())).into_response()
}

/// Handler for `POST /work-types`.
async fn create_work_type(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkTypeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating work type");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state
        .registry()
        .add_work_type(request.name.trim(), request.rate);
    match result {
        Ok(id) => created(id),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /work-types`.
async fn list_work_types(State(state): State<AppState>) -> Response {
    let work_types = state.registry().work_types().to_vec();
    ok(work_types)
}

/// Handler for `GET /work-types/:id`.
async fn get_work_type(
    State(state): State<AppState>,
    path: Result<Path<WorkTypeId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let result = state.registry().find_work_type(id).cloned();
    match result {
        Ok(work_type) => ok(work_type),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /workers`.
async fn create_worker(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating worker");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state
        .registry()
        .add_worker(request.surname.trim(), request.position);
    match result {
        Ok(id) => created(id),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /workers`.
async fn list_workers(State(state): State<AppState>) -> Response {
    let workers: Vec<WorkerSummary> = state
        .registry()
        .workers()
        .iter()
        .map(WorkerSummary::from)
        .collect();
    ok(workers)
}

/// Handler for `GET /workers/search?surname=`.
async fn find_worker_by_surname(
    State(state): State<AppState>,
    query: Result<Query<SurnameQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let result = state
        .registry()
        .find_worker_by_surname(query.surname.trim())
        .cloned();
    match result {
        Ok(worker) => ok(worker),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /workers/:id`.
async fn get_worker(
    State(state): State<AppState>,
    path: Result<Path<WorkerId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let result = state.registry().find_worker(id).cloned();
    match result {
        Ok(worker) => ok(worker),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /workers/:id/records`.
async fn add_work_record(
    State(state): State<AppState>,
    path: Result<Path<WorkerId>, PathRejection>,
    payload: Result<Json<NewWorkRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let worker_id = match path {
        Ok(Path(worker_id)) => worker_id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, worker_id, "Adding work record");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result =
        state
            .registry()
            .add_work_record(worker_id, request.work_type_id, request.quantity);
    match result {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /workers/:id/salary`.
async fn get_salary(
    State(state): State<AppState>,
    path: Result<Path<WorkerId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let result = {
        let registry = state.registry();
        registry
            .find_worker(id)
            .map(|worker| registry.salary_breakdown(worker))
    };
    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = id,
                salary = %breakdown.total,
                "Calculated salary"
            );
            ok(breakdown)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /payout`.
async fn get_payout(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let report = state.registry().payout_report();
    info!(
        correlation_id = %correlation_id,
        workers = report.workers.len(),
        total = %report.total,
        "Calculated payout"
    );
    ok(report)
}
