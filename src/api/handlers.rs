//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::fmt::Display;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{EmployeeId, EmployeePatch, NewEmployee, NewTimesheet, TimesheetPatch};

use super::request::{RunPayrunRequest, TimesheetQuery};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route("/employees/:id", patch(update_employee_handler))
        .route(
            "/timesheets",
            post(create_timesheet_handler).get(fetch_timesheets_handler),
        )
        .route("/timesheets/:id", patch(update_timesheet_handler))
        .route("/payruns/run", post(run_payrun_handler))
        .route("/payruns", get(list_payruns_handler))
        .with_state(state)
}

/// Serializes a service result, mapping failures to their status code.
fn respond<T: Serialize>(correlation_id: Uuid, status: StatusCode, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = err.kind().code(),
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Turns an extractor rejection into a 400 response.
fn reject<R>(correlation_id: Uuid, rejection: R) -> Response
where
    R: Display + Into<ApiErrorResponse>,
{
    warn!(
        correlation_id = %correlation_id,
        error = %rejection,
        "Rejected request"
    );
    rejection.into().into_response()
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing onboard employee request");

    let new = match payload {
        Ok(Json(new)) => new,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    respond(correlation_id, StatusCode::CREATED, state.employees().onboard(new))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");
    respond(correlation_id, StatusCode::OK, state.employees().list())
}

/// Handler for PATCH /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeePatch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing employee update");

    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    let id = EmployeeId::from(id);
    respond(correlation_id, StatusCode::OK, state.employees().update(&id, patch))
}

/// Handler for POST /timesheets.
async fn create_timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewTimesheet>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet submission");

    let new = match payload {
        Ok(Json(new)) => new,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    respond(correlation_id, StatusCode::CREATED, state.timesheets().create(new))
}

/// Handler for GET /timesheets?employee_id=..&period_start=..&period_end=..
async fn fetch_timesheets_handler(
    State(state): State<AppState>,
    query: Result<Query<TimesheetQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %query.employee_id,
        "Fetching timesheets"
    );
    let result = state.timesheets().fetch(&query.employee_id, &query.period());
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for PATCH /timesheets/:id.
async fn update_timesheet_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TimesheetPatch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, timesheet_id = %id, "Processing timesheet update");

    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    respond(correlation_id, StatusCode::OK, state.timesheets().update(id, patch))
}

/// Handler for POST /payruns/run.
async fn run_payrun_handler(
    State(state): State<AppState>,
    payload: Result<Json<RunPayrunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payrun request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject(correlation_id, rejection),
    };
    let result = state
        .payruns()
        .run(request.period(), request.employee_ids.as_deref());
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for GET /payruns.
async fn list_payruns_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing payruns");
    respond(correlation_id, StatusCode::OK, state.payruns().list_payruns())
}
