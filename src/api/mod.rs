//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the employee registry, the timesheet period store
//! and the payrun orchestrator as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RunPayrunRequest, TimesheetQuery};
pub use response::{ApiError, ApiErrorResponse, status_for};
pub use state::AppState;
