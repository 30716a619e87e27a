//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for generating, previewing,
//! listing, and transitioning payroll records. Authentication and tenant
//! resolution belong to the surrounding platform's middleware.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GenerateRequest, ListQuery};
pub use response::{
    ApiError, EmployeeError, GenerateResponse, ListResponse, PreviewResponse, RecordResponse,
};
pub use state::AppState;
