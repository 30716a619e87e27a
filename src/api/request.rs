//! Request types for the payroll API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Adjustments;

/// Request body for the `/payroll/generate` and `/payroll/preview`
/// endpoints.
///
/// The month token is carried as a string and validated before any work
/// starts. In the full platform the company id comes from the session
/// middleware; here it is explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The company (tenant) to run payroll for.
    pub company_id: String,
    /// The `YYYY-MM` payroll month.
    pub month: String,
    /// Manual per-employee adjustment overrides; employees not listed get
    /// zero adjustments.
    #[serde(default)]
    pub adjustments: HashMap<String, Adjustments>,
}

/// Query parameters for the `GET /payroll` listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// The company (tenant) whose records to list.
    pub company_id: String,
    /// Optional `YYYY-MM` month filter.
    #[serde(default)]
    pub month: Option<String>,
    /// Optional employee filter.
    #[serde(default)]
    pub employee_id: Option<String>,
}
