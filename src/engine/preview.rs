//! Payroll preview.
//!
//! Runs the generation pipeline's read-and-calculate path for a whole
//! company without touching the ledger, so admins can inspect and adjust a
//! run before committing it.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::calculation::AdjustmentSheet;
use crate::error::EngineResult;
use crate::models::{GenerationFailure, PayMonth, PreviewOutcome, PreviewRow};

use super::generate::{PayrollEngine, compute_for_employee};

impl PayrollEngine {
    /// Computes the figures a `generate` call would persist, without writing
    /// anything.
    ///
    /// Runs the identical per-employee pipeline as generation, including the
    /// concurrency bound and the partial-failure shape; it only leaves out
    /// the ledger. Any divergence between a preview row and the record a
    /// subsequent generation stores (for unchanged inputs) is a bug.
    pub async fn preview(
        &self,
        company_id: &str,
        month: PayMonth,
        sheet: &AdjustmentSheet,
    ) -> EngineResult<PreviewOutcome> {
        let employees = self.directory().active_employees(company_id).await?;
        info!(
            company_id,
            month = %month,
            employees = employees.len(),
            "Previewing payroll"
        );

        let mut outcome = PreviewOutcome::default();
        if employees.is_empty() {
            return Ok(outcome);
        }

        let settings = Arc::clone(self.settings());
        let semaphore = Arc::new(Semaphore::new(settings.max_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for employee in employees {
            let semaphore = Arc::clone(&semaphore);
            let attendance = Arc::clone(self.attendance());
            let settings = Arc::clone(&settings);
            let adjustments = sheet.resolve(&employee.employee_id);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");
                let employee_id = employee.employee_id.clone();
                let display_name = employee.display_name.clone();
                let result = compute_for_employee(
                    attendance.as_ref(),
                    &employee,
                    month,
                    &adjustments,
                    &settings,
                )
                .await;
                (employee_id, display_name, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((employee_id, display_name, Ok(pay))) => outcome.rows.push(PreviewRow {
                    employee_id,
                    display_name,
                    month,
                    total_days: pay.total_days,
                    days_present: pay.days_present,
                    basic_salary: pay.basic_salary,
                    overtime: pay.adjustments.overtime,
                    bonuses: pay.adjustments.bonuses,
                    deductions: pay.adjustments.deductions,
                    total_salary: pay.total_salary,
                }),
                Ok((employee_id, _, Err(error))) => {
                    warn!(
                        employee_id = %employee_id,
                        error = %error,
                        "Payroll preview failed for employee"
                    );
                    outcome.errors.push(GenerationFailure {
                        employee_id,
                        reason: error.to_string(),
                    });
                }
                Err(join_error) => {
                    warn!(error = %join_error, "Payroll preview task aborted");
                }
            }
        }

        outcome.rows.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(outcome)
    }
}
