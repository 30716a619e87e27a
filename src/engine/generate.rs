//! Batch payroll generation.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    AdjustmentSheet, PayComputation, compute_employee_pay, summarize_attendance,
};
use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult};
use crate::ledger::PayrollLedger;
use crate::models::{
    Adjustments, Employee, GenerationFailure, GenerationOutcome, PayMonth, PayrollRecord,
    PayrollStatus,
};
use crate::stores::{AttendanceStore, EmployeeDirectory};

/// The payroll generation engine.
///
/// Wires the calculation pipeline to the collaborator stores and the ledger.
/// One instance serves all companies; every operation takes the company and
/// month explicitly.
pub struct PayrollEngine {
    directory: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceStore>,
    ledger: Arc<dyn PayrollLedger>,
    settings: Arc<EngineSettings>,
}

impl PayrollEngine {
    /// Creates an engine over the given stores and settings.
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceStore>,
        ledger: Arc<dyn PayrollLedger>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            directory,
            attendance,
            ledger,
            settings: Arc::new(settings),
        }
    }

    /// The ledger this engine writes to, for record listing and status
    /// transitions.
    pub fn ledger(&self) -> Arc<dyn PayrollLedger> {
        Arc::clone(&self.ledger)
    }

    /// Generates payroll records for every active employee of a company for
    /// one month.
    ///
    /// The run is idempotent: employees that already have a record for the
    /// month are reported in `skipped`, never regenerated or overwritten.
    /// Per-employee failures are collected in `errors` and never abort the
    /// rest of the batch; only a failure to list the active employees aborts
    /// the whole call. Partial results are final, there is no cross-employee
    /// rollback, and the engine performs no retries of its own; callers
    /// re-invoke and rely on idempotency to fill gaps.
    ///
    /// Per-employee work runs concurrently, bounded by
    /// `settings.max_concurrency`, with no ordering between employees.
    pub async fn generate(
        &self,
        company_id: &str,
        month: PayMonth,
        sheet: &AdjustmentSheet,
    ) -> EngineResult<GenerationOutcome> {
        let started = Instant::now();

        let employees = self.directory.active_employees(company_id).await?;
        info!(
            company_id,
            month = %month,
            employees = employees.len(),
            "Starting payroll generation"
        );

        let mut outcome = GenerationOutcome::default();
        if employees.is_empty() {
            return Ok(outcome);
        }

        let semaphore = Arc::new(Semaphore::new(self.settings.max_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for employee in employees {
            let semaphore = Arc::clone(&semaphore);
            let attendance = Arc::clone(&self.attendance);
            let ledger = Arc::clone(&self.ledger);
            let settings = Arc::clone(&self.settings);
            let adjustments = sheet.resolve(&employee.employee_id);

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");
                let employee_id = employee.employee_id.clone();
                let result = generate_for_employee(
                    attendance, ledger, settings, employee, month, adjustments,
                )
                .await;
                (employee_id, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(EmployeeOutcome::Created(record)))) => outcome.created.push(record),
                Ok((employee_id, Ok(EmployeeOutcome::Skipped))) => {
                    outcome.skipped.push(employee_id)
                }
                Ok((employee_id, Err(error))) => {
                    warn!(
                        employee_id = %employee_id,
                        error = %error,
                        "Payroll generation failed for employee"
                    );
                    outcome.errors.push(GenerationFailure {
                        employee_id,
                        reason: error.to_string(),
                    });
                }
                Err(join_error) => {
                    warn!(error = %join_error, "Payroll generation task aborted");
                }
            }
        }

        outcome.created.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        outcome.skipped.sort();

        info!(
            company_id,
            month = %month,
            created = outcome.created.len(),
            skipped = outcome.skipped.len(),
            errors = outcome.errors.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Payroll generation finished"
        );

        Ok(outcome)
    }

    pub(super) fn directory(&self) -> &Arc<dyn EmployeeDirectory> {
        &self.directory
    }

    pub(super) fn attendance(&self) -> &Arc<dyn AttendanceStore> {
        &self.attendance
    }

    pub(super) fn settings(&self) -> &Arc<EngineSettings> {
        &self.settings
    }
}

/// The per-employee result inside a batch.
enum EmployeeOutcome {
    Created(PayrollRecord),
    Skipped,
}

/// Fetches attendance and computes the pay figures for one employee.
///
/// This is the whole read-and-calculate path; generation persists its output
/// and preview returns it as-is, which is what keeps the two byte-identical.
pub(super) async fn compute_for_employee(
    attendance: &dyn AttendanceStore,
    employee: &Employee,
    month: PayMonth,
    adjustments: &Adjustments,
    settings: &EngineSettings,
) -> EngineResult<PayComputation> {
    let entries = attendance
        .entries_for_range(
            &employee.company_id,
            &employee.employee_id,
            month.first_day(),
            month.last_day(),
        )
        .await?;

    let summary = summarize_attendance(&entries, month);
    compute_employee_pay(employee, &summary, adjustments, settings)
}

async fn generate_for_employee(
    attendance: Arc<dyn AttendanceStore>,
    ledger: Arc<dyn PayrollLedger>,
    settings: Arc<EngineSettings>,
    employee: Employee,
    month: PayMonth,
    adjustments: Adjustments,
) -> EngineResult<EmployeeOutcome> {
    // Cheap fast path for re-runs; the insert below still guards, so a racing
    // generation that slips past this check is handled all the same.
    if ledger
        .find(&employee.company_id, &employee.employee_id, month)
        .await?
        .is_some()
    {
        return Ok(EmployeeOutcome::Skipped);
    }

    let pay = compute_for_employee(
        attendance.as_ref(),
        &employee,
        month,
        &adjustments,
        &settings,
    )
    .await?;

    let now = Utc::now();
    let record = PayrollRecord {
        id: Uuid::new_v4(),
        company_id: employee.company_id.clone(),
        employee_id: employee.employee_id.clone(),
        month,
        total_days: pay.total_days,
        days_present: pay.days_present,
        basic_salary: pay.basic_salary,
        overtime: pay.adjustments.overtime,
        bonuses: pay.adjustments.bonuses,
        deductions: pay.adjustments.deductions,
        total_salary: pay.total_salary,
        status: PayrollStatus::Pending,
        paid_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    match ledger.insert(record).await {
        Ok(stored) => Ok(EmployeeOutcome::Created(stored)),
        // Lost an insert race to a concurrent run; the other record stands.
        Err(EngineError::DuplicateRecord { .. }) => Ok(EmployeeOutcome::Skipped),
        Err(error) => Err(error),
    }
}
