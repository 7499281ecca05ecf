//! Batch runner for per-frequency payroll runs.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{BatchOutcome, BatchResult, FailureKind, PayFrequency, Staff, StaffOutcome};
use crate::schedule::period_start;
use crate::store::{LedgerInsert, PayrollLedger, StaffDirectory};

/// Default bound on a single ledger write.
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs payroll batches against a staff directory and payroll ledger.
///
/// A batch processes every staff member with the target pay frequency.
/// Each staff member is handled sequentially (resolve, then compute, then persist);
/// any failure along that chain is recorded in the [`BatchResult`] and the
/// batch moves on to the next staff member. Only the initial directory list
/// query is batch-fatal.
///
/// # Example
///
/// ```
/// use payroll_engine::batch::BatchRunner;
/// use payroll_engine::models::PayFrequency;
/// use payroll_engine::store::{InMemoryLedger, InMemoryStaffDirectory};
/// use chrono::NaiveDate;
/// use std::sync::Arc;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let directory = Arc::new(InMemoryStaffDirectory::new());
/// let ledger = Arc::new(InMemoryLedger::new());
/// let runner = BatchRunner::new(directory, ledger);
///
/// let run_date = NaiveDate::from_ymd_opt(2026, 3, 29).unwrap();
/// let result = runner.run(PayFrequency::Monthly, run_date).await.unwrap();
/// assert!(result.outcomes.is_empty());
/// # });
/// ```
pub struct BatchRunner<D, L> {
    directory: Arc<D>,
    ledger: Arc<L>,
    persist_timeout: Duration,
}

impl<D: StaffDirectory, L: PayrollLedger> BatchRunner<D, L> {
    /// Creates a runner with the default persistence timeout.
    pub fn new(directory: Arc<D>, ledger: Arc<L>) -> Self {
        Self {
            directory,
            ledger,
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }

    /// Overrides the bound on each per-staff ledger write.
    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    /// Runs one payroll batch for the given frequency.
    ///
    /// `run_date` anchors the pay period being settled; the scheduler passes
    /// the date of the calendar trigger, and tests inject fixed dates.
    ///
    /// # Errors
    ///
    /// Returns an error only when the staff directory list query fails; every
    /// per-staff failure is contained into the returned [`BatchResult`].
    pub async fn run(
        &self,
        frequency: PayFrequency,
        run_date: NaiveDate,
    ) -> PayrollResult<BatchResult> {
        let run_id = Uuid::new_v4();
        let period = period_start(frequency, run_date);
        info!(
            run_id = %run_id,
            frequency = %frequency,
            period_start = %period,
            "Starting payroll batch"
        );

        let staff = self
            .directory
            .list_staff_by_frequency(frequency)
            .await
            .inspect_err(|err| {
                warn!(run_id = %run_id, frequency = %frequency, error = %err, "Staff list query failed");
            })?;

        let mut outcomes = Vec::with_capacity(staff.len());
        for member in &staff {
            let outcome = self.process_staff(member, period).await;
            match &outcome {
                BatchOutcome::Paid { amount, .. } => {
                    info!(
                        run_id = %run_id,
                        staff_id = %member.id,
                        amount = %amount,
                        "Payroll record persisted"
                    );
                }
                BatchOutcome::AlreadyPaid => {
                    info!(
                        run_id = %run_id,
                        staff_id = %member.id,
                        period_start = %period,
                        "Pay period already settled; skipping"
                    );
                }
                BatchOutcome::Failed { kind, message } => {
                    warn!(
                        run_id = %run_id,
                        staff_id = %member.id,
                        kind = ?kind,
                        error = %message,
                        "Payroll processing failed for staff member"
                    );
                }
            }
            outcomes.push(StaffOutcome {
                staff_id: member.id.clone(),
                outcome,
            });
        }

        let result = BatchResult {
            run_id,
            frequency,
            period_start: period,
            outcomes,
        };
        info!(
            run_id = %run_id,
            frequency = %frequency,
            paid = result.paid_count(),
            skipped = result.skipped_count(),
            failed = result.failed_count(),
            "Payroll batch completed"
        );
        Ok(result)
    }

    /// Processes one staff member: resolve, compute, persist.
    ///
    /// Never returns an error; every failure becomes a [`BatchOutcome::Failed`].
    async fn process_staff(&self, listed: &Staff, period: NaiveDate) -> BatchOutcome {
        // Re-resolve by id: the record may have been deleted between the
        // list query and processing.
        let staff = match self.directory.get_staff_by_id(&listed.id).await {
            Ok(Some(staff)) => staff,
            Ok(None) => {
                return BatchOutcome::Failed {
                    kind: FailureKind::StaffNotFound,
                    message: format!("staff '{}' no longer exists", listed.id),
                };
            }
            Err(err) => {
                return BatchOutcome::Failed {
                    kind: FailureKind::from_error(&err),
                    message: err.to_string(),
                };
            }
        };

        let record = match compute_payroll(&staff, period) {
            Ok(record) => record,
            Err(err) => {
                return BatchOutcome::Failed {
                    kind: FailureKind::from_error(&err),
                    message: err.to_string(),
                };
            }
        };

        match tokio::time::timeout(
            self.persist_timeout,
            self.ledger.insert_payroll_record(&record),
        )
        .await
        {
            Ok(Ok(LedgerInsert::Inserted(record_id))) => BatchOutcome::Paid {
                record_id,
                amount: record.amount_paid,
            },
            Ok(Ok(LedgerInsert::Duplicate)) => BatchOutcome::AlreadyPaid,
            Ok(Err(err)) => BatchOutcome::Failed {
                kind: FailureKind::PersistenceFailure,
                message: err.to_string(),
            },
            Err(_) => {
                let err = PayrollError::PersistenceFailure {
                    staff_id: staff.id.clone(),
                    message: format!(
                        "ledger write exceeded {}ms",
                        self.persist_timeout.as_millis()
                    ),
                };
                BatchOutcome::Failed {
                    kind: FailureKind::PersistenceFailure,
                    message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryLedger, InMemoryStaffDirectory};

    fn staff(id: &str, frequency: PayFrequency, salary: &str) -> Staff {
        Staff {
            id: id.to_string(),
            name: format!("Staff {}", id),
            pay_frequency: frequency,
            salary: salary.to_string(),
            allowances: None,
            deductions: None,
        }
    }

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 29).unwrap()
    }

    async fn create_runner() -> (
        Arc<InMemoryStaffDirectory>,
        Arc<InMemoryLedger>,
        BatchRunner<InMemoryStaffDirectory, InMemoryLedger>,
    ) {
        let directory = Arc::new(InMemoryStaffDirectory::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let runner = BatchRunner::new(directory.clone(), ledger.clone());
        (directory, ledger, runner)
    }

    #[tokio::test]
    async fn test_batch_pays_all_valid_staff() {
        let (directory, ledger, runner) = create_runner().await;
        directory
            .insert(staff("s1", PayFrequency::Monthly, "3000"))
            .await;
        directory
            .insert(staff("s2", PayFrequency::Monthly, "2500"))
            .await;

        let result = runner.run(PayFrequency::Monthly, run_date()).await.unwrap();

        assert_eq!(result.paid_count(), 2);
        assert_eq!(result.failed_count(), 0);
        assert_eq!(ledger.records().await.len(), 2);
        assert_eq!(result.frequency, PayFrequency::Monthly);
        assert_eq!(
            result.period_start,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_one_bad_record_does_not_abort_batch() {
        let (directory, ledger, runner) = create_runner().await;
        directory
            .insert(staff("s1", PayFrequency::Weekly, "2000"))
            .await;
        directory
            .insert(staff("s2", PayFrequency::Weekly, "garbage"))
            .await;
        directory
            .insert(staff("s3", PayFrequency::Weekly, "1800"))
            .await;

        let result = runner.run(PayFrequency::Weekly, run_date()).await.unwrap();

        assert_eq!(result.paid_count(), 2);
        assert_eq!(result.failed_count(), 1);
        assert_eq!(ledger.records().await.len(), 2);

        let failed = result
            .outcomes
            .iter()
            .find(|o| o.staff_id == "s2")
            .unwrap();
        assert!(matches!(
            failed.outcome,
            BatchOutcome::Failed {
                kind: FailureKind::InvalidCompensation,
                ..
            }
        ));
    }

    /// A directory whose listing includes one staff member that can no
    /// longer be resolved by id, mimicking a deletion between the list
    /// query and per-staff processing.
    struct PhantomDirectory {
        inner: InMemoryStaffDirectory,
        phantom: Staff,
    }

    impl StaffDirectory for PhantomDirectory {
        async fn list_staff_by_frequency(
            &self,
            frequency: PayFrequency,
        ) -> crate::error::PayrollResult<Vec<Staff>> {
            let mut listed = self.inner.list_staff_by_frequency(frequency).await?;
            if self.phantom.pay_frequency == frequency {
                listed.push(self.phantom.clone());
            }
            Ok(listed)
        }

        async fn get_staff_by_id(
            &self,
            staff_id: &str,
        ) -> crate::error::PayrollResult<Option<Staff>> {
            self.inner.get_staff_by_id(staff_id).await
        }
    }

    #[tokio::test]
    async fn test_staff_deleted_between_list_and_processing() {
        let inner = InMemoryStaffDirectory::new();
        inner.insert(staff("s1", PayFrequency::Monthly, "3000")).await;
        let directory = Arc::new(PhantomDirectory {
            inner,
            phantom: staff("ghost", PayFrequency::Monthly, "3000"),
        });
        let ledger = Arc::new(InMemoryLedger::new());
        let runner = BatchRunner::new(directory, ledger.clone());

        let result = runner.run(PayFrequency::Monthly, run_date()).await.unwrap();

        assert_eq!(result.paid_count(), 1);
        assert_eq!(result.failed_count(), 1);
        let ghost = result
            .outcomes
            .iter()
            .find(|o| o.staff_id == "ghost")
            .unwrap();
        assert!(matches!(
            ghost.outcome,
            BatchOutcome::Failed {
                kind: FailureKind::StaffNotFound,
                ..
            }
        ));
        assert_eq!(ledger.records_for("s1").await.len(), 1);
        assert!(ledger.records_for("ghost").await.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_same_period_is_noop() {
        let (directory, ledger, runner) = create_runner().await;
        directory
            .insert(staff("s1", PayFrequency::Biweekly, "1500"))
            .await;

        let first = runner
            .run(PayFrequency::Biweekly, run_date())
            .await
            .unwrap();
        let second = runner
            .run(PayFrequency::Biweekly, run_date())
            .await
            .unwrap();

        assert_eq!(first.paid_count(), 1);
        assert_eq!(second.paid_count(), 0);
        assert_eq!(second.skipped_count(), 1);
        assert_eq!(ledger.records_for("s1").await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_frequency_yields_empty_result() {
        let (_directory, ledger, runner) = create_runner().await;

        let result = runner
            .run(PayFrequency::Biweekly, run_date())
            .await
            .unwrap();

        assert!(result.outcomes.is_empty());
        assert!(ledger.records().await.is_empty());
    }
}
