//! Batch result models.
//!
//! This module contains the [`BatchResult`] type and its associated
//! structures that summarize one payroll batch run per staff member, so the
//! outcome of every batch is observable and independently testable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayFrequency;
use crate::error::PayrollError;

/// Classifies a contained per-staff failure.
///
/// Only failures handled within the scope of one staff member appear here;
/// a directory list failure aborts the whole batch and is reported through
/// [`PayrollError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The staff id could not be resolved at processing time.
    StaffNotFound,
    /// A compensation field was malformed or produced an unpayable amount.
    InvalidCompensation,
    /// The ledger write failed or timed out.
    PersistenceFailure,
}

impl FailureKind {
    /// Classifies a [`PayrollError`] into the contained-failure taxonomy.
    ///
    /// Errors that are not per-staff by nature (directory or config errors
    /// surfacing during re-resolution) classify as [`FailureKind::StaffNotFound`],
    /// since resolution did not produce a staff record.
    pub fn from_error(error: &PayrollError) -> Self {
        match error {
            PayrollError::InvalidCompensation { .. } => FailureKind::InvalidCompensation,
            PayrollError::PersistenceFailure { .. } => FailureKind::PersistenceFailure,
            _ => FailureKind::StaffNotFound,
        }
    }
}

/// The outcome of processing one staff member within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// A payroll record was computed and persisted.
    Paid {
        /// The ledger id of the persisted record.
        record_id: Uuid,
        /// The net amount disbursed.
        #[serde(with = "rust_decimal::serde::str")]
        amount: Decimal,
    },
    /// A record for this staff member and pay period already exists; the
    /// write was a no-op.
    AlreadyPaid,
    /// Processing failed; the failure was contained to this staff member.
    Failed {
        /// The failure classification.
        kind: FailureKind,
        /// Human-readable failure detail.
        message: String,
    },
}

/// One staff member's entry in a batch summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffOutcome {
    /// The staff member processed.
    pub staff_id: String,
    /// What happened for this staff member.
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

/// The summary of one payroll batch run.
///
/// Produced by the batch runner for every run, successful staff and contained
/// failures alike; consumable by logging today and an alerting path later.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BatchOutcome, BatchResult, PayFrequency, StaffOutcome};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = BatchResult {
///     run_id: Uuid::new_v4(),
///     frequency: PayFrequency::Weekly,
///     period_start: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     outcomes: vec![StaffOutcome {
///         staff_id: "s2".to_string(),
///         outcome: BatchOutcome::Paid {
///             record_id: Uuid::new_v4(),
///             amount: Decimal::from(2000),
///         },
///     }],
/// };
/// assert_eq!(result.paid_count(), 1);
/// assert_eq!(result.failed_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Unique identifier for this batch run.
    pub run_id: Uuid,
    /// The pay frequency this batch targeted.
    pub frequency: PayFrequency,
    /// The pay period the batch settled.
    pub period_start: NaiveDate,
    /// Per-staff outcomes, one entry per staff member listed for the batch.
    pub outcomes: Vec<StaffOutcome>,
}

impl BatchResult {
    /// Number of staff members paid in this run.
    pub fn paid_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, BatchOutcome::Paid { .. }))
            .count()
    }

    /// Number of staff members skipped because their period was already paid.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, BatchOutcome::AlreadyPaid))
            .count()
    }

    /// Number of contained per-staff failures in this run.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, BatchOutcome::Failed { .. }))
            .count()
    }
}
