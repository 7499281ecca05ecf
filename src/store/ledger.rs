//! Payroll ledger write interface.

use std::future::Future;
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::PayrollRecord;

/// The result of a ledger insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerInsert {
    /// A new record was appended; carries the assigned record id.
    Inserted(Uuid),
    /// A record for the same `(staff_id, period_start)` already exists;
    /// nothing was written.
    Duplicate,
}

/// Append-only access to the payroll ledger.
///
/// Records are independent per-staff inserts with no update-in-place, so
/// concurrent batches never conflict on writes. Implementations must enforce
/// uniqueness on `(staff_id, period_start)` and report a second insert for
/// the same period as [`LedgerInsert::Duplicate`] rather than an error, so a
/// re-run of a batch is a no-op, never a double disbursement.
pub trait PayrollLedger: Send + Sync {
    /// Appends one payroll record, or reports it as a duplicate.
    fn insert_payroll_record(
        &self,
        record: &PayrollRecord,
    ) -> impl Future<Output = PayrollResult<LedgerInsert>> + Send;
}
