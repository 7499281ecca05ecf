//! Staff directory query interface.

use std::future::Future;

use crate::error::PayrollResult;
use crate::models::{PayFrequency, Staff};

/// Read-only access to the externally-owned staff directory.
///
/// Implementations are expected to report a failed list query as
/// [`PayrollError::DirectoryQueryFailure`](crate::error::PayrollError::DirectoryQueryFailure);
/// the batch runner treats that as batch-fatal, while everything after the
/// list is contained per staff member.
pub trait StaffDirectory: Send + Sync {
    /// Returns every staff member paid at the given frequency.
    fn list_staff_by_frequency(
        &self,
        frequency: PayFrequency,
    ) -> impl Future<Output = PayrollResult<Vec<Staff>>> + Send;

    /// Resolves one staff member by id; `None` when the id is absent.
    fn get_staff_by_id(
        &self,
        staff_id: &str,
    ) -> impl Future<Output = PayrollResult<Option<Staff>>> + Send;
}
