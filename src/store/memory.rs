//! In-memory store implementations.
//!
//! Test doubles backing the trait seams without an external database. The
//! ledger enforces the `(staff_id, period_start)` uniqueness constraint the
//! same way a production backend would, so idempotency behavior is exercised
//! identically in tests.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{LedgerInsert, PayrollLedger, StaffDirectory};
use crate::error::PayrollResult;
use crate::models::{PayFrequency, PayrollRecord, Staff};

/// An in-memory staff directory keyed by staff id.
#[derive(Debug, Default)]
pub struct InMemoryStaffDirectory {
    staff: RwLock<HashMap<String, Staff>>,
}

impl InMemoryStaffDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a staff record.
    pub async fn insert(&self, staff: Staff) {
        self.staff.write().await.insert(staff.id.clone(), staff);
    }

    /// Removes a staff record, simulating deletion by the directory owner.
    pub async fn remove(&self, staff_id: &str) {
        self.staff.write().await.remove(staff_id);
    }
}

impl StaffDirectory for InMemoryStaffDirectory {
    async fn list_staff_by_frequency(
        &self,
        frequency: PayFrequency,
    ) -> PayrollResult<Vec<Staff>> {
        let staff = self.staff.read().await;
        let mut matching: Vec<Staff> = staff
            .values()
            .filter(|s| s.pay_frequency == frequency)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep listings stable for callers.
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matching)
    }

    async fn get_staff_by_id(&self, staff_id: &str) -> PayrollResult<Option<Staff>> {
        Ok(self.staff.read().await.get(staff_id).cloned())
    }
}

/// A stored ledger entry: the assigned id plus the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// The id assigned at insert time.
    pub id: Uuid,
    /// The persisted payroll record.
    pub record: PayrollRecord,
}

/// An in-memory append-only payroll ledger.
///
/// Enforces uniqueness on `(staff_id, period_start)`; a duplicate insert is
/// reported as [`LedgerInsert::Duplicate`] and leaves the ledger unchanged.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    records: RwLock<Vec<StoredRecord>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }

    /// Returns the stored records for one staff member.
    pub async fn records_for(&self, staff_id: &str) -> Vec<StoredRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.record.staff_id == staff_id)
            .cloned()
            .collect()
    }
}

impl PayrollLedger for InMemoryLedger {
    async fn insert_payroll_record(&self, record: &PayrollRecord) -> PayrollResult<LedgerInsert> {
        let mut records = self.records.write().await;
        let duplicate = records.iter().any(|r| {
            r.record.staff_id == record.staff_id && r.record.period_start == record.period_start
        });
        if duplicate {
            return Ok(LedgerInsert::Duplicate);
        }

        let id = Uuid::new_v4();
        records.push(StoredRecord {
            id,
            record: record.clone(),
        });
        Ok(LedgerInsert::Inserted(id))
    }
}
