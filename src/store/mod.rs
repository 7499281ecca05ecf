//! Storage seams for the payroll engine.
//!
//! The staff directory and payroll ledger are externally-owned stores; this
//! module defines the trait boundaries the batch runner depends on, plus
//! in-memory implementations used in tests and embedding applications that
//! have not wired a real backend yet.

mod directory;
mod ledger;
mod memory;

pub use directory::StaffDirectory;
pub use ledger::{LedgerInsert, PayrollLedger};
pub use memory::{InMemoryLedger, InMemoryStaffDirectory, StoredRecord};
