//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod batch_result;
mod payroll_record;
mod staff;

pub use batch_result::{BatchOutcome, BatchResult, FailureKind, StaffOutcome};
pub use payroll_record::PayrollRecord;
pub use staff::{PayFrequency, Staff};
