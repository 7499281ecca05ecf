//! Payroll batch execution.
//!
//! This module runs one payroll batch per pay frequency: list the matching
//! staff, then resolve, compute, and persist each staff member independently
//! so one bad record never blocks payroll for the rest of the organization.

mod runner;

pub use runner::{BatchRunner, DEFAULT_PERSIST_TIMEOUT};
