//! Calculation logic for the payroll engine.
//!
//! This module contains the pure net-pay computation that turns one staff
//! record into a payroll record. It performs no I/O; persistence is the
//! batch runner's job, which keeps the calculator trivially testable.

mod net_pay;

pub use net_pay::compute_payroll;
