//! Payroll computation and scheduling engine.
//!
//! This crate computes net pay for staff records, runs per-frequency payroll
//! batches with per-staff failure containment, and fires those batches on
//! three calendar cadences (monthly, weekly, biweekly) from a process-scoped
//! scheduler with an explicit start/stop lifecycle.

#![warn(missing_docs)]

pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod store;
