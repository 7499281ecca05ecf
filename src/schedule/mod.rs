//! Calendar scheduling for payroll batches.
//!
//! Cadence matching is a pure function of time ([`due_cadences`]), so the
//! trigger logic is tested without waiting on real calendar moments; the
//! [`PayrollScheduler`] is a thin shell that polls the clock and dispatches
//! batches.

mod cadence;
mod scheduler;

pub use cadence::{CadenceTracker, due_cadences, period_start};
pub use scheduler::{PayrollScheduler, SchedulerHandle};
