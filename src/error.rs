//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use thiserror::Error;

use crate::models::PayFrequency;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::StaffNotFound {
///     staff_id: "s1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Staff not found: s1");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No staff record exists for the given identifier at resolution time.
    #[error("Staff not found: {staff_id}")]
    StaffNotFound {
        /// The staff identifier that could not be resolved.
        staff_id: String,
    },

    /// A compensation field on a staff record could not be used for payment.
    #[error("Invalid compensation data for staff '{staff_id}', field '{field}': {message}")]
    InvalidCompensation {
        /// The staff member the bad data belongs to.
        staff_id: String,
        /// The compensation field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll record could not be written to the ledger.
    #[error("Failed to persist payroll record for staff '{staff_id}': {message}")]
    PersistenceFailure {
        /// The staff member whose record could not be written.
        staff_id: String,
        /// A description of the persistence failure.
        message: String,
    },

    /// The staff directory list query itself failed; the batch cannot run.
    #[error("Staff directory query failed for {frequency} batch: {message}")]
    DirectoryQueryFailure {
        /// The pay frequency whose batch was being listed.
        frequency: PayFrequency,
        /// A description of the query failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
