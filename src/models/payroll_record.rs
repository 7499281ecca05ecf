//! Payroll record model.
//!
//! This module contains the [`PayrollRecord`] type written to the append-only
//! payroll ledger, one per successful computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// A single payroll disbursement entry.
///
/// Created exclusively by the batch runner; never mutated or deleted after
/// creation. The pair `(staff_id, period_start)` identifies the pay period
/// the record settles, and is the uniqueness key the ledger enforces so a
/// re-run of the same batch cannot disburse twice.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, PayrollRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayrollRecord {
///     staff_id: "s1".to_string(),
///     amount_paid: Decimal::from_str("3050").unwrap(),
///     pay_frequency: PayFrequency::Monthly,
///     period_start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
/// };
/// assert_eq!(record.amount_paid.to_string(), "3050");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// The staff member this disbursement is for.
    pub staff_id: String,
    /// The computed net pay, serialized as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_paid: Decimal,
    /// The staff member's pay frequency at computation time.
    pub pay_frequency: PayFrequency,
    /// The first day of the pay period this record settles.
    pub period_start: NaiveDate,
}
