//! Net pay computation.
//!
//! This module derives the net amount to disburse for a single staff member
//! from the decimal-string compensation fields the staff directory stores.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayrollRecord, Staff};

/// Computes the payroll record for one staff member.
///
/// Net pay is `salary + allowances - deductions`, where absent `allowances`
/// and `deductions` count as zero. All three fields must parse as
/// non-negative decimals; anything else is rejected before a record is built,
/// so a malformed amount can never reach the ledger. A net pay below zero
/// (deductions exceeding salary plus allowances) is likewise rejected.
///
/// The caller is responsible for having resolved the staff member's existence
/// first; an empty id signals an unresolved identifier and is refused.
///
/// # Arguments
///
/// * `staff` - The staff member to compute pay for
/// * `period_start` - The first day of the pay period being settled
///
/// # Returns
///
/// Returns the [`PayrollRecord`] to persist, or an error if:
/// - `staff.id` is empty (`StaffNotFound`)
/// - any compensation field fails to parse, is negative, or the net pay is
///   negative (`InvalidCompensation`)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{PayFrequency, Staff};
/// use chrono::NaiveDate;
///
/// let staff = Staff {
///     id: "s1".to_string(),
///     name: "Ada Okafor".to_string(),
///     pay_frequency: PayFrequency::Monthly,
///     salary: "3000".to_string(),
///     allowances: Some("200".to_string()),
///     deductions: Some("150".to_string()),
/// };
///
/// let period = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let record = compute_payroll(&staff, period).unwrap();
/// assert_eq!(record.amount_paid.to_string(), "3050");
/// ```
pub fn compute_payroll(staff: &Staff, period_start: NaiveDate) -> PayrollResult<PayrollRecord> {
    if staff.id.is_empty() {
        return Err(PayrollError::StaffNotFound {
            staff_id: String::new(),
        });
    }

    let salary = parse_field(&staff.id, "salary", &staff.salary)?;
    let allowances = parse_optional_field(&staff.id, "allowances", staff.allowances.as_deref())?;
    let deductions = parse_optional_field(&staff.id, "deductions", staff.deductions.as_deref())?;

    let net_pay = salary + allowances - deductions;
    if net_pay < Decimal::ZERO {
        return Err(PayrollError::InvalidCompensation {
            staff_id: staff.id.clone(),
            field: "deductions".to_string(),
            message: "deductions exceed salary plus allowances".to_string(),
        });
    }

    Ok(PayrollRecord {
        staff_id: staff.id.clone(),
        amount_paid: net_pay,
        pay_frequency: staff.pay_frequency,
        period_start,
    })
}

/// Parses a required compensation field as a non-negative decimal.
fn parse_field(staff_id: &str, field: &str, raw: &str) -> PayrollResult<Decimal> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| PayrollError::InvalidCompensation {
        staff_id: staff_id.to_string(),
        field: field.to_string(),
        message: format!("'{}' is not a decimal number: {}", raw, e),
    })?;

    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidCompensation {
            staff_id: staff_id.to_string(),
            field: field.to_string(),
            message: format!("'{}' is negative", raw),
        });
    }

    Ok(value)
}

/// Parses an optional compensation field; absent means zero.
fn parse_optional_field(
    staff_id: &str,
    field: &str,
    raw: Option<&str>,
) -> PayrollResult<Decimal> {
    match raw {
        Some(raw) => parse_field(staff_id, field, raw),
        None => Ok(Decimal::ZERO),
    }
}
