//! Staff model and pay frequency types.
//!
//! This module defines the [`Staff`] record as the external staff directory
//! stores it, and the [`PayFrequency`] enum that partitions the staff
//! population for batch purposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The cadence at which a staff member is paid.
///
/// Every staff member has exactly one pay frequency, so the three batch
/// partitions never overlap even when their calendar triggers coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayFrequency {
    /// Paid once per month.
    Monthly,
    /// Paid every week.
    Weekly,
    /// Paid every two weeks.
    Biweekly,
}

impl PayFrequency {
    /// All pay frequencies, in no particular order.
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Monthly,
        PayFrequency::Weekly,
        PayFrequency::Biweekly,
    ];
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayFrequency::Monthly => write!(f, "monthly"),
            PayFrequency::Weekly => write!(f, "weekly"),
            PayFrequency::Biweekly => write!(f, "biweekly"),
        }
    }
}

/// A staff record as held by the external staff directory.
///
/// Compensation fields are kept as the raw decimal strings the directory
/// stores; they are parsed and validated by the payroll calculator, not at
/// deserialization time. The directory owns the staff lifecycle; this crate
/// only reads these records.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, Staff};
///
/// let staff = Staff {
///     id: "s1".to_string(),
///     name: "Ada Okafor".to_string(),
///     pay_frequency: PayFrequency::Monthly,
///     salary: "3000".to_string(),
///     allowances: Some("200".to_string()),
///     deductions: Some("150".to_string()),
/// };
/// assert_eq!(staff.pay_frequency, PayFrequency::Monthly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The cadence at which this staff member is paid.
    pub pay_frequency: PayFrequency,
    /// Base compensation as a decimal string.
    pub salary: String,
    /// Optional decimal-string addend; absent means zero.
    #[serde(default)]
    pub allowances: Option<String>,
    /// Optional decimal-string subtrahend; absent means zero.
    #[serde(default)]
    pub deductions: Option<String>,
}
