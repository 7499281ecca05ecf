//! Cadence predicates and pay-period keys.
//!
//! The three payroll cadences are calendar predicates over a wall-clock
//! moment: monthly fires on days 28 through 31 at midnight, weekly on
//! Sunday at midnight, biweekly on days 14 and 28 at midnight. Cadences are
//! independent and may coincide; each staff member has exactly one pay
//! frequency, so coinciding batches target disjoint staff sets.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use std::collections::HashMap;

use crate::models::PayFrequency;

/// Returns the cadences due to fire at the given moment.
///
/// A cadence is due only in the minute at midnight of its matching days;
/// every other minute of the day yields nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::PayFrequency;
/// use payroll_engine::schedule::due_cadences;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// // 2026-06-28 is both day 28 and a Sunday: all three cadences fire.
/// let midnight = NaiveDate::from_ymd_opt(2026, 6, 28)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// assert_eq!(
///     due_cadences(midnight),
///     vec![
///         PayFrequency::Monthly,
///         PayFrequency::Weekly,
///         PayFrequency::Biweekly,
///     ]
/// );
///
/// let midday = NaiveDate::from_ymd_opt(2026, 6, 28)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert!(due_cadences(midday).is_empty());
/// ```
pub fn due_cadences(now: NaiveDateTime) -> Vec<PayFrequency> {
    if now.hour() != 0 || now.minute() != 0 {
        return Vec::new();
    }

    let mut due = Vec::new();
    let day = now.day();
    if (28..=31).contains(&day) {
        due.push(PayFrequency::Monthly);
    }
    if now.weekday() == Weekday::Sun {
        due.push(PayFrequency::Weekly);
    }
    if day == 14 || day == 28 {
        due.push(PayFrequency::Biweekly);
    }
    due
}

/// Derives the pay-period key a batch run settles.
///
/// The key is the first day of the period containing `run_date`:
/// - monthly: the 1st of the month. Every fire within the day 28-31
///   window maps to the same key, so the ledger's uniqueness constraint
///   collapses repeated window fires into one disbursement;
/// - weekly: the Sunday on or before the run date;
/// - biweekly: the 1st for days 1-14, the 15th for later days.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::PayFrequency;
/// use payroll_engine::schedule::period_start;
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// assert_eq!(period_start(PayFrequency::Monthly, date(2026, 3, 30)), date(2026, 3, 1));
/// assert_eq!(period_start(PayFrequency::Weekly, date(2026, 3, 29)), date(2026, 3, 29));
/// assert_eq!(period_start(PayFrequency::Biweekly, date(2026, 3, 28)), date(2026, 3, 15));
/// ```
pub fn period_start(frequency: PayFrequency, run_date: NaiveDate) -> NaiveDate {
    match frequency {
        PayFrequency::Monthly => run_date.with_day(1).unwrap_or(run_date),
        PayFrequency::Weekly => {
            let days_since_sunday = run_date.weekday().num_days_from_sunday();
            run_date - Days::new(u64::from(days_since_sunday))
        }
        PayFrequency::Biweekly => {
            let day = if run_date.day() <= 14 { 1 } else { 15 };
            run_date.with_day(day).unwrap_or(run_date)
        }
    }
}

/// Tracks which cadences have already fired, so a cadence fires at most once
/// per calendar date no matter how often the scheduler polls.
#[derive(Debug, Default)]
pub struct CadenceTracker {
    last_fired: HashMap<PayFrequency, NaiveDate>,
}

impl CadenceTracker {
    /// Creates a tracker with no fire history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cadences due at `now` that have not yet fired today,
    /// recording them as fired.
    pub fn due(&mut self, now: NaiveDateTime) -> Vec<PayFrequency> {
        let today = now.date();
        due_cadences(now)
            .into_iter()
            .filter(|frequency| {
                if self.last_fired.get(frequency) == Some(&today) {
                    return false;
                }
                self.last_fired.insert(*frequency, today);
                true
            })
            .collect()
    }
}
