//! Accrual period resolution.
//!
//! This module determines the active accrual period for each employment
//! model:
//!
//! - Contractors accrue over rolling 11-month terms anchored on their start
//!   date. Term `k` starts `11 * k` months after the start date and ends the
//!   day before term `k + 1` starts. Unused days do not survive a renewal.
//! - Permanent employees accrue over calendar years. The previous calendar
//!   year is resolved as well so its remainder can be carried over, one year
//!   back only.
//!
//! Periods are recomputed on every call; nothing is stored.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::AccrualPeriod;

/// Length of a contractor term in calendar months.
pub const CONTRACT_TERM_MONTHS: u32 = 11;

/// The active and previous calendar-year periods of a permanent employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermanentPeriods {
    /// The calendar year containing the evaluation date.
    pub current: AccrualPeriod,
    /// The calendar year before it.
    pub previous: AccrualPeriod,
}

/// Returns the start date of contract term `index`.
///
/// Every term is measured from the original anchor, so end-of-month
/// clamping in one term never shifts the terms after it.
fn term_anchor(start_date: NaiveDate, index: u32) -> NaiveDate {
    index
        .checked_mul(CONTRACT_TERM_MONTHS)
        .and_then(|months| start_date.checked_add_months(Months::new(months)))
        .unwrap_or(NaiveDate::MAX)
}

/// Builds the closed period for contract term `index`.
fn contract_term(start_date: NaiveDate, index: u32) -> AccrualPeriod {
    let start = term_anchor(start_date, index);
    let next = term_anchor(start_date, index.saturating_add(1));
    let end = next
        .checked_sub_days(Days::new(1))
        .filter(|end| *end >= start)
        .unwrap_or(start);
    AccrualPeriod { start, end }
}

/// Resolves the contract term containing `today`.
///
/// When `today` is before the start date the first term is returned; the
/// caller decides that such an employee has no balance yet.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::resolve_contractor_period;
/// use chrono::NaiveDate;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let period = resolve_contractor_period(d(2025, 1, 1), d(2026, 1, 1));
/// assert_eq!(period.start, d(2025, 12, 1));
/// assert_eq!(period.end, d(2026, 10, 31));
/// ```
pub fn resolve_contractor_period(start_date: NaiveDate, today: NaiveDate) -> AccrualPeriod {
    if today < start_date {
        return contract_term(start_date, 0);
    }

    let months_elapsed = (today.year() - start_date.year()) * 12 + today.month() as i32
        - start_date.month() as i32;
    let mut index = u32::try_from(months_elapsed).unwrap_or(0) / CONTRACT_TERM_MONTHS;

    // Variable month lengths can put the estimate one term either side.
    loop {
        let term = contract_term(start_date, index);
        if today < term.start && index > 0 {
            index -= 1;
        } else if today > term.end && term.end < NaiveDate::MAX {
            index += 1;
        } else {
            return term;
        }
    }
}

/// Returns the calendar year containing `today`.
pub fn resolve_permanent_period(today: NaiveDate) -> AccrualPeriod {
    AccrualPeriod::calendar_year(today.year())
}

/// Returns the calendar year before the one containing `today`.
pub fn previous_permanent_period(today: NaiveDate) -> AccrualPeriod {
    AccrualPeriod::calendar_year(today.year() - 1)
}

/// Resolves both calendar-year periods of a permanent employee.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::resolve_permanent_periods;
/// use chrono::NaiveDate;
///
/// let periods = resolve_permanent_periods(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
/// assert_eq!(periods.current.start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(periods.previous.end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
/// ```
pub fn resolve_permanent_periods(today: NaiveDate) -> PermanentPeriods {
    PermanentPeriods {
        current: resolve_permanent_period(today),
        previous: previous_permanent_period(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// PR-001: first term while still inside it
    #[test]
    fn test_first_term_contains_today() {
        let period = resolve_contractor_period(date(2026, 1, 15), date(2026, 1, 16));
        assert_eq!(period.start, date(2026, 1, 15));
        assert_eq!(period.end, date(2026, 12, 14));
    }

    /// PR-002: future start returns the first term
    #[test]
    fn test_future_start_returns_first_term() {
        let period = resolve_contractor_period(date(2027, 3, 1), date(2026, 6, 1));
        assert_eq!(period.start, date(2027, 3, 1));
        assert_eq!(period.end, date(2028, 1, 31));
    }

    /// PR-003: renewal day starts the next term
    #[test]
    fn test_renewal_day_starts_second_term() {
        let start = date(2025, 1, 1);

        let last_day = resolve_contractor_period(start, date(2025, 11, 30));
        assert_eq!(last_day.start, start);

        let renewal = resolve_contractor_period(start, date(2025, 12, 1));
        assert_eq!(renewal.start, date(2025, 12, 1));
        assert_eq!(renewal.end, date(2026, 10, 31));
    }

    /// PR-004: estimate overshoots when the anchor day is late in the month
    #[test]
    fn test_estimate_steps_back_for_late_anchor_day() {
        // 11 calendar months have elapsed by month number, but the second
        // term only starts on 2025-12-31.
        let period = resolve_contractor_period(date(2025, 1, 31), date(2025, 12, 30));
        assert_eq!(period.start, date(2025, 1, 31));
        assert_eq!(period.end, date(2025, 12, 30));
    }

    #[test]
    fn test_terms_measured_from_original_anchor() {
        // Anchor on the 31st: the second term is clamped to February 28th,
        // the third returns to January 31st instead of drifting to the 28th.
        let start = date(2024, 3, 31);
        let second = resolve_contractor_period(start, date(2026, 1, 10));
        assert_eq!(second.start, date(2025, 2, 28));
        assert_eq!(second.end, date(2026, 1, 30));

        let third = resolve_contractor_period(start, date(2026, 2, 5));
        assert_eq!(third.start, date(2026, 1, 31));
        assert_eq!(third.end, date(2026, 12, 30));
    }

    #[test]
    fn test_terms_are_contiguous() {
        let start = date(2020, 5, 20);
        let mut today = start;
        let mut previous: Option<AccrualPeriod> = None;
        while today < date(2026, 5, 20) {
            let period = resolve_contractor_period(start, today);
            assert!(period.start <= period.end);
            assert!(period.contains_date(today));
            if let Some(prev) = previous {
                if prev != period {
                    assert_eq!(prev.renewal_date(), period.start);
                }
            }
            previous = Some(period);
            today = today.checked_add_days(Days::new(7)).unwrap();
        }
    }

    #[test]
    fn test_leap_day_anchor() {
        let period = resolve_contractor_period(date(2024, 2, 29), date(2025, 1, 28));
        assert_eq!(period.start, date(2024, 2, 29));
        assert_eq!(period.end, date(2025, 1, 28));

        let next = resolve_contractor_period(date(2024, 2, 29), date(2025, 1, 29));
        assert_eq!(next.start, date(2025, 1, 29));
    }

    #[test]
    fn test_permanent_period_returns_jan1_to_dec31() {
        let period = resolve_permanent_period(date(2026, 6, 15));
        assert_eq!(period.start, date(2026, 1, 1));
        assert_eq!(period.end, date(2026, 12, 31));
    }

    #[test]
    fn test_permanent_period_jan1_returns_current_year() {
        let period = resolve_permanent_period(date(2026, 1, 1));
        assert_eq!(period.start, date(2026, 1, 1));
        assert_eq!(period.end, date(2026, 12, 31));
    }

    #[test]
    fn test_permanent_period_dec31_returns_current_year() {
        let period = resolve_permanent_period(date(2026, 12, 31));
        assert_eq!(period.start, date(2026, 1, 1));
        assert_eq!(period.end, date(2026, 12, 31));
    }

    #[test]
    fn test_previous_permanent_period_is_prior_year() {
        let periods = resolve_permanent_periods(date(2026, 2, 16));
        assert_eq!(periods.previous.start, date(2025, 1, 1));
        assert_eq!(periods.previous.end, date(2025, 12, 31));
        assert_eq!(periods.previous.renewal_date(), periods.current.start);
    }
}
