//! Month accrual rule.
//!
//! This module decides how much a single calendar month contributes to the
//! earned balance. Months fully inside an accrual span contribute the whole
//! monthly rate. The two boundary months use the day-of-month cutoff, with
//! mirrored senses:
//!
//! - Opening month: starting on or before the 15th earns a full month,
//!   starting after it earns half.
//! - Closing month: evaluating after the 15th earns a full month, on or
//!   before it earns half.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::MonthCredit;

/// The last day of the month that still counts as "early" in the month.
pub const FULL_MONTH_CUTOFF_DAY: u32 = 15;

/// Which end of an accrual span a partially covered month sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMonth {
    /// The month containing the span's first day.
    Opening,
    /// The month containing the span's last day, when it differs from the
    /// opening month.
    Closing,
}

/// Returns the credit earned by a boundary month given its reference day.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{BoundaryMonth, month_credit};
/// use leave_engine::models::MonthCredit;
///
/// assert_eq!(month_credit(15, BoundaryMonth::Opening), MonthCredit::Full);
/// assert_eq!(month_credit(16, BoundaryMonth::Opening), MonthCredit::Half);
/// assert_eq!(month_credit(15, BoundaryMonth::Closing), MonthCredit::Half);
/// assert_eq!(month_credit(16, BoundaryMonth::Closing), MonthCredit::Full);
/// ```
pub fn month_credit(day: u32, boundary: BoundaryMonth) -> MonthCredit {
    let early = day <= FULL_MONTH_CUTOFF_DAY;
    match (boundary, early) {
        (BoundaryMonth::Opening, true) | (BoundaryMonth::Closing, false) => MonthCredit::Full,
        (BoundaryMonth::Opening, false) | (BoundaryMonth::Closing, true) => MonthCredit::Half,
    }
}

/// Converts a credit into days at the given monthly rate.
pub fn credit_amount(credit: MonthCredit, monthly_rate: Decimal) -> Decimal {
    match credit {
        MonthCredit::Full => monthly_rate,
        MonthCredit::Half => monthly_rate / Decimal::TWO,
    }
}

/// Returns the days a boundary month contributes.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{BoundaryMonth, boundary_month_accrual};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("2.5").unwrap();
/// assert_eq!(boundary_month_accrual(20, rate, BoundaryMonth::Opening), Decimal::from_str("1.25").unwrap());
/// assert_eq!(boundary_month_accrual(20, rate, BoundaryMonth::Closing), rate);
/// ```
pub fn boundary_month_accrual(day: u32, monthly_rate: Decimal, boundary: BoundaryMonth) -> Decimal {
    credit_amount(month_credit(day, boundary), monthly_rate)
}

/// Counts month credits between two dates.
///
/// The whole calendar-month difference, plus one more when `end` falls
/// after the cutoff day. Returns zero when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(months_between(d(2025, 1, 1), d(2026, 1, 1)), 12);
/// assert_eq!(months_between(d(2026, 1, 1), d(2026, 1, 31)), 1);
/// assert_eq!(months_between(d(2026, 1, 1), d(2026, 1, 14)), 0);
/// ```
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let whole = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let extra = u32::from(end.day() > FULL_MONTH_CUTOFF_DAY);
    u32::try_from(whole).unwrap_or(0) + extra
}

/// Gross days accrued over an entire tenure, ignoring period resets,
/// carry-over caps, and consumption.
pub fn service_accrual(start: NaiveDate, today: NaiveDate, monthly_rate: Decimal) -> Decimal {
    Decimal::from(months_between(start, today)) * monthly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// MA-001: opening month on or before the cutoff is full
    #[test]
    fn test_opening_month_early_start_is_full() {
        for day in 1..=15 {
            assert_eq!(month_credit(day, BoundaryMonth::Opening), MonthCredit::Full);
        }
    }

    /// MA-002: opening month after the cutoff is half
    #[test]
    fn test_opening_month_late_start_is_half() {
        for day in 16..=31 {
            assert_eq!(month_credit(day, BoundaryMonth::Opening), MonthCredit::Half);
        }
    }

    /// MA-003: closing month mirrors the opening rule
    #[test]
    fn test_closing_month_is_mirror_of_opening() {
        for day in 1..=31 {
            assert_ne!(
                month_credit(day, BoundaryMonth::Opening),
                month_credit(day, BoundaryMonth::Closing),
                "day {} should credit differently at each boundary",
                day
            );
        }
    }

    #[test]
    fn test_half_credit_is_half_the_rate() {
        assert_eq!(credit_amount(MonthCredit::Half, dec("2.5")), dec("1.25"));
        assert_eq!(credit_amount(MonthCredit::Half, dec("1.75")), dec("0.875"));
        assert_eq!(credit_amount(MonthCredit::Full, dec("1.75")), dec("1.75"));
    }

    #[test]
    fn test_boundary_month_accrual_at_cutoff() {
        let rate = dec("3.0");
        assert_eq!(boundary_month_accrual(15, rate, BoundaryMonth::Opening), dec("3.0"));
        assert_eq!(boundary_month_accrual(15, rate, BoundaryMonth::Closing), dec("1.5"));
    }

    #[test]
    fn test_months_between_same_month() {
        assert_eq!(months_between(date(2026, 1, 1), date(2026, 1, 31)), 1);
    }

    #[test]
    fn test_months_between_full_year() {
        assert_eq!(months_between(date(2025, 1, 1), date(2026, 1, 1)), 12);
    }

    #[test]
    fn test_months_between_partial_months() {
        assert_eq!(months_between(date(2026, 1, 15), date(2026, 3, 10)), 2);
    }

    #[test]
    fn test_months_between_before_15th() {
        assert_eq!(months_between(date(2026, 1, 1), date(2026, 1, 14)), 0);
    }

    #[test]
    fn test_months_between_after_15th() {
        assert_eq!(months_between(date(2026, 1, 1), date(2026, 1, 16)), 1);
    }

    #[test]
    fn test_months_between_day_16_credits_one_more_than_day_14() {
        let start = date(2025, 3, 1);
        assert_eq!(
            months_between(start, date(2025, 9, 16)),
            months_between(start, date(2025, 9, 14)) + 1
        );
    }

    #[test]
    fn test_months_between_end_before_start_is_zero() {
        assert_eq!(months_between(date(2026, 5, 1), date(2026, 4, 30)), 0);
    }

    #[test]
    fn test_service_accrual_one_year() {
        assert_eq!(
            service_accrual(date(2025, 1, 1), date(2026, 1, 1), dec("2.5")),
            dec("30.0")
        );
    }

    #[test]
    fn test_service_accrual_not_started_is_zero() {
        assert_eq!(
            service_accrual(date(2027, 1, 1), date(2026, 1, 1), dec("2.5")),
            Decimal::ZERO
        );
    }
}
