//! Balance aggregation.
//!
//! This module walks the calendar months of an accrual span, applies the
//! month accrual rule at its two boundaries, subtracts approved leave
//! attributed to the period, and produces the reported balance for both
//! employment models.
//!
//! Leave requests are attributed to a period by their start date only. A
//! request that starts in one period and runs into the next is deducted in
//! full from the period it starts in.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    AccrualBreakdown, AccrualPeriod, ApprovedLeaveRequest, BalanceResult, Employee,
    EmploymentType, MonthAccrualLine, MonthCredit, PeriodLedger,
};

use super::month_accrual::{BoundaryMonth, credit_amount, month_credit};
use super::period_resolver::{resolve_contractor_period, resolve_permanent_periods};

/// Decimal places of every reported figure.
pub const BALANCE_DECIMAL_PLACES: u32 = 2;

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Produces one accrual line per calendar month from `span_start` through
/// `span_end`.
///
/// The opening month is credited by the start day, the closing month by the
/// end day, and every month in between in full. When both dates share a
/// month only the opening rule applies. An empty vector is returned when
/// `span_start` is after `span_end`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::accrue_between;
/// use leave_engine::models::MonthCredit;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let lines = accrue_between(d(2026, 7, 20), d(2026, 12, 31), Decimal::new(25, 1));
///
/// assert_eq!(lines.len(), 6);
/// assert_eq!(lines[0].credit, MonthCredit::Half);
/// assert_eq!(lines[5].credit, MonthCredit::Full);
/// ```
pub fn accrue_between(
    span_start: NaiveDate,
    span_end: NaiveDate,
    monthly_rate: Decimal,
) -> Vec<MonthAccrualLine> {
    let mut lines = Vec::new();
    if span_start > span_end {
        return lines;
    }

    let opening = first_of_month(span_start);
    let closing = first_of_month(span_end);
    let mut cursor = opening;

    while cursor <= closing {
        let credit = if cursor == opening {
            month_credit(span_start.day(), BoundaryMonth::Opening)
        } else if cursor == closing {
            month_credit(span_end.day(), BoundaryMonth::Closing)
        } else {
            MonthCredit::Full
        };

        lines.push(MonthAccrualLine {
            month: cursor,
            credit,
            amount: credit_amount(credit, monthly_rate),
        });

        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    lines
}

/// Sums the accrual of [`accrue_between`].
pub fn earned_between(span_start: NaiveDate, span_end: NaiveDate, monthly_rate: Decimal) -> Decimal {
    accrue_between(span_start, span_end, monthly_rate)
        .iter()
        .map(|line| line.amount)
        .sum()
}

/// Sums the durations of `employee_id`'s requests whose start date passes
/// `attributed`.
pub fn used_days<F>(employee_id: &str, requests: &[ApprovedLeaveRequest], attributed: F) -> Decimal
where
    F: Fn(NaiveDate) -> bool,
{
    let days: u64 = requests
        .iter()
        .filter(|req| req.belongs_to(employee_id) && attributed(req.start_date))
        .map(|req| u64::from(req.duration))
        .sum();
    Decimal::from(days)
}

/// Clamps at zero and rounds half-up to two decimal places.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::round_balance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_balance(Decimal::from_str("13.125").unwrap()), Decimal::from_str("13.13").unwrap());
/// assert_eq!(round_balance(Decimal::from_str("-4.5").unwrap()), Decimal::ZERO);
/// ```
pub fn round_balance(raw: Decimal) -> Decimal {
    let mut rounded = raw
        .max(Decimal::ZERO)
        .round_dp_with_strategy(BALANCE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(BALANCE_DECIMAL_PLACES);
    rounded
}

/// Clips `period` to the days the employee actually worked up to `today`.
fn accrual_span(period: AccrualPeriod, start_date: NaiveDate, today: NaiveDate) -> Option<AccrualPeriod> {
    let start = period.start.max(start_date);
    let end = period.end.min(today);
    (start <= end).then_some(AccrualPeriod { start, end })
}

fn ledger(
    period: AccrualPeriod,
    span: Option<AccrualPeriod>,
    monthly_rate: Decimal,
    used: Decimal,
) -> PeriodLedger {
    let months = span
        .map(|span| accrue_between(span.start, span.end, monthly_rate))
        .unwrap_or_default();
    let earned = months.iter().map(|line| line.amount).sum();
    PeriodLedger {
        period,
        accrual_span: span,
        months,
        earned,
        used,
    }
}

fn empty_ledger(period: AccrualPeriod) -> PeriodLedger {
    ledger(period, None, Decimal::ZERO, Decimal::ZERO)
}

/// Computes every intermediate figure of a contractor's balance.
///
/// The balance covers the contract term containing `today` only. Requests
/// are deducted when they start on or after the term's first day.
pub fn contractor_breakdown(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    today: NaiveDate,
) -> AccrualBreakdown {
    let period = resolve_contractor_period(employee.start_date, today);

    if !employee.has_started(today) {
        debug!(
            employee_id = %employee.id,
            start_date = %employee.start_date,
            "Contractor has not started; balance is zero"
        );
        return AccrualBreakdown {
            employment_type: EmploymentType::Contractor,
            current: empty_ledger(period),
            previous: None,
            max_carry_over_days: None,
            raw_balance: Decimal::ZERO,
            result: BalanceResult::ZERO,
        };
    }

    let span = AccrualPeriod {
        start: period.start,
        end: today,
    };
    let used = used_days(&employee.id, approved_requests, |start| start >= period.start);
    let current = ledger(period, Some(span), employee.monthly_accrual_rate, used);
    let raw_balance = current.net();

    debug!(
        employee_id = %employee.id,
        period_start = %period.start,
        period_end = %period.end,
        earned = %current.earned,
        used = %current.used,
        "Contractor balance aggregated"
    );

    AccrualBreakdown {
        employment_type: EmploymentType::Contractor,
        current,
        previous: None,
        max_carry_over_days: None,
        raw_balance,
        result: BalanceResult {
            total_balance: round_balance(raw_balance),
            carry_over_amount: Decimal::ZERO,
        },
    }
}

/// Computes every intermediate figure of a permanent employee's balance.
///
/// The previous calendar year's remainder, capped at
/// `max_carry_over_days`, is added to the current year's accrual. Only one
/// year back is considered.
pub fn permanent_breakdown(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    max_carry_over_days: u32,
    today: NaiveDate,
) -> AccrualBreakdown {
    let periods = resolve_permanent_periods(today);
    let rate = employee.monthly_accrual_rate;

    if !employee.has_started(today) {
        debug!(
            employee_id = %employee.id,
            start_date = %employee.start_date,
            "Permanent employee has not started; balance is zero"
        );
        return AccrualBreakdown {
            employment_type: EmploymentType::Permanent,
            current: empty_ledger(periods.current),
            previous: Some(empty_ledger(periods.previous)),
            max_carry_over_days: Some(max_carry_over_days),
            raw_balance: Decimal::ZERO,
            result: BalanceResult::ZERO,
        };
    }

    let previous_span = accrual_span(periods.previous, employee.start_date, today);
    let previous = match previous_span {
        Some(span) => {
            let used = used_days(&employee.id, approved_requests, |start| {
                periods.previous.contains_date(start)
            });
            ledger(periods.previous, Some(span), rate, used)
        }
        None => empty_ledger(periods.previous),
    };

    let cap = Decimal::from(max_carry_over_days);
    let carry_over = previous.net().max(Decimal::ZERO).min(cap);

    let current_span = accrual_span(periods.current, employee.start_date, today);
    let used = used_days(&employee.id, approved_requests, |start| {
        periods.current.contains_date(start)
    });
    let current = ledger(periods.current, current_span, rate, used);
    let raw_balance = carry_over + current.net();

    debug!(
        employee_id = %employee.id,
        previous_earned = %previous.earned,
        previous_used = %previous.used,
        carry_over = %carry_over,
        earned = %current.earned,
        used = %current.used,
        "Permanent balance aggregated"
    );

    AccrualBreakdown {
        employment_type: EmploymentType::Permanent,
        current,
        previous: Some(previous),
        max_carry_over_days: Some(max_carry_over_days),
        raw_balance,
        result: BalanceResult {
            total_balance: round_balance(raw_balance),
            carry_over_amount: round_balance(carry_over),
        },
    }
}

/// Computes a contractor's balance for the contract term containing `today`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_contractor_balance;
/// use leave_engine::models::{Employee, EmploymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP-001".to_string(),
///     employment_type: EmploymentType::Contractor,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     monthly_accrual_rate: Decimal::new(25, 1),
///     max_carry_over_days: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(compute_contractor_balance(&employee, &[], today), Decimal::new(25, 1));
/// ```
pub fn compute_contractor_balance(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    today: NaiveDate,
) -> Decimal {
    contractor_breakdown(employee, approved_requests, today)
        .result
        .total_balance
}

/// Computes a permanent employee's `(balance, carry_over)` for the calendar
/// year containing `today`.
pub fn compute_permanent_balance(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    max_carry_over_days: u32,
    today: NaiveDate,
) -> (Decimal, Decimal) {
    let result = permanent_breakdown(employee, approved_requests, max_carry_over_days, today).result;
    (result.total_balance, result.carry_over_amount)
}

/// Validates the inputs and computes the breakdown under the employee's
/// own employment model.
///
/// `max_carry_over_days` only applies to permanent employees.
pub fn compute_breakdown(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    max_carry_over_days: u32,
    today: NaiveDate,
) -> EngineResult<AccrualBreakdown> {
    employee.validate()?;
    for request in approved_requests.iter().filter(|req| req.belongs_to(&employee.id)) {
        request.validate()?;
    }

    Ok(match employee.employment_type {
        EmploymentType::Contractor => contractor_breakdown(employee, approved_requests, today),
        EmploymentType::Permanent => {
            permanent_breakdown(employee, approved_requests, max_carry_over_days, today)
        }
    })
}

/// Validates the inputs and computes the balance under the employee's own
/// employment model.
pub fn compute_balance(
    employee: &Employee,
    approved_requests: &[ApprovedLeaveRequest],
    max_carry_over_days: u32,
    today: NaiveDate,
) -> EngineResult<BalanceResult> {
    compute_breakdown(employee, approved_requests, max_carry_over_days, today)
        .map(|breakdown| breakdown.result)
}
