//! Contractor contract status and notification triggers.
//!
//! A contractor's contract ends when the active 11-month term renews. This
//! module reports how many days remain and which contract-end
//! notifications are due on a given day, given the contractor's current
//! balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::NotificationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AccrualPeriod, Employee};

use super::period_resolver::resolve_contractor_period;

/// A contract-end notification that is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractAlert {
    /// The fixed reminder ahead of contract end.
    EndReminder,
    /// The remaining balance roughly equals the remaining contract days, so
    /// leave must be taken now or lost at renewal.
    BalanceCritical,
}

/// Where a contractor stands relative to the end of their current term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStatus {
    /// The active contract term.
    pub period: AccrualPeriod,
    /// The day the contract renews (exclusive end of the term).
    pub contract_end_date: NaiveDate,
    /// Days from the evaluation date until `contract_end_date`.
    pub days_remaining: i64,
    /// True when the contract ends within the expiring threshold.
    pub expiring_soon: bool,
    /// Notifications due on the evaluation date.
    pub alerts: Vec<ContractAlert>,
}

/// Returns the alerts due for a contract with `days_remaining` left and
/// `balance` days of leave available.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{ContractAlert, contract_alerts};
/// use leave_engine::config::NotificationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = NotificationPolicy::default();
/// assert_eq!(contract_alerts(40, Decimal::from(3), &policy), vec![ContractAlert::EndReminder]);
/// assert_eq!(contract_alerts(12, Decimal::from(11), &policy), vec![ContractAlert::BalanceCritical]);
/// assert!(contract_alerts(-1, Decimal::ZERO, &policy).is_empty());
/// ```
pub fn contract_alerts(
    days_remaining: i64,
    balance: Decimal,
    policy: &NotificationPolicy,
) -> Vec<ContractAlert> {
    let mut alerts = Vec::new();
    if days_remaining < 0 {
        return alerts;
    }

    if days_remaining == policy.contract_reminder_days {
        alerts.push(ContractAlert::EndReminder);
    }

    let remaining = Decimal::from(days_remaining);
    let tolerance = policy.critical_tolerance_days;
    if days_remaining > 0 && (balance - remaining).abs() <= tolerance {
        alerts.push(ContractAlert::BalanceCritical);
    }

    alerts
}

/// Computes the contract status of a contractor on `today`.
///
/// Permanent employees have no contract term and are rejected with
/// `UnsupportedEmploymentType`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::contract_status;
/// use leave_engine::config::NotificationPolicy;
/// use leave_engine::models::{Employee, EmploymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP-001".to_string(),
///     employment_type: EmploymentType::Contractor,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     monthly_accrual_rate: Decimal::new(25, 1),
///     max_carry_over_days: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let status = contract_status(&employee, Decimal::from(20), today, &NotificationPolicy::default()).unwrap();
/// assert_eq!(status.contract_end_date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
/// assert_eq!(status.days_remaining, 61);
/// assert!(status.expiring_soon);
/// ```
pub fn contract_status(
    employee: &Employee,
    balance: Decimal,
    today: NaiveDate,
    policy: &NotificationPolicy,
) -> EngineResult<ContractStatus> {
    if !employee.is_contractor() {
        return Err(EngineError::UnsupportedEmploymentType {
            operation: "contract_status".to_string(),
            employment_type: employee.employment_type.to_string(),
        });
    }

    let period = resolve_contractor_period(employee.start_date, today);
    let contract_end_date = period.renewal_date();
    let days_remaining = (contract_end_date - today).num_days();
    let expiring_soon = days_remaining > 0 && days_remaining <= policy.expiring_threshold_days;

    Ok(ContractStatus {
        period,
        contract_end_date,
        days_remaining,
        expiring_soon,
        alerts: contract_alerts(days_remaining, balance, policy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_employee(employment_type: EmploymentType) -> Employee {
        Employee {
            id: "EMP-001".to_string(),
            employment_type,
            start_date: date(2025, 1, 1),
            monthly_accrual_rate: dec("2.5"),
            max_carry_over_days: None,
        }
    }

    /// CS-001: 40 days out triggers the reminder
    #[test]
    fn test_reminder_fires_exactly_at_threshold() {
        let policy = NotificationPolicy::default();
        assert_eq!(contract_alerts(40, dec("2"), &policy), vec![ContractAlert::EndReminder]);
        assert!(contract_alerts(41, dec("2"), &policy).is_empty());
        assert!(contract_alerts(39, dec("2"), &policy).is_empty());
    }

    /// CS-002: critical warning within one day of the balance
    #[test]
    fn test_critical_within_tolerance() {
        let policy = NotificationPolicy::default();
        assert_eq!(
            contract_alerts(10, dec("11"), &policy),
            vec![ContractAlert::BalanceCritical]
        );
        assert_eq!(
            contract_alerts(10, dec("9"), &policy),
            vec![ContractAlert::BalanceCritical]
        );
        assert!(contract_alerts(10, dec("8.5"), &policy).is_empty());
        assert!(contract_alerts(10, dec("11.5"), &policy).is_empty());
    }

    /// CS-003: both alerts on the same day
    #[test]
    fn test_reminder_and_critical_together() {
        let policy = NotificationPolicy::default();
        assert_eq!(
            contract_alerts(40, dec("40.5"), &policy),
            vec![ContractAlert::EndReminder, ContractAlert::BalanceCritical]
        );
    }

    #[test]
    fn test_no_critical_on_renewal_day() {
        let policy = NotificationPolicy::default();
        assert!(contract_alerts(0, dec("0.5"), &policy).is_empty());
    }

    #[test]
    fn test_custom_reminder_days() {
        let policy = NotificationPolicy {
            contract_reminder_days: 30,
            ..NotificationPolicy::default()
        };
        assert_eq!(contract_alerts(30, dec("0"), &policy), vec![ContractAlert::EndReminder]);
        assert!(contract_alerts(40, dec("0"), &policy).is_empty());
    }

    #[test]
    fn test_status_days_remaining_counts_to_renewal() {
        let employee = create_employee(EmploymentType::Contractor);
        let status =
            contract_status(&employee, dec("5"), date(2025, 11, 30), &NotificationPolicy::default())
                .unwrap();
        assert_eq!(status.period.start, date(2025, 1, 1));
        assert_eq!(status.contract_end_date, date(2025, 12, 1));
        assert_eq!(status.days_remaining, 1);
        assert!(status.expiring_soon);
    }

    #[test]
    fn test_status_not_expiring_early_in_term() {
        let employee = create_employee(EmploymentType::Contractor);
        let status =
            contract_status(&employee, dec("5"), date(2025, 12, 1), &NotificationPolicy::default())
                .unwrap();
        assert_eq!(status.contract_end_date, date(2026, 11, 1));
        assert_eq!(status.days_remaining, 335);
        assert!(!status.expiring_soon);
        assert!(status.alerts.is_empty());
    }

    #[test]
    fn test_status_expiring_threshold_is_inclusive() {
        let employee = create_employee(EmploymentType::Contractor);
        // 2025-12-01 minus 105 days.
        let today = date(2025, 8, 18);
        let status =
            contract_status(&employee, dec("5"), today, &NotificationPolicy::default()).unwrap();
        assert_eq!(status.days_remaining, 105);
        assert!(status.expiring_soon);
    }

    #[test]
    fn test_status_for_future_start_counts_to_first_renewal() {
        let employee = create_employee(EmploymentType::Contractor);
        let status =
            contract_status(&employee, dec("0"), date(2024, 12, 1), &NotificationPolicy::default())
                .unwrap();
        assert_eq!(status.contract_end_date, date(2025, 12, 1));
        assert_eq!(status.days_remaining, 365);
    }

    #[test]
    fn test_status_rejects_permanent_employee() {
        let employee = create_employee(EmploymentType::Permanent);
        let err = contract_status(&employee, dec("5"), date(2025, 6, 1), &NotificationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedEmploymentType { .. }));
    }
}
