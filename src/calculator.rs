//! Audited balance calculation.
//!
//! [`BalanceCalculator`] binds the engine to a [`Clock`] and a
//! [`LeavePolicy`], and records every decision of a calculation as an
//! audit trace alongside the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{ContractStatus, compute_breakdown, contract_status};
use crate::clock::{Clock, SystemClock};
use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{
    AccrualBreakdown, ApprovedLeaveRequest, AuditStep, AuditTrace, AuditWarning, BalanceReport,
    BalanceResult, Employee, EmploymentType, MonthCredit, PeriodLedger,
};

/// The version recorded on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes leave balances against an injected clock and policy.
///
/// # Example
///
/// ```
/// use leave_engine::calculator::BalanceCalculator;
/// use leave_engine::clock::FixedClock;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::{Employee, EmploymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
/// let calculator = BalanceCalculator::with_clock(clock, LeavePolicy::default());
///
/// let employee = Employee {
///     id: "EMP-001".to_string(),
///     employment_type: EmploymentType::Permanent,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     monthly_accrual_rate: Decimal::new(25, 1),
///     max_carry_over_days: None,
/// };
///
/// let report = calculator.calculate(&employee, &[]).unwrap();
/// assert_eq!(report.result().total_balance, Decimal::new(2000, 2));
/// assert_eq!(report.result().carry_over_amount, Decimal::new(1500, 2));
/// ```
#[derive(Debug, Clone)]
pub struct BalanceCalculator<C = SystemClock> {
    clock: C,
    policy: LeavePolicy,
}

impl BalanceCalculator<SystemClock> {
    /// Creates a calculator reading today's date from the system clock.
    pub fn new(policy: LeavePolicy) -> Self {
        Self::with_clock(SystemClock, policy)
    }
}

impl<C: Clock> BalanceCalculator<C> {
    /// Creates a calculator with an explicit clock.
    pub fn with_clock(clock: C, policy: LeavePolicy) -> Self {
        Self { clock, policy }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the evaluation date.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the carry-over cap that applies to `employee`.
    pub fn carry_over_cap(&self, employee: &Employee) -> u32 {
        employee.carry_over_cap_or(self.policy.carry_over.max_carry_over_days)
    }

    /// Computes an employee's balance with a full audit trace.
    ///
    /// `approved_requests` may contain other employees' requests; only the
    /// employee's own are considered. The caller must read them from a
    /// consistent snapshot.
    pub fn calculate(
        &self,
        employee: &Employee,
        approved_requests: &[ApprovedLeaveRequest],
    ) -> EngineResult<BalanceReport> {
        let today = self.today();
        let cap = self.carry_over_cap(employee);

        let breakdown = compute_breakdown(employee, approved_requests, cap, today)
            .inspect_err(|err| {
                warn!(employee_id = %employee.id, error = %err, "Balance calculation rejected");
            })?;

        let audit_trace = build_audit_trace(employee, today, &breakdown);

        info!(
            employee_id = %employee.id,
            employment_type = %employee.employment_type,
            as_of = %today,
            total_balance = %breakdown.result.total_balance,
            carry_over = %breakdown.result.carry_over_amount,
            warnings = audit_trace.warnings.len(),
            "Balance calculation completed"
        );

        Ok(BalanceReport {
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: employee.id.clone(),
            as_of: today,
            breakdown,
            audit_trace,
        })
    }

    /// Computes only the reported balance figures.
    pub fn balance(
        &self,
        employee: &Employee,
        approved_requests: &[ApprovedLeaveRequest],
    ) -> EngineResult<BalanceResult> {
        let cap = self.carry_over_cap(employee);
        compute_breakdown(employee, approved_requests, cap, self.today()).map(|b| b.result)
    }

    /// Computes a contractor's contract-end status using their current
    /// balance.
    pub fn contract_status(
        &self,
        employee: &Employee,
        approved_requests: &[ApprovedLeaveRequest],
    ) -> EngineResult<ContractStatus> {
        let balance = self.balance(employee, approved_requests)?;
        let status = contract_status(
            employee,
            balance.total_balance,
            self.today(),
            &self.policy.notifications,
        )?;

        if !status.alerts.is_empty() {
            info!(
                employee_id = %employee.id,
                days_remaining = status.days_remaining,
                alerts = ?status.alerts,
                "Contract notifications due"
            );
        }

        Ok(status)
    }
}

fn month_counts(ledger: &PeriodLedger) -> (usize, usize) {
    let full = ledger
        .months
        .iter()
        .filter(|line| line.credit == MonthCredit::Full)
        .count();
    (full, ledger.months.len() - full)
}

fn accrual_step(step_number: u32, rule_id: &str, ledger: &PeriodLedger, rate: Decimal) -> AuditStep {
    let (full, half) = month_counts(ledger);
    let (span_start, span_end) = match ledger.accrual_span {
        Some(span) => (Some(span.start.to_string()), Some(span.end.to_string())),
        None => (None, None),
    };

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: "Monthly Accrual".to_string(),
        input: serde_json::json!({
            "span_start": span_start,
            "span_end": span_end,
            "monthly_rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "full_months": full,
            "half_months": half,
            "earned": ledger.earned.normalize().to_string()
        }),
        reasoning: match ledger.accrual_span {
            Some(span) => format!(
                "{} full + {} half months x {} from {} to {} = {}",
                full,
                half,
                rate.normalize(),
                span.start,
                span.end,
                ledger.earned.normalize()
            ),
            None => format!(
                "No tenure between {} and {}; nothing earned",
                ledger.period.start, ledger.period.end
            ),
        },
    }
}

fn usage_step(step_number: u32, rule_id: &str, ledger: &PeriodLedger, attribution: &str) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: "Approved Leave Usage".to_string(),
        input: serde_json::json!({
            "period_start": ledger.period.start.to_string(),
            "period_end": ledger.period.end.to_string(),
            "attribution": attribution
        }),
        output: serde_json::json!({
            "used": ledger.used.normalize().to_string()
        }),
        reasoning: format!(
            "{} days of approved leave {}",
            ledger.used.normalize(),
            attribution
        ),
    }
}

fn build_audit_trace(employee: &Employee, today: NaiveDate, breakdown: &AccrualBreakdown) -> AuditTrace {
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;
    let rate = employee.monthly_accrual_rate;
    let current = &breakdown.current;

    steps.push(AuditStep {
        step_number,
        rule_id: "period_resolution".to_string(),
        rule_name: "Accrual Period Resolution".to_string(),
        input: serde_json::json!({
            "employment_type": breakdown.employment_type.as_str(),
            "start_date": employee.start_date.to_string(),
            "as_of": today.to_string()
        }),
        output: serde_json::json!({
            "period_start": current.period.start.to_string(),
            "period_end": current.period.end.to_string(),
            "previous_period_start": breakdown.previous.as_ref().map(|p| p.period.start.to_string()),
            "previous_period_end": breakdown.previous.as_ref().map(|p| p.period.end.to_string())
        }),
        reasoning: match breakdown.employment_type {
            EmploymentType::Contractor => format!(
                "Contract term {} to {} contains {}",
                current.period.start, current.period.end, today
            ),
            EmploymentType::Permanent => format!(
                "Calendar year {} to {} contains {}",
                current.period.start, current.period.end, today
            ),
        },
    });
    step_number += 1;

    if !employee.has_started(today) {
        warnings.push(AuditWarning {
            code: "NOT_STARTED".to_string(),
            message: format!(
                "Employee starts on {}, after the evaluation date {}",
                employee.start_date, today
            ),
            severity: "low".to_string(),
        });
    }

    let mut carry_over = Decimal::ZERO;
    if let Some(previous) = &breakdown.previous {
        steps.push(accrual_step(step_number, "previous_year_accrual", previous, rate));
        step_number += 1;
        steps.push(usage_step(
            step_number,
            "previous_year_usage",
            previous,
            "started in the previous calendar year",
        ));
        step_number += 1;

        carry_over = breakdown.result.carry_over_amount;
        let cap = breakdown.max_carry_over_days.unwrap_or_default();
        let remainder = previous.net();
        steps.push(AuditStep {
            step_number,
            rule_id: "carry_over".to_string(),
            rule_name: "Carry-Over".to_string(),
            input: serde_json::json!({
                "previous_earned": previous.earned.normalize().to_string(),
                "previous_used": previous.used.normalize().to_string(),
                "max_carry_over_days": cap
            }),
            output: serde_json::json!({
                "carry_over": carry_over.normalize().to_string()
            }),
            reasoning: format!(
                "min(max(0, {} - {}), {}) = {}",
                previous.earned.normalize(),
                previous.used.normalize(),
                cap,
                carry_over.normalize()
            ),
        });
        step_number += 1;

        if remainder > Decimal::from(cap) {
            warnings.push(AuditWarning {
                code: "CARRY_OVER_CAPPED".to_string(),
                message: format!(
                    "{} unused days from {} exceed the {} day cap and were forfeited",
                    remainder.normalize(),
                    previous.period.start.format("%Y"),
                    cap
                ),
                severity: "low".to_string(),
            });
        }
    }

    steps.push(accrual_step(step_number, "current_period_accrual", current, rate));
    step_number += 1;

    let attribution = match breakdown.employment_type {
        EmploymentType::Contractor => "starting on or after the contract term start",
        EmploymentType::Permanent => "started in the current calendar year",
    };
    steps.push(usage_step(step_number, "current_period_usage", current, attribution));
    step_number += 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "final_balance".to_string(),
        rule_name: "Final Balance".to_string(),
        input: serde_json::json!({
            "carry_over": carry_over.normalize().to_string(),
            "earned": current.earned.normalize().to_string(),
            "used": current.used.normalize().to_string(),
            "raw_balance": breakdown.raw_balance.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_balance": breakdown.result.total_balance.to_string(),
            "carry_over_amount": breakdown.result.carry_over_amount.to_string()
        }),
        reasoning: format!(
            "round(max(0, {} + {} - {}), 2) = {}",
            carry_over.normalize(),
            current.earned.normalize(),
            current.used.normalize(),
            breakdown.result.total_balance
        ),
    });

    if breakdown.raw_balance < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "BALANCE_CLAMPED".to_string(),
            message: format!(
                "Approved leave exceeds the available balance by {} days",
                (-breakdown.raw_balance).normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    AuditTrace { steps, warnings }
}
