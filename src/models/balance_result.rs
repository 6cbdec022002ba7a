//! Balance result models for the Leave Balance Engine.
//!
//! This module contains the [`BalanceResult`] returned by the entry points,
//! the [`AccrualBreakdown`] of intermediate figures, and the
//! [`BalanceReport`] with its audit trace produced by the calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccrualPeriod, EmploymentType};

/// The final balance figures reported to collaborators.
///
/// # Example
///
/// ```
/// use leave_engine::models::BalanceResult;
/// use rust_decimal::Decimal;
///
/// let result = BalanceResult {
///     total_balance: Decimal::new(200, 1),
///     carry_over_amount: Decimal::new(150, 1),
/// };
/// assert_eq!(result.total_balance.to_string(), "20.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Available leave days, never negative, rounded to 2 decimal places.
    pub total_balance: Decimal,
    /// Days carried over from the previous calendar year (zero for contractors).
    pub carry_over_amount: Decimal,
}

impl BalanceResult {
    /// A zero balance with no carry-over.
    pub const ZERO: BalanceResult = BalanceResult {
        total_balance: Decimal::ZERO,
        carry_over_amount: Decimal::ZERO,
    };
}

/// How much of a month's accrual was credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthCredit {
    /// The whole monthly rate.
    Full,
    /// Half the monthly rate.
    Half,
}

/// The accrual credited for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAccrualLine {
    /// The first day of the credited month.
    pub month: NaiveDate,
    /// Whether a full or half accrual applied.
    pub credit: MonthCredit,
    /// The days credited for the month.
    pub amount: Decimal,
}

/// Earned and used figures for one accrual period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLedger {
    /// The accrual period.
    pub period: AccrualPeriod,
    /// The part of the period the employee accrued over, clipped to their
    /// start date and the evaluation date. `None` when they had no tenure.
    pub accrual_span: Option<AccrualPeriod>,
    /// Per-month accrual lines, in calendar order.
    pub months: Vec<MonthAccrualLine>,
    /// Total days earned.
    pub earned: Decimal,
    /// Total days consumed by approved requests attributed to the period.
    pub used: Decimal,
}

impl PeriodLedger {
    /// Returns `earned - used` without clamping.
    pub fn net(&self) -> Decimal {
        self.earned - self.used
    }
}

/// All intermediate figures of a balance computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualBreakdown {
    /// The employment model the balance was computed under.
    pub employment_type: EmploymentType,
    /// The active period.
    pub current: PeriodLedger,
    /// The previous calendar year (permanent employees only).
    pub previous: Option<PeriodLedger>,
    /// The carry-over cap that was applied.
    pub max_carry_over_days: Option<u32>,
    /// The unrounded, unclamped balance.
    pub raw_balance: Decimal,
    /// The reported figures.
    pub result: BalanceResult,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete, auditable result of a balance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The evaluation date.
    pub as_of: NaiveDate,
    /// Intermediate figures.
    pub breakdown: AccrualBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl BalanceReport {
    /// Returns the reported balance figures.
    pub fn result(&self) -> BalanceResult {
        self.breakdown.result
    }
}
