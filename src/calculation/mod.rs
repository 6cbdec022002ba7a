//! Calculation logic for the Leave Balance Engine.
//!
//! This module contains the month accrual rule with its day-15 cutoff, the
//! period resolver for rolling contractor terms and permanent calendar
//! years, the balance aggregator with carry-over, contract-end status for
//! contractors, and report date-range filters.

mod balance;
mod contract_status;
mod month_accrual;
mod period_resolver;
mod report_range;

pub use balance::{
    BALANCE_DECIMAL_PLACES, accrue_between, compute_balance, compute_breakdown,
    compute_contractor_balance, compute_permanent_balance, contractor_breakdown, earned_between,
    permanent_breakdown, round_balance, used_days,
};
pub use contract_status::{ContractAlert, ContractStatus, contract_alerts, contract_status};
pub use month_accrual::{
    BoundaryMonth, FULL_MONTH_CUTOFF_DAY, boundary_month_accrual, credit_amount, month_credit,
    months_between, service_accrual,
};
pub use period_resolver::{
    CONTRACT_TERM_MONTHS, PermanentPeriods, previous_permanent_period, resolve_contractor_period,
    resolve_permanent_period, resolve_permanent_periods,
};
pub use report_range::{DateSpan, ReportRange};
