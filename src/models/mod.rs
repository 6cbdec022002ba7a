//! Core data models for the Leave Balance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_period;
mod balance_result;
mod date;
mod employee;
mod leave_request;

pub use accrual_period::AccrualPeriod;
pub use balance_result::{
    AccrualBreakdown, AuditStep, AuditTrace, AuditWarning, BalanceReport, BalanceResult,
    MonthAccrualLine, MonthCredit, PeriodLedger,
};
pub use date::{ISO_DATE_FORMAT, parse_iso_date};
pub use employee::{DEFAULT_MAX_CARRY_OVER_DAYS, Employee, EmploymentType};
pub use leave_request::ApprovedLeaveRequest;
