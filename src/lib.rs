//! Leave Balance Engine for contractor and permanent employees
//!
//! This crate computes vacation balances under two accrual models: rolling
//! 11-month contract terms for contractors, and calendar years with a capped
//! carry-over for permanent employees. Every figure is derived from the
//! employee's start date, their monthly accrual rate, their approved leave
//! and the evaluation date, so balances are never stored.
//!
//! # Example
//!
//! ```
//! use leave_engine::calculator::BalanceCalculator;
//! use leave_engine::clock::FixedClock;
//! use leave_engine::config::LeavePolicy;
//! use leave_engine::models::{ApprovedLeaveRequest, Employee, EmploymentType};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 6, 16).unwrap();
//! let calculator = BalanceCalculator::with_clock(FixedClock::new(today), LeavePolicy::default());
//!
//! let employee = Employee {
//!     id: "EMP-001".to_string(),
//!     employment_type: EmploymentType::Permanent,
//!     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     monthly_accrual_rate: Decimal::new(25, 1),
//!     max_carry_over_days: None,
//! };
//! let requests = vec![ApprovedLeaveRequest {
//!     employee_id: "EMP-001".to_string(),
//!     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     duration: 3,
//! }];
//!
//! let result = calculator.balance(&employee, &requests).unwrap();
//! assert_eq!(result.total_balance, Decimal::new(12, 0));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
