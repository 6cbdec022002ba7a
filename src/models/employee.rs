//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentType enum
//! for representing the accrual inputs of a worker.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default cap on days carried over from the previous calendar year.
pub const DEFAULT_MAX_CARRY_OVER_DAYS: u32 = 15;

/// Represents the employment model that drives the accrual period.
///
/// Deserialization goes through [`FromStr`], so an unrecognised value
/// fails with [`EngineError::UnknownEmploymentType`] instead of being
/// mapped to a default model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EmploymentType {
    /// Rolling 11-month contract periods anchored on the start date.
    Contractor,
    /// Calendar-year periods with capped carry-over.
    Permanent,
}

impl EmploymentType {
    /// Returns the wire name of the employment type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Contractor => "contractor",
            EmploymentType::Permanent => "permanent",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = EngineError;

    /// Parses an employment type.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::EmploymentType;
    ///
    /// assert_eq!("permanent".parse::<EmploymentType>().unwrap(), EmploymentType::Permanent);
    /// assert!("intern".parse::<EmploymentType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contractor" => Ok(EmploymentType::Contractor),
            "permanent" => Ok(EmploymentType::Permanent),
            _ => Err(EngineError::UnknownEmploymentType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EmploymentType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Represents an employee whose leave balance is being computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employment model that decides the accrual period.
    pub employment_type: EmploymentType,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// Leave days earned per fully worked month.
    pub monthly_accrual_rate: Decimal,
    /// Per-employee override of the carry-over cap (permanent only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_carry_over_days: Option<u32>,
}

impl Employee {
    /// Returns true if the employee is on the rolling contractor model.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{Employee, EmploymentType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let contractor = Employee {
    ///     id: "EMP-001".to_string(),
    ///     employment_type: EmploymentType::Contractor,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     monthly_accrual_rate: Decimal::new(25, 1),
    ///     max_carry_over_days: None,
    /// };
    /// assert!(contractor.is_contractor());
    /// ```
    pub fn is_contractor(&self) -> bool {
        self.employment_type == EmploymentType::Contractor
    }

    /// Returns true if the employee is on the calendar-year model.
    pub fn is_permanent(&self) -> bool {
        self.employment_type == EmploymentType::Permanent
    }

    /// Returns true once `today` has reached the employee's start date.
    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.start_date <= today
    }

    /// Returns the carry-over cap, falling back to `default` when the
    /// employee has no override.
    pub fn carry_over_cap_or(&self, default: u32) -> u32 {
        self.max_carry_over_days.unwrap_or(default)
    }

    /// Checks the fields the accrual engine depends on.
    ///
    /// Returns `InvalidEmployee` when the monthly accrual rate is zero or
    /// negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_accrual_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_accrual_rate".to_string(),
                message: format!("must be positive, got {}", self.monthly_accrual_rate),
            });
        }
        Ok(())
    }
}
