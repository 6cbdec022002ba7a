//! Approved leave request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An approved leave request consumed by the balance calculation.
///
/// Only the start date is used for period attribution: a request that
/// begins before a period boundary and ends after it is counted entirely in
/// the period containing its start date.
///
/// # Example
///
/// ```
/// use leave_engine::models::ApprovedLeaveRequest;
/// use chrono::NaiveDate;
///
/// let request = ApprovedLeaveRequest {
///     employee_id: "EMP-001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     duration: 5,
/// };
/// assert!(request.belongs_to("EMP-001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedLeaveRequest {
    /// The employee the request was filed by.
    pub employee_id: String,
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// Number of leave days consumed.
    pub duration: u32,
}

impl ApprovedLeaveRequest {
    /// Returns true if the request was filed by `employee_id`.
    pub fn belongs_to(&self, employee_id: &str) -> bool {
        self.employee_id == employee_id
    }

    /// Rejects requests with a zero duration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.duration == 0 {
            return Err(EngineError::InvalidLeaveRequest {
                employee_id: self.employee_id.clone(),
                message: format!("duration must be positive (starting {})", self.start_date),
            });
        }
        Ok(())
    }
}
