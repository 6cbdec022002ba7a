//! Report date-range filters.
//!
//! Leave reports are filtered by a named range relative to the evaluation
//! date, by the contractor's active term, or by explicit dates.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::parse_iso_date;

use super::period_resolver::resolve_contractor_period;

/// A closed range of dates selected for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

/// A named report range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "filter")]
pub enum ReportRange {
    /// January 1 of the current year through today.
    YearToDate,
    /// The 30 days before today through today.
    Last30Days,
    /// The 60 days before today through today.
    Last60Days,
    /// The 90 days before today through today.
    Last90Days,
    /// The contractor term containing today.
    ContractYear,
    /// Explicit dates.
    Custom {
        /// First day (inclusive).
        start: NaiveDate,
        /// Last day (inclusive).
        end: NaiveDate,
    },
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportRange::YearToDate => write!(f, "ytd"),
            ReportRange::Last30Days => write!(f, "last_30"),
            ReportRange::Last60Days => write!(f, "last_60"),
            ReportRange::Last90Days => write!(f, "last_90"),
            ReportRange::ContractYear => write!(f, "full_year"),
            ReportRange::Custom { start, end } => write!(f, "custom({start}..={end})"),
        }
    }
}

impl ReportRange {
    /// Builds a range from the filter name and optional raw custom dates.
    ///
    /// A `custom` filter missing either date, and any unrecognised filter
    /// name, falls back to the last 30 days. Custom dates that are present
    /// must parse and be in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::calculation::ReportRange;
    ///
    /// assert_eq!(ReportRange::from_filter("ytd", None, None).unwrap(), ReportRange::YearToDate);
    /// assert_eq!(ReportRange::from_filter("custom", Some("2026-01-01"), None).unwrap(), ReportRange::Last30Days);
    /// assert!(ReportRange::from_filter("custom", Some("2026-02-01"), Some("2026-01-01")).is_err());
    /// ```
    pub fn from_filter(
        filter: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> EngineResult<Self> {
        let range = match filter {
            "ytd" => ReportRange::YearToDate,
            "last_30" => ReportRange::Last30Days,
            "last_60" => ReportRange::Last60Days,
            "last_90" => ReportRange::Last90Days,
            "full_year" => ReportRange::ContractYear,
            "custom" => match (start_date, end_date) {
                (Some(start), Some(end)) => {
                    let start = parse_iso_date("start_date", start)?;
                    let end = parse_iso_date("end_date", end)?;
                    if end < start {
                        return Err(EngineError::InvalidDateRange { start, end });
                    }
                    ReportRange::Custom { start, end }
                }
                _ => ReportRange::Last30Days,
            },
            other => {
                warn!(filter = %other, "Unknown report filter; using last 30 days");
                ReportRange::Last30Days
            }
        };
        Ok(range)
    }

    /// Resolves the range against `today`.
    ///
    /// `contract_start` anchors [`ReportRange::ContractYear`]; without it the
    /// contract year falls back to the calendar year to date.
    pub fn resolve(&self, contract_start: Option<NaiveDate>, today: NaiveDate) -> DateSpan {
        let days_back = |days: u64| DateSpan {
            start: today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN),
            end: today,
        };

        match *self {
            ReportRange::YearToDate => DateSpan {
                start: today.with_ordinal(1).unwrap_or(today),
                end: today,
            },
            ReportRange::Last30Days => days_back(30),
            ReportRange::Last60Days => days_back(60),
            ReportRange::Last90Days => days_back(90),
            ReportRange::ContractYear => match contract_start {
                Some(start) => {
                    let period = resolve_contractor_period(start, today);
                    DateSpan {
                        start: period.start,
                        end: period.end,
                    }
                }
                None => ReportRange::YearToDate.resolve(None, today),
            },
            ReportRange::Custom { start, end } => DateSpan { start, end },
        }
    }
}
