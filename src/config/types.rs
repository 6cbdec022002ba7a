//! Configuration types for leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! default so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_MAX_CARRY_OVER_DAYS;

/// Days before contract end at which a contract counts as expiring soon.
pub const DEFAULT_EXPIRING_THRESHOLD_DAYS: i64 = 105;

/// Days before contract end at which the end-of-contract reminder fires.
pub const DEFAULT_CONTRACT_REMINDER_DAYS: i64 = 40;

fn default_max_carry_over_days() -> u32 {
    DEFAULT_MAX_CARRY_OVER_DAYS
}

fn default_expiring_threshold_days() -> i64 {
    DEFAULT_EXPIRING_THRESHOLD_DAYS
}

fn default_contract_reminder_days() -> i64 {
    DEFAULT_CONTRACT_REMINDER_DAYS
}

fn default_critical_tolerance_days() -> Decimal {
    Decimal::ONE
}

/// Carry-over rules for permanent employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryOverPolicy {
    /// Cap applied when the employee has no override.
    #[serde(default = "default_max_carry_over_days")]
    pub max_carry_over_days: u32,
}

impl Default for CarryOverPolicy {
    fn default() -> Self {
        Self {
            max_carry_over_days: default_max_carry_over_days(),
        }
    }
}

/// Thresholds for contractor contract-end notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPolicy {
    /// Contracts with at most this many days left are expiring soon.
    #[serde(default = "default_expiring_threshold_days")]
    pub expiring_threshold_days: i64,
    /// Exact number of remaining days that triggers the end reminder.
    #[serde(default = "default_contract_reminder_days")]
    pub contract_reminder_days: i64,
    /// How close the balance must be to the remaining days for the
    /// critical warning.
    #[serde(default = "default_critical_tolerance_days")]
    pub critical_tolerance_days: Decimal,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            expiring_threshold_days: default_expiring_threshold_days(),
            contract_reminder_days: default_contract_reminder_days(),
            critical_tolerance_days: default_critical_tolerance_days(),
        }
    }
}

/// The complete leave policy loaded from `policy.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Carry-over section.
    #[serde(default)]
    pub carry_over: CarryOverPolicy,
    /// Notification section.
    #[serde(default)]
    pub notifications: NotificationPolicy,
}
