//! Configuration loading and management for the Leave Balance Engine.
//!
//! This module provides functionality to load the leave policy from YAML
//! files: the default carry-over cap for permanent employees and the
//! contract-end notification thresholds for contractors.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Expiring threshold: {} days", config.policy().notifications.expiring_threshold_days);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{
    CarryOverPolicy, DEFAULT_CONTRACT_REMINDER_DAYS, DEFAULT_EXPIRING_THRESHOLD_DAYS,
    LeavePolicy, NotificationPolicy,
};
