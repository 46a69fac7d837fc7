//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll settings from YAML:
//! the normal-time threshold, the overtime multiplier, the default
//! superannuation rate and the progressive tax brackets. Server process
//! settings come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap().into_config();
//! println!("Overtime multiplier: {}", config.overtime_multiplier());
//! ```

mod env;
mod loader;
mod types;

pub use env::{DEFAULT_CONFIG_DIR, DEFAULT_HOST_ADDRESS, ServerSettings};
pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_SUPER_RATE, PayrollConfig, PayrollSettings};
