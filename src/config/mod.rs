//! Configuration module for finance-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings loading

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
