//! finance-tracker - in-memory income and expense tracking
//!
//! This library provides the core of a small personal-finance tracker: a
//! record store that lives for the length of a session, and the form
//! parsing that turns typed text into records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Finance records and their identifiers
//! - `store`: The in-memory record store
//! - `form`: Raw text to typed record conversion, with fallback policy
//! - `services`: Add/edit/delete workflow over the store
//! - `audit`: Audit logging of changes
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV snapshots
//! - `cli`: The interactive shell
//!
//! # Example
//!
//! ```rust
//! use finance_tracker::form::FinanceForm;
//! use finance_tracker::services::FinanceService;
//! use finance_tracker::store::FinanceStore;
//!
//! let store = FinanceStore::with_sample_data();
//! let service = FinanceService::new(&store);
//!
//! let form = FinanceForm::new("Coffee", "2025-12-10", "expense", "3.50");
//! let coffee = service.create(&form).unwrap().value;
//! assert_eq!(coffee.id.get(), 4);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod services;
pub mod store;

pub use error::{FinanceError, FinanceResult};
