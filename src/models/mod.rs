//! Core data models for finance-tracker
//!
//! This module contains the data structures that represent a finance record:
//! its identifier, its income/expense type, and the record itself.

pub mod finance;
pub mod finance_type;
pub mod ids;

pub use finance::{Finance, FinanceDraft};
pub use finance_type::{FinanceType, ParseFinanceTypeError};
pub use ids::FinanceId;
