//! Service layer for finance-tracker
//!
//! The service layer provides the add/edit/delete workflow on top of the
//! record store, handling form parsing and audit logging.

pub mod finance;

pub use finance::FinanceService;
