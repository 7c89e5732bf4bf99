//! Display formatting for terminal output
//!
//! Provides utilities for formatting finance records for terminal display.

pub mod finance;

pub use finance::{
    format_amount, format_finance_card, format_finance_details, format_finance_list,
};
