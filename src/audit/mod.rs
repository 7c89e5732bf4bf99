//! Audit log of record changes
//!
//! Every add, edit and delete that goes through the finance service is
//! appended to a line-delimited JSON file (JSONL) with the record before
//! and after the change.
//!
//! ```rust,ignore
//! use finance_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&finance))?;
//! logger.log(&AuditEntry::update(&before, &after))?;
//! ```

mod entry;
mod logger;

pub use entry::{describe_changes, AuditEntry, Operation};
pub use logger::AuditLogger;
