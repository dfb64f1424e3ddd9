//! Audit sink error type.
//!
//! The audit write inside [`crate::model::QuestionBank::add`] is the only
//! failure path in question-set construction. It is defined here so callers
//! can classify the failure without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when appending to an audit log target.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The log target could not be opened or written.
    #[error("failed to append to audit log {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sink rejected the record for a non-I/O reason.
    #[error("audit sink rejected record: {0}")]
    Rejected(String),
}
