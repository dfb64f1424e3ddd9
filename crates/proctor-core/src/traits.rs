//! Collaborator traits consumed by the exam engine.
//!
//! These traits are implemented by the `proctor-console` and `proctor-audit`
//! crates respectively. The core never touches the terminal or the
//! filesystem directly.

use chrono::{DateTime, Local};

use crate::error::AuditError;

// ---------------------------------------------------------------------------
// Output renderer
// ---------------------------------------------------------------------------

/// Trait for rendering exam output to the respondent.
pub trait ExamScreen {
    /// Display one line of text.
    fn show(&mut self, text: &str);

    /// Display text without a trailing newline (answer prompts).
    fn prompt(&mut self, text: &str);

    /// Display one line of a correct-answer reveal, visually distinct from
    /// regular output. Emphasis is cosmetic; implementations may fall back
    /// to plain text.
    fn reveal(&mut self, text: &str);
}

// ---------------------------------------------------------------------------
// Input provider
// ---------------------------------------------------------------------------

/// Trait for collecting one raw answer line per question.
///
/// `read_line` blocks until the respondent submits a line; this is the sole
/// suspension point in the whole system. Implementations must tolerate empty
/// input and return an empty string at end of input.
pub trait AnswerSource {
    fn read_line(&mut self) -> anyhow::Result<String>;
}

// ---------------------------------------------------------------------------
// Audit log sink
// ---------------------------------------------------------------------------

/// One audit event, produced per question added to a bank.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    /// When the question was added.
    pub timestamp: DateTime<Local>,
    /// The question's prompt text.
    pub body: String,
}

/// Trait for durable append of audit records to a named log target.
///
/// One target per [`crate::model::QuestionBank`] instance. A failed append
/// is fatal to the add operation that produced the record.
pub trait AuditSink: Send + Sync {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError>;
}
