//! proctor-audit — Audit-log sink implementations.
//!
//! [`FileAuditSink`] appends one line per added question to a named log
//! file. [`MemoryAuditSink`] records the same lines in memory for testing
//! question-set construction without a filesystem.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use proctor_core::error::AuditError;
use proctor_core::traits::{AuditRecord, AuditSink};

/// The log line for one audit record: `{timestamp}: Added question -> {body}`.
pub fn format_record(record: &AuditRecord) -> String {
    format!(
        "{}: Added question -> {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
        record.body
    )
}

/// Durable append-only sink over a single log file.
///
/// The file is opened per append and created on first use, so a bank's log
/// target only materializes once a question is actually added.
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| AuditError::Append {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", format_record(record)).map_err(|source| AuditError::Append {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), body = %record.body, "audit record appended");
        Ok(())
    }
}

/// In-memory sink recording formatted lines, for tests.
#[derive(Default)]
pub struct MemoryAuditSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines recorded so far, in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.lines.lock().unwrap().push(format_record(record));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Local;
    use proctor_core::model::{Question, QuestionBank};

    fn record(body: &str) -> AuditRecord {
        AuditRecord {
            timestamp: Local::now(),
            body: body.to_string(),
        }
    }

    #[test]
    fn file_sink_appends_formatted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("practice.log");
        let sink = FileAuditSink::new(&path);

        sink.append(&record("Stack is a data structure?")).unwrap();
        sink.append(&record("Which is an even number?")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(": Added question -> Stack is a data structure?"));
        assert!(lines[1].contains(": Added question -> Which is an even number?"));
    }

    #[test]
    fn file_sink_reports_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("final.log");
        let sink = FileAuditSink::new(&path);

        let err = sink.append(&record("Doomed?")).unwrap_err();
        assert!(err.to_string().contains("final.log"));
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemoryAuditSink::new();
        assert!(sink.is_empty());

        sink.append(&record("First?")).unwrap();
        sink.append(&record("Second?")).unwrap();

        let lines = sink.lines();
        assert_eq!(sink.len(), 2);
        assert!(lines[0].ends_with("Added question -> First?"));
        assert!(lines[1].ends_with("Added question -> Second?"));
    }

    #[test]
    fn bank_construction_writes_through_the_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final.log");

        let mut bank = QuestionBank::new(Arc::new(FileAuditSink::new(&path)));
        bank.add(Question::true_false("Is .NET a framework?", 2, true))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Added question -> Is .NET a framework?"));
    }
}
