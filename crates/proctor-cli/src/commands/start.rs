//! The `proctor start` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use proctor_audit::FileAuditSink;
use proctor_console::{LineSource, TerminalScreen};
use proctor_core::engine::{Exam, ExamKind};
use proctor_core::model::QuestionBank;
use proctor_core::parser;
use proctor_core::traits::{AnswerSource, ExamScreen};

use crate::sets;

const RULE: &str = "========================";

/// A respondent's identity, captured before the session starts.
struct Student {
    name: String,
    id: u32,
}

pub fn execute(questions: Option<PathBuf>, exam: Option<String>, log_dir: PathBuf) -> Result<()> {
    let mut screen = TerminalScreen::stdout();
    let mut input = LineSource::stdin();

    let student = capture_student(&mut screen, &mut input)?;
    print_student_info(&mut screen, &student);

    let kind = match exam {
        Some(flag) => flag
            .parse::<ExamKind>()
            .map_err(|e| anyhow::anyhow!("invalid --exam value: {e}"))?,
        None => choose_exam_kind(&mut screen, &mut input)?,
    };

    let set = match &questions {
        Some(path) => parser::parse_question_set(path)?,
        None => sets::builtin_for(kind),
    };
    tracing::debug!(set = %set.name, kind = %kind, "question set selected");

    let log_name = match kind {
        ExamKind::Practice => "practice.log",
        ExamKind::Final => "final.log",
    };
    let sink = Arc::new(FileAuditSink::new(log_dir.join(log_name)));

    let time_limit_mins = set.time_limit_mins;
    let mut bank = QuestionBank::new(sink);
    for question in set.questions {
        bank.add(question)
            .context("failed to record question in audit log")?;
    }

    let session = Exam::new(kind, time_limit_mins, bank);
    session.conduct(&mut screen, &mut input)?;
    Ok(())
}

fn capture_student(
    screen: &mut dyn ExamScreen,
    input: &mut dyn AnswerSource,
) -> Result<Student> {
    screen.show("Enter your name: ");
    let name = input.read_line()?;

    screen.show("Enter your ID: ");
    let raw_id = input.read_line()?;
    let id = raw_id
        .trim()
        .parse::<u32>()
        .with_context(|| format!("student ID must be numeric, got '{}'", raw_id.trim()))?;

    Ok(Student { name, id })
}

fn print_student_info(screen: &mut dyn ExamScreen, student: &Student) {
    screen.show(RULE);
    screen.show("===== Student Info =====");
    screen.show(RULE);
    screen.show(&format!("Name: {}", student.name));
    screen.show(&format!("ID: {}", student.id));
    screen.show(RULE);
    screen.show("");
}

fn choose_exam_kind(
    screen: &mut dyn ExamScreen,
    input: &mut dyn AnswerSource,
) -> Result<ExamKind> {
    screen.show("Choose Exam Type: 1) Practice  2) Final");
    let raw = input.read_line()?;
    match raw.trim() {
        "1" => Ok(ExamKind::Practice),
        "2" => Ok(ExamKind::Final),
        other => other
            .parse::<ExamKind>()
            .map_err(|_| anyhow::anyhow!("invalid exam choice: '{other}'")),
    }
}
