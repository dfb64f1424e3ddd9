//! Core data model: answers, questions, and the question bank.
//!
//! Questions come in three closed variants (true/false, choose-one,
//! choose-all) that differ only in how their answer list is derived at
//! construction. Answers and questions are immutable once built; the bank
//! grows append-only and emits one audit record per added question.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Local;

use crate::error::AuditError;
use crate::traits::{AuditRecord, AuditSink};

const RULE: &str = "========================";

/// A single answer option with its correctness flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// The option text shown to the respondent.
    pub text: String,
    /// Whether this option is part of the correct answer set.
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// Ordered, growable container of answers owned by one question.
///
/// Insertion order is the canonical 1-based index used for grading and
/// display. No removal, no reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerList {
    answers: Vec<Answer>,
}

impl AnswerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an answer to the end of the list.
    pub fn add(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// The full ordered view.
    pub fn all(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// The closed set of question variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    TrueFalse,
    ChooseOne,
    ChooseAll,
}

impl QuestionKind {
    /// The header label shown when the question is rendered.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "True/False",
            QuestionKind::ChooseOne => "Choose One",
            QuestionKind::ChooseAll => "Choose All",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "true-false" | "true/false" | "truefalse" => Ok(QuestionKind::TrueFalse),
            "choose-one" | "chooseone" => Ok(QuestionKind::ChooseOne),
            "choose-all" | "chooseall" => Ok(QuestionKind::ChooseAll),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// One exam question: a prompt, a mark value, and its derived answer list.
///
/// Constructed through one of the variant constructors; immutable afterwards.
/// None of the constructors range-check supplied indexes — an out-of-range
/// index simply flags no answer. Use
/// [`crate::parser::validate_question_set`] to surface such sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    body: String,
    marks: u32,
    answers: AnswerList,
}

impl Question {
    /// A true/false question: two fixed answers, exactly one correct.
    pub fn true_false(body: impl Into<String>, marks: u32, correct: bool) -> Self {
        let mut answers = AnswerList::new();
        answers.add(Answer::new("True", correct));
        answers.add(Answer::new("False", !correct));
        Self {
            kind: QuestionKind::TrueFalse,
            body: body.into(),
            marks,
            answers,
        }
    }

    /// A single-choice question: one answer per option, only `correct_index`
    /// (0-based) flagged correct.
    pub fn choose_one<I, S>(body: impl Into<String>, marks: u32, options: I, correct_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut answers = AnswerList::new();
        for (i, option) in options.into_iter().enumerate() {
            answers.add(Answer::new(option, i == correct_index));
        }
        Self {
            kind: QuestionKind::ChooseOne,
            body: body.into(),
            marks,
            answers,
        }
    }

    /// A multi-select question: one answer per option, flagged correct iff
    /// its 0-based position appears in `correct_indexes`. Zero, one, or many
    /// options may be correct.
    pub fn choose_all<I, S>(
        body: impl Into<String>,
        marks: u32,
        options: I,
        correct_indexes: &[usize],
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut answers = AnswerList::new();
        for (i, option) in options.into_iter().enumerate() {
            answers.add(Answer::new(option, correct_indexes.contains(&i)));
        }
        Self {
            kind: QuestionKind::ChooseAll,
            body: body.into(),
            marks,
            answers,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn marks(&self) -> u32 {
        self.marks
    }

    pub fn answers(&self) -> &AnswerList {
        &self.answers
    }

    /// Deterministic textual form: header with the variant label, body, and
    /// marks, then each answer prefixed by its 1-based position. Never
    /// reveals which answers are correct.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("[{}] {} ({} marks)", self.kind, self.body, self.marks));
        out.push('\n');
        out.push_str(RULE);
        for (i, answer) in self.answers.all().iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{}) {}", i + 1, answer.text));
        }
        out
    }
}

/// Ordered, append-only collection of questions.
///
/// Every append emits one [`AuditRecord`] to the injected sink before the
/// question is stored. A sink failure propagates to the caller and leaves
/// the bank unchanged; this is fatal to question-set construction, not to a
/// running exam.
pub struct QuestionBank {
    questions: Vec<Question>,
    audit: Arc<dyn AuditSink>,
}

impl QuestionBank {
    pub fn new(audit: Arc<dyn AuditSink>) -> Self {
        Self {
            questions: Vec::new(),
            audit,
        }
    }

    /// Append a question, emitting its audit record.
    pub fn add(&mut self, question: Question) -> Result<(), AuditError> {
        let record = AuditRecord {
            timestamp: Local::now(),
            body: question.body().to_string(),
        };
        self.audit.append(&record)?;
        tracing::debug!(body = %record.body, "question added to bank");
        self.questions.push(question);
        Ok(())
    }

    /// The full ordered view.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
