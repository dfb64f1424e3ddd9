//! The exam engine.
//!
//! An [`Exam`] owns a question bank, runs the question-by-question
//! interaction loop against the injected screen and answer source, grades
//! each response, and reports the final score. `conduct` consumes the exam:
//! a session runs once and is then discarded.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::grading;
use crate::model::QuestionBank;
use crate::traits::{AnswerSource, ExamScreen};

const RULE: &str = "========================";

/// The closed set of exam variants.
///
/// Both variants share identical grading and scoring; Practice additionally
/// reveals the correct answers after every question as a learning aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Practice,
    Final,
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Practice => write!(f, "Practice"),
            ExamKind::Final => write!(f, "Final"),
        }
    }
}

impl FromStr for ExamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "practice" => Ok(ExamKind::Practice),
            "final" => Ok(ExamKind::Final),
            other => Err(format!("unknown exam kind: {other}")),
        }
    }
}

/// Final outcome of a conducted exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSummary {
    /// Marks earned: the sum of `marks` over the correctly-answered
    /// questions.
    pub score: u32,
    /// The sum of marks over all questions, fixed at exam construction.
    pub total_marks: u32,
}

impl ExamSummary {
    pub fn is_full_marks(&self) -> bool {
        self.score == self.total_marks
    }
}

/// A single exam session over an owned question bank.
pub struct Exam {
    kind: ExamKind,
    time_limit_mins: u32,
    questions: QuestionBank,
    score: u32,
    total_marks: u32,
}

impl Exam {
    /// Build an exam over `questions`. `total_marks` is derived here, once,
    /// and never changes. `time_limit_mins` is informational only; nothing
    /// enforces it against the clock.
    pub fn new(kind: ExamKind, time_limit_mins: u32, questions: QuestionBank) -> Self {
        let total_marks = questions.questions().iter().map(|q| q.marks()).sum();
        Self {
            kind,
            time_limit_mins,
            questions,
            score: 0,
            total_marks,
        }
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn time_limit_mins(&self) -> u32 {
        self.time_limit_mins
    }

    pub fn total_marks(&self) -> u32 {
        self.total_marks
    }

    /// Run the exam: render each question in bank order, collect one raw
    /// answer line, grade it, and accumulate score; then report the result
    /// through the screen. Consumes the exam — a session cannot be re-run.
    pub fn conduct(
        mut self,
        screen: &mut dyn ExamScreen,
        answers: &mut dyn AnswerSource,
    ) -> Result<ExamSummary> {
        screen.show(&format!("==== {} Exam ====", self.kind));
        tracing::info!(kind = %self.kind, questions = self.questions.len(), "exam started");

        for (index, question) in self.questions.questions().iter().enumerate() {
            screen.show(&question.render());
            screen.prompt("Your Answer (comma for multiple): ");
            let raw = answers.read_line()?;

            let correct = grading::check_answer(question, &raw);
            if correct {
                self.score += question.marks();
            }
            tracing::debug!(question = index + 1, correct, "answer graded");

            if self.kind == ExamKind::Practice {
                screen.reveal("Correct Answer(s):");
                for answer in question.answers().all().iter().filter(|a| a.is_correct) {
                    screen.reveal(&format!("- {}", answer.text));
                }
            }
            screen.show("");
        }

        let summary = ExamSummary {
            score: self.score,
            total_marks: self.total_marks,
        };
        self.print_result(screen, summary);
        tracing::info!(score = summary.score, total = summary.total_marks, "exam finished");
        Ok(summary)
    }

    fn print_result(&self, screen: &mut dyn ExamScreen, summary: ExamSummary) {
        screen.show(RULE);
        screen.show("====== Exam Result =====");
        screen.show(RULE);
        screen.show(&format!("Your mark is: {} marks.", summary.score));
        if summary.is_full_marks() {
            screen.show("Congratulations! Full Mark!");
        }
    }
}
