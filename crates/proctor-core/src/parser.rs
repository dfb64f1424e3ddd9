//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionKind};

/// A named, ordered set of questions ready to be handed to a bank.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    pub name: String,
    /// Informational time limit in minutes; never enforced.
    pub time_limit_mins: u32,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks()).sum()
    }
}

/// Intermediate TOML structure for parsing question-set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlSetHeader {
    name: String,
    #[serde(default = "default_time_limit")]
    time_limit_mins: u32,
}

fn default_time_limit() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    kind: String,
    body: String,
    marks: u32,
    /// True/false only.
    #[serde(default)]
    correct: Option<bool>,
    /// Choose-one and choose-all.
    #[serde(default)]
    options: Vec<String>,
    /// Choose-one only; 0-based.
    #[serde(default)]
    correct_index: Option<usize>,
    /// Choose-all only; 0-based.
    #[serde(default)]
    correct_indexes: Vec<usize>,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}", e))?;

            let question = match kind {
                QuestionKind::TrueFalse => {
                    let correct = q.correct.ok_or_else(|| {
                        anyhow::anyhow!("true/false question '{}' is missing `correct`", q.body)
                    })?;
                    Question::true_false(q.body, q.marks, correct)
                }
                QuestionKind::ChooseOne => {
                    let correct_index = q.correct_index.ok_or_else(|| {
                        anyhow::anyhow!(
                            "choose-one question '{}' is missing `correct_index`",
                            q.body
                        )
                    })?;
                    Question::choose_one(q.body, q.marks, q.options, correct_index)
                }
                QuestionKind::ChooseAll => {
                    Question::choose_all(q.body, q.marks, q.options, &q.correct_indexes)
                }
            };
            Ok(question)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSet {
        name: parsed.question_set.name,
        time_limit_mins: parsed.question_set.time_limit_mins,
        questions,
    })
}

/// Recursively load all `.toml` question-set files from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from question-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending question's body (if applicable).
    pub question: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring issues.
///
/// Construction is deliberately permissive (no range checks, no
/// at-least-one-correct requirement); this pass surfaces the sets that
/// would be unanswerable or score nothing.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set has no questions".into(),
        });
    }

    for question in &set.questions {
        if question.marks() == 0 {
            warnings.push(ValidationWarning {
                question: Some(question.body().to_string()),
                message: "marks is 0, a correct answer scores nothing".into(),
            });
        }

        if question.body().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(question.body().to_string()),
                message: "question body is empty".into(),
            });
        }

        if question.answers().all().iter().all(|a| !a.is_correct) {
            warnings.push(ValidationWarning {
                question: Some(question.body().to_string()),
                message: "no answer is flagged correct, the question is unanswerable".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::grading;

    const VALID_TOML: &str = r#"
[question_set]
name = "Programming Basics"
time_limit_mins = 45

[[questions]]
kind = "true-false"
body = "Stack is a data structure?"
marks = 2
correct = true

[[questions]]
kind = "choose-one"
body = "Which is an even number?"
marks = 2
options = ["3", "6", "9"]
correct_index = 1

[[questions]]
kind = "choose-all"
body = "Which of the following are prime numbers?"
marks = 3
options = ["2", "4", "5", "6"]
correct_indexes = [0, 2]
"#;

    #[test]
    fn parse_valid_toml() {
        let set = parse_question_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.name, "Programming Basics");
        assert_eq!(set.time_limit_mins, 45);
        assert_eq!(set.questions.len(), 3);
        assert_eq!(set.total_marks(), 7);

        assert_eq!(set.questions[0].kind(), QuestionKind::TrueFalse);
        assert_eq!(grading::correct_indexes(&set.questions[0]), vec![1]);
        assert_eq!(set.questions[1].kind(), QuestionKind::ChooseOne);
        assert_eq!(grading::correct_indexes(&set.questions[1]), vec![2]);
        assert_eq!(set.questions[2].kind(), QuestionKind::ChooseAll);
        assert_eq!(grading::correct_indexes(&set.questions[2]), vec![1, 3]);
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[question_set]
name = "Minimal"

[[questions]]
kind = "true-false"
body = "T?"
marks = 1
correct = false
"#;
        let set = parse_question_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.time_limit_mins, 30);
        assert_eq!(set.questions.len(), 1);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let toml = r#"
[question_set]
name = "Bad"

[[questions]]
kind = "essay"
body = "Discuss."
marks = 5
"#;
        let result = parse_question_set_str(toml, &PathBuf::from("test.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_true_false_without_correct() {
        let toml = r#"
[question_set]
name = "Bad"

[[questions]]
kind = "true-false"
body = "T?"
marks = 1
"#;
        let err = parse_question_set_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(err.to_string().contains("missing `correct`"));
    }

    #[test]
    fn parse_rejects_choose_one_without_index() {
        let toml = r#"
[question_set]
name = "Bad"

[[questions]]
kind = "choose-one"
body = "Pick"
marks = 1
options = ["a", "b"]
"#;
        let err = parse_question_set_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(err.to_string().contains("missing `correct_index`"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_question_set_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_unanswerable_and_zero_mark_questions() {
        let toml = r#"
[question_set]
name = "Sloppy"

[[questions]]
kind = "choose-all"
body = "Pick none"
marks = 0
options = ["a", "b"]
correct_indexes = []

[[questions]]
kind = "choose-one"
body = "Out of range"
marks = 2
options = ["a", "b"]
correct_index = 9
"#;
        let set = parse_question_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_question_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("marks is 0")));
        assert_eq!(
            warnings
                .iter()
                .filter(|w| w.message.contains("unanswerable"))
                .count(),
            2
        );
    }

    #[test]
    fn validate_flags_empty_set() {
        let toml = r#"
[question_set]
name = "Empty"
"#;
        let set = parse_question_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_question_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }

    #[test]
    fn valid_set_has_no_warnings() {
        let set = parse_question_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_question_set(&set).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("basics.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sets = load_question_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "Programming Basics");
    }

    #[test]
    fn load_directory_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("basics.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        assert!(load_question_directory(&file_path).is_err());
    }
}
