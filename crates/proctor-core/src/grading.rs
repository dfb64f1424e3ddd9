//! Answer grading.
//!
//! A raw answer line is a comma-separated list of 1-based answer positions.
//! Grading never fails: malformed, empty, or out-of-range input simply
//! grades as incorrect.

use crate::model::Question;

/// The 1-based positions, in answer-storage order, of every answer flagged
/// correct. Ascending by construction (single forward scan).
pub fn correct_indexes(question: &Question) -> Vec<usize> {
    question
        .answers()
        .all()
        .iter()
        .enumerate()
        .filter(|(_, answer)| answer.is_correct)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Grade one raw answer line against a question's correct index set.
///
/// Tokens are split on commas (empty tokens discarded, the rest trimmed)
/// and compared against the correct indexes with both sides sorted, so any
/// permutation of the correct positions is accepted. The comparison is on
/// the string forms under ordinary string ordering, which means "01" is not
/// the same token as "1".
pub fn check_answer(question: &Question, raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }

    let mut tokens: Vec<String> = raw
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| token.trim().to_string())
        .collect();

    let mut correct: Vec<String> = correct_indexes(question)
        .iter()
        .map(usize::to_string)
        .collect();

    tokens.sort();
    correct.sort();

    tokens.len() == correct.len() && tokens.join(",") == correct.join(",")
}
