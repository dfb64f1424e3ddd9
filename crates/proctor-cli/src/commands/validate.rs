//! The `proctor validate` command.

use std::path::PathBuf;

use anyhow::Result;

use proctor_core::parser;

pub fn execute(questions: PathBuf) -> Result<()> {
    let sets = if questions.is_dir() {
        parser::load_question_directory(&questions)?
    } else {
        vec![parser::parse_question_set(&questions)?]
    };
    anyhow::ensure!(
        !sets.is_empty(),
        "no question sets found in {}",
        questions.display()
    );

    let mut total_warnings = 0usize;
    for set in &sets {
        println!(
            "{}: {} questions, {} total marks, {} minute limit",
            set.name,
            set.questions.len(),
            set.total_marks(),
            set.time_limit_mins
        );
        for warning in parser::validate_question_set(set) {
            total_warnings += 1;
            match &warning.question {
                Some(body) => println!("  warning: {} ({})", warning.message, body),
                None => println!("  warning: {}", warning.message),
            }
        }
    }

    if total_warnings == 0 {
        println!("All question sets valid");
    } else {
        println!("{total_warnings} warning(s) found");
    }
    Ok(())
}
