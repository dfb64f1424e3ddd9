//! Built-in question sets.

use proctor_core::engine::ExamKind;
use proctor_core::model::Question;
use proctor_core::parser::QuestionSet;

/// The easier set used for practice sessions.
pub fn practice_set() -> QuestionSet {
    QuestionSet {
        name: "Practice Questions".into(),
        time_limit_mins: 30,
        questions: vec![
            Question::true_false("Stack is a data structure?", 2, true),
            Question::choose_one("Which is an even number?", 2, ["3", "6", "9"], 1),
            Question::true_false("Is Django a frontend framework?", 2, false),
        ],
    }
}

/// The longer, harder set used for final sessions.
pub fn final_set() -> QuestionSet {
    QuestionSet {
        name: "Final Questions".into(),
        time_limit_mins: 60,
        questions: vec![
            Question::choose_all(
                "Which of the following are prime numbers?",
                3,
                ["2", "4", "5", "6"],
                &[0, 2],
            ),
            Question::choose_one(
                "Which of these is NOT an STL container?",
                3,
                ["Vector", "Map", "Elephant"],
                2,
            ),
            Question::choose_one(
                "Which of these is a backend framework?",
                2,
                ["React", "Angular", "Django"],
                2,
            ),
            Question::choose_all(
                "Which are mobile frameworks?",
                3,
                ["Flutter", "React Native", "Angular", "Xamarin"],
                &[0, 1, 3],
            ),
            Question::true_false("Is .NET a framework?", 2, true),
        ],
    }
}

/// The built-in set conducted for a given exam variant.
pub fn builtin_for(kind: ExamKind) -> QuestionSet {
    match kind {
        ExamKind::Practice => practice_set(),
        ExamKind::Final => final_set(),
    }
}

/// Every built-in set, for listings.
pub fn all_builtin() -> Vec<QuestionSet> {
    vec![practice_set(), final_set()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proctor_core::grading;

    #[test]
    fn practice_set_shape() {
        let set = practice_set();
        assert_eq!(set.questions.len(), 3);
        assert_eq!(set.total_marks(), 6);
        assert_eq!(set.time_limit_mins, 30);
    }

    #[test]
    fn final_set_shape() {
        let set = final_set();
        assert_eq!(set.questions.len(), 5);
        assert_eq!(set.total_marks(), 13);
        assert_eq!(set.time_limit_mins, 60);
    }

    #[test]
    fn final_set_correct_indexes() {
        let set = final_set();
        let indexes: Vec<Vec<usize>> = set
            .questions
            .iter()
            .map(grading::correct_indexes)
            .collect();
        assert_eq!(
            indexes,
            vec![vec![1, 3], vec![3], vec![3], vec![1, 2, 4], vec![1]]
        );
    }

    #[test]
    fn builtin_for_matches_variant() {
        assert_eq!(builtin_for(ExamKind::Practice).name, "Practice Questions");
        assert_eq!(builtin_for(ExamKind::Final).name, "Final Questions");
    }
}
