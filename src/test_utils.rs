use serde_json::{json, Value};

use crate::models::domain::{Question, QuestionSet, QuestionType};

pub mod fixtures {
    use super::*;

    /// A validated two-question multiple-choice set.
    pub fn sample_question_set() -> QuestionSet {
        QuestionSet {
            persona: "Friendly mentor".to_string(),
            topic: "Photosynthesis".to_string(),
            difficulty: "easy".to_string(),
            question_type: QuestionType::MultipleChoice,
            questions: vec![
                Question::MultipleChoice {
                    question: "What gas do plants release during photosynthesis?".to_string(),
                    options: vec![
                        "Oxygen".to_string(),
                        "Nitrogen".to_string(),
                        "Methane".to_string(),
                    ],
                    answer: "Oxygen".to_string(),
                    explanation: Some("A byproduct of the light reactions.".to_string()),
                },
                Question::MultipleChoice {
                    question: "Where does photosynthesis occur?".to_string(),
                    options: vec!["Chloroplast".to_string(), "Mitochondrion".to_string()],
                    answer: "Chloroplast".to_string(),
                    explanation: None,
                },
            ],
        }
    }

    /// The same set as a raw mapping, the way a JSON-mode backend returns it.
    pub fn multiple_choice_mapping() -> Value {
        json!({
            "persona": "Friendly mentor",
            "topic": "Photosynthesis",
            "difficulty": "easy",
            "question_type": "multiple_choice",
            "questions": [
                {
                    "question": "What gas do plants release during photosynthesis?",
                    "options": ["Oxygen", "Nitrogen", "Methane"],
                    "answer": "Oxygen",
                    "explanation": "A byproduct of the light reactions."
                },
                {
                    "question": "Where does photosynthesis occur?",
                    "options": ["Chloroplast", "Mitochondrion"],
                    "answer": "Chloroplast"
                }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_set_matches_its_mapping() {
        let set = sample_question_set();
        let mapping = multiple_choice_mapping();

        assert_eq!(serde_json::to_value(&set).unwrap(), mapping);
    }

    #[test]
    fn test_fixture_set_is_internally_consistent() {
        let set = sample_question_set();

        assert_eq!(set.questions.len(), 2);
        assert!(set
            .questions
            .iter()
            .all(|q| q.options().is_some_and(|o| o.len() >= 2)));
    }
}
