use serde::Serialize;

use crate::models::domain::question::{Question, QuestionType};

/// The validated result of one generation request. Constructed only by the
/// coercion pipeline or test fixtures; every question's variant matches
/// `question_type` by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    pub persona: String,
    pub topic: String,
    pub difficulty: String,
    pub question_type: QuestionType,
    pub questions: Vec<Question>,
}
