use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Difficulty, Persona, Provider, QuestionType};

/// Inbound parameters for one generation. The API key is optional on the
/// wire; when absent, the handler falls back to the server-configured key
/// for the chosen provider.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionSetRequest {
    pub provider: Provider,

    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,

    #[serde(default)]
    pub api_key: Option<String>,

    pub persona: Persona,

    #[validate(length(min = 1, message = "please enter a topic"))]
    pub topic: String,

    pub question_type: QuestionType,

    pub difficulty: Difficulty,

    #[validate(range(min = 1, max = 5, message = "question count must be between 1 and 5"))]
    pub num_questions: u8,
}
