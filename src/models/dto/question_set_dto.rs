use once_cell::sync::Lazy;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::domain::QuestionType;

/// Wire shape of one question as the model is asked to emit it. `options`
/// is optional here because fill-blank questions carry none; whether it is
/// required is decided by the set-level `question_type` during coercion.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionDto {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Wire shape of a question set. This type is the single source of truth
/// for the structural contract: its derived JSON schema is sent to the
/// backend as the `response_format` directive, and the coercion pipeline
/// validates replies against the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionSetDto {
    pub persona: String,
    pub topic: String,
    pub difficulty: String,
    pub question_type: QuestionType,
    pub questions: Vec<QuestionDto>,
}

static QUESTION_SET_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::to_value(schema_for!(QuestionSetDto))
        .expect("question set schema serializes to JSON")
});

/// JSON schema for [`QuestionSetDto`], as handed to the backend.
pub fn question_set_schema() -> &'static Value {
    &QUESTION_SET_SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_an_object_with_required_fields() {
        let schema = question_set_schema();

        let required = schema["required"]
            .as_array()
            .expect("schema lists required fields");
        let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();

        for field in ["persona", "topic", "difficulty", "question_type", "questions"] {
            assert!(required.contains(&field), "missing required field {field}");
        }
    }

    #[test]
    fn schema_constrains_question_type_to_known_variants() {
        let rendered = question_set_schema().to_string();

        assert!(rendered.contains("multiple_choice"));
        assert!(rendered.contains("fill_blank"));
    }

    #[test]
    fn dto_round_trips_through_json() {
        let dto = QuestionSetDto {
            persona: "Concise explainer".to_string(),
            topic: "Photosynthesis".to_string(),
            difficulty: "easy".to_string(),
            question_type: QuestionType::MultipleChoice,
            questions: vec![QuestionDto {
                question: "Where does the light reaction occur?".to_string(),
                options: Some(vec![
                    "Thylakoid membrane".to_string(),
                    "Stroma".to_string(),
                    "Nucleus".to_string(),
                ]),
                answer: "Thylakoid membrane".to_string(),
                explanation: None,
            }],
        };

        let json = serde_json::to_string(&dto).unwrap();
        let parsed: QuestionSetDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto, parsed);
    }

    #[test]
    fn dto_omits_absent_optional_fields() {
        let dto = QuestionDto {
            question: "Plants absorb ____ from the air.".to_string(),
            options: None,
            answer: "carbon dioxide".to_string(),
            explanation: None,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("options").is_none());
        assert!(value.get("explanation").is_none());
    }
}
