use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wire-level discriminant carried on the enclosing question set. The
/// variant of every question in a set is selected by this value, never by
/// sniffing which fields happen to be present on the question itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    FillBlank,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::FillBlank => write!(f, "fill_blank"),
        }
    }
}

/// A single validated study question.
///
/// Deliberately not `Deserialize`: untyped input reaches this type only
/// through the coercion pipeline, which picks the variant from the set's
/// `question_type` discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Question {
    MultipleChoice {
        question: String,
        options: Vec<String>,
        answer: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    FillBlank {
        question: String,
        answer: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

impl Question {
    pub fn question(&self) -> &str {
        match self {
            Question::MultipleChoice { question, .. } => question,
            Question::FillBlank { question, .. } => question,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Question::MultipleChoice { answer, .. } => answer,
            Question::FillBlank { answer, .. } => answer,
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            Question::MultipleChoice { explanation, .. } => explanation.as_deref(),
            Question::FillBlank { explanation, .. } => explanation.as_deref(),
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::MultipleChoice { options, .. } => Some(options),
            Question::FillBlank { .. } => None,
        }
    }

    /// Whether `candidate` is the correct option, compared the way the
    /// rendering layer does: trimmed and case-insensitive. This is a soft
    /// convention, not a validation invariant.
    pub fn is_correct_option(&self, candidate: &str) -> bool {
        candidate.trim().eq_ignore_ascii_case(self.answer().trim())
    }
}
