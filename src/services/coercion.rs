use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionSet, QuestionType},
    services::agent_service::AgentResponse,
};

const MIN_OPTIONS: usize = 2;

/// Total, side-effect-free mapping from whatever an agent returned to a
/// validated [`QuestionSet`]. Never panics and performs no I/O; every
/// failure is one of the taxonomy errors.
pub fn coerce(response: AgentResponse) -> AppResult<QuestionSet> {
    match response {
        AgentResponse::Structured(set) => Ok(set),
        AgentResponse::Fields(dto) => {
            let value = serde_json::to_value(&dto)
                .map_err(|err| AppError::InternalError(err.to_string()))?;
            question_set_from_value(&value)
        }
        AgentResponse::Json(value) => match &value {
            Value::Object(_) => question_set_from_value(&value),
            other => Err(AppError::MalformedResponse(format!(
                "agent returned {} where a question set object was expected",
                json_type_name(other)
            ))),
        },
    }
}

/// Validates a raw JSON object against the question-set contract and builds
/// the domain value. All constraint violations are accumulated so the error
/// names every failing field path, not just the first.
fn question_set_from_value(value: &Value) -> AppResult<QuestionSet> {
    let object = value.as_object().ok_or_else(|| {
        AppError::MalformedResponse(format!(
            "agent returned {} where a question set object was expected",
            json_type_name(value)
        ))
    })?;

    let mut errors = Vec::new();

    let persona = required_string(object, "persona", &mut errors);
    let topic = required_string(object, "topic", &mut errors);
    let difficulty = required_string(object, "difficulty", &mut errors);
    let question_type = required_question_type(object, &mut errors);
    let questions = parse_questions(object, question_type, &mut errors);

    if !errors.is_empty() {
        return Err(AppError::SchemaValidation(errors.join("; ")));
    }

    // All fields were collected without diagnostics, so every Option is
    // populated here.
    match (persona, topic, difficulty, question_type, questions) {
        (Some(persona), Some(topic), Some(difficulty), Some(question_type), Some(questions)) => {
            Ok(QuestionSet {
                persona,
                topic,
                difficulty,
                question_type,
                questions,
            })
        }
        _ => Err(AppError::InternalError(
            "question set validation produced no diagnostics but left fields unset".to_string(),
        )),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            errors.push(format!(
                "{field}: expected a string, found {}",
                json_type_name(other)
            ));
            None
        }
        None => {
            errors.push(format!("{field}: required field is missing"));
            None
        }
    }
}

fn required_question_type(
    object: &Map<String, Value>,
    errors: &mut Vec<String>,
) -> Option<QuestionType> {
    match object.get("question_type") {
        Some(value) => match serde_json::from_value::<QuestionType>(value.clone()) {
            Ok(question_type) => Some(question_type),
            Err(_) => {
                errors.push(format!(
                    "question_type: expected one of multiple_choice, fill_blank, found {value}"
                ));
                None
            }
        },
        None => {
            errors.push("question_type: required field is missing".to_string());
            None
        }
    }
}

/// Walks `questions`, validating every element even after the first failure
/// so the diagnostics cover the whole set. When the set-level discriminant
/// itself is invalid the per-variant checks are skipped, but structural
/// checks on the common fields still run.
fn parse_questions(
    object: &Map<String, Value>,
    question_type: Option<QuestionType>,
    errors: &mut Vec<String>,
) -> Option<Vec<Question>> {
    let entries = match object.get("questions") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            errors.push(format!(
                "questions: expected an array, found {}",
                json_type_name(other)
            ));
            return None;
        }
        None => {
            errors.push("questions: required field is missing".to_string());
            return None;
        }
    };

    let mut questions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(question) = parse_question(entry, index, question_type, errors) {
            questions.push(question);
        }
    }

    (questions.len() == entries.len()).then_some(questions)
}

fn parse_question(
    entry: &Value,
    index: usize,
    question_type: Option<QuestionType>,
    errors: &mut Vec<String>,
) -> Option<Question> {
    let object = match entry.as_object() {
        Some(object) => object,
        None => {
            errors.push(format!(
                "questions[{index}]: expected an object, found {}",
                json_type_name(entry)
            ));
            return None;
        }
    };

    let question = required_question_string(object, index, "question", errors);
    let answer = required_question_string(object, index, "answer", errors);
    let explanation = optional_question_string(object, index, "explanation", errors);

    match question_type? {
        QuestionType::MultipleChoice => {
            let options = parse_options(object, index, errors)?;
            Some(Question::MultipleChoice {
                question: question?,
                options,
                answer: answer?,
                explanation: explanation?,
            })
        }
        // A stray `options` field on a fill-blank question is ignored
        // rather than rejected; the set-level discriminant wins.
        QuestionType::FillBlank => Some(Question::FillBlank {
            question: question?,
            answer: answer?,
            explanation: explanation?,
        }),
    }
}

fn parse_options(
    object: &Map<String, Value>,
    index: usize,
    errors: &mut Vec<String>,
) -> Option<Vec<String>> {
    let entries = match object.get("options") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            errors.push(format!(
                "questions[{index}].options: expected an array, found {}",
                json_type_name(other)
            ));
            return None;
        }
        None => {
            errors.push(format!(
                "questions[{index}].options: required field is missing"
            ));
            return None;
        }
    };

    let mut options = Vec::with_capacity(entries.len());
    for (option_index, option) in entries.iter().enumerate() {
        match option {
            Value::String(text) => options.push(text.clone()),
            other => errors.push(format!(
                "questions[{index}].options[{option_index}]: expected a string, found {}",
                json_type_name(other)
            )),
        }
    }

    if options.len() != entries.len() {
        return None;
    }
    if options.len() < MIN_OPTIONS {
        errors.push(format!(
            "questions[{index}].options: must contain at least {MIN_OPTIONS} entries, found {}",
            options.len()
        ));
        return None;
    }

    Some(options)
}

fn required_question_string(
    object: &Map<String, Value>,
    index: usize,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            errors.push(format!(
                "questions[{index}].{field}: expected a string, found {}",
                json_type_name(other)
            ));
            None
        }
        None => {
            errors.push(format!("questions[{index}].{field}: required field is missing"));
            None
        }
    }
}

fn optional_question_string(
    object: &Map<String, Value>,
    index: usize,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<Option<String>> {
    match object.get(field) {
        Some(Value::String(text)) => Some(Some(text.clone())),
        Some(Value::Null) | None => Some(None),
        Some(other) => {
            errors.push(format!(
                "questions[{index}].{field}: expected a string, found {}",
                json_type_name(other)
            ));
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
