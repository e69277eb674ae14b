use crate::models::domain::QuestionSet;

/// Renders a question set as the flat text report offered for download.
/// Deterministic: the same set always yields the same bytes.
pub fn format_report(set: &QuestionSet) -> String {
    let mut lines = vec![
        format!("Persona: {}", set.persona),
        format!("Topic: {}", set.topic),
        format!("Difficulty: {}", set.difficulty),
        format!("Question type: {}", set.question_type),
        String::new(),
    ];

    for (index, question) in set.questions.iter().enumerate() {
        lines.push(format!("Q{}. {}", index + 1, question.question()));
        if let Some(options) = question.options() {
            for option in options {
                lines.push(format!(" - {option}"));
            }
        }
        lines.push(format!("Answer: {}", question.answer()));
        if let Some(explanation) = question.explanation() {
            lines.push(format!("Why: {explanation}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// File name for the report download: `study-buddy-<topic>.txt` with spaces
/// replaced by hyphens.
pub fn report_file_name(set: &QuestionSet) -> String {
    format!("study-buddy-{}.txt", set.topic.replace(' ', "-"))
}
