use crate::models::domain::QuestionType;

/// System instruction sent alongside every generation. Pure function of the
/// persona label.
pub fn build_system_instruction(persona: &str) -> String {
    format!(
        "You are {persona}, an adaptive study buddy. \
         Generate concise, correct educational content. \
         Respond using the provided structured schema; no markdown or prose."
    )
}

/// User prompt for one generation. Pure function of its inputs: identical
/// parameters must produce byte-identical text.
pub fn build_user_prompt(
    topic: &str,
    question_type: QuestionType,
    difficulty: &str,
    num_questions: u8,
) -> String {
    format!(
        "Create study questions following the provided schema. \
         - question_type: {question_type}\n\
         - topic: {topic}\n\
         - number_of_questions: {num_questions}\n\
         - difficulty: {difficulty}\n\
         - Keep explanations brief; ensure answers are unambiguous.\n\
         - For multiple_choice, provide 3-5 distinct options; 'answer' must exactly match one option.\n\
         - For fill_blank, provide a clear blank statement and the precise answer.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_embeds_persona() {
        let instruction = build_system_instruction("Tough coach");

        assert!(instruction.starts_with("You are Tough coach, an adaptive study buddy."));
        assert!(instruction.contains("no markdown or prose"));
    }

    #[test]
    fn user_prompt_is_deterministic() {
        let first = build_user_prompt("Photosynthesis", QuestionType::MultipleChoice, "easy", 2);
        let second = build_user_prompt("Photosynthesis", QuestionType::MultipleChoice, "easy", 2);

        assert_eq!(first, second);
    }

    #[test]
    fn user_prompt_embeds_every_parameter() {
        let prompt = build_user_prompt("Calculus integrals", QuestionType::FillBlank, "hard", 5);

        assert!(prompt.contains("question_type: fill_blank"));
        assert!(prompt.contains("topic: Calculus integrals"));
        assert!(prompt.contains("number_of_questions: 5"));
        assert!(prompt.contains("difficulty: hard"));
    }

    #[test]
    fn user_prompt_states_option_constraints() {
        let prompt = build_user_prompt("Photosynthesis", QuestionType::MultipleChoice, "easy", 3);

        assert!(prompt.contains("3-5 distinct options"));
        assert!(prompt.contains("'answer' must exactly match one option"));
        assert!(prompt.contains("Keep explanations brief"));
    }
}
