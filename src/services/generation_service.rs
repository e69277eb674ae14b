use std::sync::Arc;

use secrecy::SecretString;
use validator::Validate;

use crate::{
    constants::prompts::{build_system_instruction, build_user_prompt},
    errors::{AppError, AppResult},
    models::{domain::QuestionSet, dto::GenerateQuestionSetRequest},
    services::{
        agent_service::{AgentFactory, AgentSpec},
        coercion::coerce,
    },
};

/// Drives one generation end to end: input checks, prompt construction,
/// the single agent call, and coercion of whatever comes back. Holds no
/// state of its own; the result slot belongs to the application state.
pub struct GenerationService {
    factory: Arc<dyn AgentFactory>,
}

impl GenerationService {
    pub fn new(factory: Arc<dyn AgentFactory>) -> Self {
        Self { factory }
    }

    /// Runs one generation. `default_key` is the server-configured key for
    /// the request's provider, used when the request carries none. All
    /// input failures are reported before any network call is attempted;
    /// the call itself is never retried.
    pub async fn generate(
        &self,
        request: GenerateQuestionSetRequest,
        default_key: Option<SecretString>,
    ) -> AppResult<QuestionSet> {
        request.validate()?;
        if request.topic.trim().is_empty() {
            return Err(AppError::MissingInput("please enter a topic".to_string()));
        }

        let api_key = request
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::from(key.to_string()))
            .or(default_key)
            .ok_or_else(|| {
                AppError::MissingInput(format!(
                    "please provide your {} API key",
                    request.provider
                ))
            })?;

        let prompt = build_user_prompt(
            request.topic.trim(),
            request.question_type,
            request.difficulty.as_str(),
            request.num_questions,
        );

        let agent = self.factory.build(AgentSpec {
            provider: request.provider,
            model: request.model.clone(),
            api_key,
            system_instruction: build_system_instruction(request.persona.as_str()),
        })?;

        log::info!(
            "generating {} {} questions on '{}' via {}",
            request.num_questions,
            request.question_type,
            request.topic.trim(),
            request.provider
        );

        let response = agent.run(&prompt).await?;
        coerce(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{Difficulty, Persona, Provider, QuestionType},
        services::agent_service::{AgentResponse, QuestionAgent},
        test_utils::fixtures,
    };
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        Agent {}

        #[async_trait]
        impl QuestionAgent for Agent {
            async fn run(&self, prompt: &str) -> AppResult<AgentResponse>;
        }
    }

    struct FixedFactory {
        response: AgentResponse,
        builds: AtomicUsize,
    }

    impl FixedFactory {
        fn new(response: AgentResponse) -> Self {
            Self {
                response,
                builds: AtomicUsize::new(0),
            }
        }
    }

    impl AgentFactory for FixedFactory {
        fn build(&self, spec: AgentSpec) -> AppResult<Box<dyn QuestionAgent>> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            assert!(spec.system_instruction.contains("adaptive study buddy"));

            let response = self.response.clone();
            let mut agent = MockAgent::new();
            agent
                .expect_run()
                .returning(move |_| Ok(response.clone()));
            Ok(Box::new(agent))
        }
    }

    fn request(topic: &str, api_key: Option<&str>) -> GenerateQuestionSetRequest {
        GenerateQuestionSetRequest {
            provider: Provider::Groq,
            model: "openai/gpt-oss-20b".to_string(),
            api_key: api_key.map(str::to_string),
            persona: Persona::FriendlyMentor,
            topic: topic.to_string(),
            question_type: QuestionType::MultipleChoice,
            difficulty: Difficulty::Easy,
            num_questions: 2,
        }
    }

    #[actix_rt::test]
    async fn generates_a_set_from_a_conforming_reply() {
        let factory = Arc::new(FixedFactory::new(AgentResponse::Json(
            fixtures::multiple_choice_mapping(),
        )));
        let service = GenerationService::new(factory.clone());

        let set = service
            .generate(request("Photosynthesis", Some("key")), None)
            .await
            .unwrap();

        assert_eq!(set.topic, "Photosynthesis");
        assert_eq!(set.questions.len(), 2);
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
    }

    #[actix_rt::test]
    async fn blank_topic_fails_before_any_agent_is_built() {
        let factory = Arc::new(FixedFactory::new(AgentResponse::Json(
            fixtures::multiple_choice_mapping(),
        )));
        let service = GenerationService::new(factory.clone());

        let err = service
            .generate(request("   ", Some("key")), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MissingInput(_)));
        assert_eq!(factory.builds.load(Ordering::SeqCst), 0);
    }

    #[actix_rt::test]
    async fn missing_api_key_names_the_provider() {
        let factory = Arc::new(FixedFactory::new(AgentResponse::Json(
            fixtures::multiple_choice_mapping(),
        )));
        let service = GenerationService::new(factory.clone());

        let err = service
            .generate(request("Photosynthesis", None), None)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing input: please provide your Groq API key"
        );
        assert_eq!(factory.builds.load(Ordering::SeqCst), 0);
    }

    #[actix_rt::test]
    async fn configured_default_key_fills_in_for_a_blank_one() {
        let factory = Arc::new(FixedFactory::new(AgentResponse::Json(
            fixtures::multiple_choice_mapping(),
        )));
        let service = GenerationService::new(factory.clone());

        let result = service
            .generate(
                request("Photosynthesis", Some("   ")),
                Some(SecretString::from("fallback".to_string())),
            )
            .await;

        assert!(result.is_ok());
    }

    #[actix_rt::test]
    async fn refusal_text_surfaces_as_malformed_response() {
        let factory = Arc::new(FixedFactory::new(AgentResponse::Json(
            serde_json::Value::String("sorry, I cannot help".to_string()),
        )));
        let service = GenerationService::new(factory);

        let err = service
            .generate(request("Photosynthesis", Some("key")), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[actix_rt::test]
    async fn agent_failure_propagates_with_raw_error_text() {
        struct FailingFactory;

        impl AgentFactory for FailingFactory {
            fn build(&self, _spec: AgentSpec) -> AppResult<Box<dyn QuestionAgent>> {
                let mut agent = MockAgent::new();
                agent.expect_run().returning(|_| {
                    Err(AppError::AgentFailure("401 invalid api key".to_string()))
                });
                Ok(Box::new(agent))
            }
        }

        let service = GenerationService::new(Arc::new(FailingFactory));

        let err = service
            .generate(request("Photosynthesis", Some("bad")), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Agent call failed: 401 invalid api key");
    }
}
