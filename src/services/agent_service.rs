use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Provider, QuestionSet},
        dto::{question_set_schema, QuestionSetDto},
    },
};

/// Everything needed to bind an agent to one remote backend for one request.
#[derive(Clone, Debug)]
pub struct AgentSpec {
    pub provider: Provider,
    pub model: String,
    pub api_key: SecretString,
    pub system_instruction: String,
}

/// What one agent call may hand back. A closed union: the coercion pipeline
/// matches every variant and nothing else can come out of an agent.
#[derive(Clone, Debug)]
pub enum AgentResponse {
    /// Already validated in-process. Coercion is the identity on this.
    Structured(QuestionSet),
    /// Deserialized into the wire shape but not yet validated.
    Fields(QuestionSetDto),
    /// Whatever JSON the backend produced, including non-object values
    /// such as a bare refusal string.
    Json(Value),
}

/// One-shot call contract against a remote chat-completion backend.
#[async_trait]
pub trait QuestionAgent: Send + Sync {
    async fn run(&self, prompt: &str) -> AppResult<AgentResponse>;
}

/// Builds an agent bound to the request's provider, model, and key. A trait
/// so tests can swap the network out entirely.
pub trait AgentFactory: Send + Sync {
    fn build(&self, spec: AgentSpec) -> AppResult<Box<dyn QuestionAgent>>;
}

/// Production factory: both supported providers speak the OpenAI wire
/// protocol, so one client type covers them via the provider's API base.
pub struct OpenAiCompatFactory;

impl AgentFactory for OpenAiCompatFactory {
    fn build(&self, spec: AgentSpec) -> AppResult<Box<dyn QuestionAgent>> {
        let config = OpenAIConfig::new()
            .with_api_key(spec.api_key.expose_secret())
            .with_api_base(spec.provider.api_base());

        Ok(Box::new(OpenAiCompatAgent {
            client: Client::with_config(config),
            model: spec.model,
            system_instruction: spec.system_instruction,
        }))
    }
}

struct OpenAiCompatAgent {
    client: Client<OpenAIConfig>,
    model: String,
    system_instruction: String,
}

#[async_trait]
impl QuestionAgent for OpenAiCompatAgent {
    async fn run(&self, prompt: &str) -> AppResult<AgentResponse> {
        let request = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": self.system_instruction },
                { "role": "user", "content": prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "question_set",
                    "schema": question_set_schema(),
                    "strict": false
                }
            }
        });

        log::debug!("running agent against model {}", self.model);

        let response: Value = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|err| AppError::AgentFailure(err.to_string()))?;

        let message = &response["choices"][0]["message"];
        if let Some(refusal) = message["refusal"].as_str() {
            return Err(AppError::AgentFailure(format!(
                "model refused the request: {refusal}"
            )));
        }

        let content = message["content"].as_str().ok_or_else(|| {
            AppError::AgentFailure("backend reply carried no message content".to_string())
        })?;

        Ok(classify_content(content))
    }
}

/// Maps raw reply text onto the response union. Valid question-set JSON
/// becomes `Fields`, any other JSON stays `Json`, and non-JSON text is kept
/// as a JSON string so coercion can reject it with its own diagnostics.
fn classify_content(content: &str) -> AgentResponse {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => match serde_json::from_value::<QuestionSetDto>(value.clone()) {
            Ok(dto) => AgentResponse::Fields(dto),
            Err(_) => AgentResponse::Json(value),
        },
        Err(_) => AgentResponse::Json(Value::String(content.to_string())),
    }
}
