use serde::{Deserialize, Serialize};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const GROQ_MODELS: &[&str] = &[
    "openai/gpt-oss-20b",
    "openai/gpt-oss-120b",
    "openai/gpt-oss-safeguard-20b",
    "moonshotai/kimi-k2-instruct-0905",
    "meta-llama/llama-4-maverick-17b-128e-instruct",
    "meta-llama/llama-4-scout-17b-16e-instruct",
];

const OPENAI_MODELS: &[&str] = &["gpt-5.1-mini", "gpt-5.1-nano"];

/// Remote chat-completion backend. Both speak the OpenAI wire protocol, so
/// a provider is just an API base plus the model identifiers we offer for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Provider {
    Groq,
    OpenAI,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Groq, Provider::OpenAI];

    pub fn api_base(&self) -> &'static str {
        match self {
            Provider::Groq => GROQ_API_BASE,
            Provider::OpenAI => OPENAI_API_BASE,
        }
    }

    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Groq => GROQ_MODELS,
            Provider::OpenAI => OPENAI_MODELS,
        }
    }

    pub fn default_model(&self) -> &'static str {
        self.models()[0]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Groq => write!(f, "Groq"),
            Provider::OpenAI => write!(f, "OpenAI"),
        }
    }
}
