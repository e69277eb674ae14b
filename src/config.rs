use std::env;

use secrecy::SecretString;

use crate::models::domain::Provider;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub groq_api_key: Option<SecretString>,
    pub openai_api_key: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            groq_api_key: read_key("GROQ_API_KEY"),
            openai_api_key: read_key("OPENAI_API_KEY"),
        }
    }

    /// Session-scoped fallback key for a provider, used when the request
    /// carries no key of its own. Never logged or persisted.
    pub fn api_key_for(&self, provider: Provider) -> Option<&SecretString> {
        match provider {
            Provider::Groq => self.groq_api_key.as_ref(),
            Provider::OpenAI => self.openai_api_key.as_ref(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            groq_api_key: Some(SecretString::from("test_groq_key".to_string())),
            openai_api_key: None,
        }
    }
}

fn read_key(var: &str) -> Option<SecretString> {
    env::var(var)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .map(SecretString::from)
}
