use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{Provider, QuestionSet};

/// A validated question set together with its generation metadata. This is
/// what the in-memory result slot holds; `generated_at` lets clients tell a
/// fresh result from a prior one that survived a failed regeneration.
#[derive(Debug, Clone, Serialize)]
pub struct StoredQuestionSet {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub question_set: QuestionSet,
}

impl StoredQuestionSet {
    pub fn new(question_set: QuestionSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            question_set,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub name: Provider,
    pub models: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderInfo>,
}

impl ProvidersResponse {
    pub fn catalog() -> Self {
        Self {
            providers: Provider::ALL
                .iter()
                .map(|provider| ProviderInfo {
                    name: *provider,
                    models: provider.models().to_vec(),
                })
                .collect(),
        }
    }
}
