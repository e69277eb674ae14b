pub mod question_set_dto;
pub mod request;
pub mod response;

pub use question_set_dto::{question_set_schema, QuestionDto, QuestionSetDto};
pub use request::GenerateQuestionSetRequest;
pub use response::{ProviderInfo, ProvidersResponse, StoredQuestionSet};
