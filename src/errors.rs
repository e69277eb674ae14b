use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Agent call failed: {0}")]
    AgentFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingInput(_) => "MISSING_INPUT",
            AppError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::AgentFailure(_) => "AGENT_FAILURE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AppError::SchemaValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::AgentFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::MissingInput(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
