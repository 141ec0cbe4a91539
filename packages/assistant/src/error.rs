use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("LLM API request failed: {0}")]
    LlmApiRequest(#[from] reqwest::Error),

    #[error("LLM API error (status {status}): {message}")]
    LlmApiError { status: u16, message: String },

    #[error("failed to parse LLM response: {0}")]
    LlmResponseParse(String),

    #[error("LLM returned empty response")]
    LlmEmptyResponse,
}

pub type Result<T> = std::result::Result<T, AssistantError>;
