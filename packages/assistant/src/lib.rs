pub mod assistant;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod nearby;
pub mod types;

pub use assistant::LegalAssistant;
pub use config::LlmConfig;
pub use error::{AssistantError, Result};
pub use extract::{extract_json, ParsedResult};
pub use llm::{GeminiClient, LlmClient, LlmResponse};
pub use types::{
    AgreementRequest, AnalysisRequest, AnalysisResponse, CaseAnalysisRequest,
    CaseAnalysisResponse,
};
