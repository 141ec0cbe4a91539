use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{extract_json, ParsedResult};
use crate::llm::{prompt, LlmClient};
use crate::types::{
    AgreementRequest, AnalysisRequest, AnalysisResponse, CaseAnalysisRequest,
    CaseAnalysisResponse,
};

pub const DEFAULT_INTENT: &str = "unknown";
pub const DEFAULT_CASE_SUMMARY: &str = "Analysis unavailable";

/// Runs the three model-backed use cases.
///
/// Each call builds a prompt, makes exactly one model request and shapes the
/// extracted fields into a response. Extraction never fails; only the model
/// call can.
pub struct LegalAssistant {
    client: Arc<dyn LlmClient>,
}

impl LegalAssistant {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Send `prompt` and return the raw response text with its extracted fields.
    async fn ask(&self, use_case: &'static str, prompt: &str) -> Result<(String, ParsedResult)> {
        let response = self.client.complete(prompt).await?;
        let parsed = extract_json(&response.content);

        info!(
            use_case,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            parsed_keys = parsed.len(),
            "model response received"
        );

        Ok((response.content, parsed))
    }

    /// Answer a general legal question.
    ///
    /// Missing fields fall back to: the raw model text for `answer`, no
    /// related questions, and `"unknown"` for `intent`.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        debug!(ui_lang = %request.ui_lang, anon = request.anon, "analyze");
        let prompt = prompt::build_analysis_prompt(request);
        let (raw, parsed) = self.ask("analyze", &prompt).await?;

        Ok(AnalysisResponse {
            answer: parsed.get_str("answer", &raw),
            related_questions: parsed.get_string_list("related_questions"),
            intent: parsed.get_str("intent", DEFAULT_INTENT),
        })
    }

    /// Review an agreement. The extracted mapping is returned as-is; it is
    /// empty when the model output held no JSON object.
    pub async fn analyze_agreement(&self, request: &AgreementRequest) -> Result<ParsedResult> {
        debug!(ui_lang = %request.ui_lang, "agreement");
        let prompt = prompt::build_agreement_prompt(&request.details, &request.ui_lang);
        let (_, parsed) = self.ask("agreement", &prompt).await?;
        Ok(parsed)
    }

    /// Summarise a fact pattern with applicable laws and advice.
    ///
    /// Missing fields fall back to `"Analysis unavailable"` for `summary`, no
    /// laws, and the raw model text for `advice`.
    pub async fn analyze_case(&self, request: &CaseAnalysisRequest) -> Result<CaseAnalysisResponse> {
        debug!(ui_lang = %request.ui_lang, "case analysis");
        let prompt = prompt::build_case_analysis_prompt(&request.user_text, &request.ui_lang);
        let (raw, parsed) = self.ask("case_analysis", &prompt).await?;

        Ok(CaseAnalysisResponse {
            summary: parsed.get_str("summary", DEFAULT_CASE_SUMMARY),
            laws: parsed.get_string_list("laws"),
            advice: parsed.get_str("advice", &raw),
        })
    }
}
