use serde::{Deserialize, Serialize};

pub const DEFAULT_UI_LANG: &str = "English";
pub const DEFAULT_LOCATION: &str = "India";

fn default_ui_lang() -> String {
    DEFAULT_UI_LANG.to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// A lay legal question for the general assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub user_text: String,
    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,
    #[serde(default)]
    pub anon: bool,
    #[serde(default = "default_location")]
    pub location: String,
}

impl AnalysisRequest {
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            ui_lang: default_ui_lang(),
            anon: false,
            location: default_location(),
        }
    }
}

/// Agreement text to be reviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementRequest {
    pub details: String,
    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,
}

/// A fact pattern for case analysis. Accepts the analysis body shape; the
/// anonymity and location fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseAnalysisRequest {
    pub user_text: String,
    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub answer: String,
    pub related_questions: Vec<String>,
    pub intent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalysisResponse {
    pub summary: String,
    pub laws: Vec<String>,
    pub advice: String,
}
