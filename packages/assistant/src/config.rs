use crate::error::{AssistantError, Result};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEMPERATURE: f64 = 0.4;
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini model client.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: String,
    pub temperature: f64,
    pub api_base_url: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("api_base_url", &self.api_base_url)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; `GOOGLE_API_KEY` is accepted as a fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|key| !key.trim().is_empty());
        let api_key = non_blank("GEMINI_API_KEY")
            .or_else(|| non_blank("GOOGLE_API_KEY"))
            .ok_or_else(|| AssistantError::Config("GEMINI_API_KEY not set".into()))?;

        let model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());

        let temperature = lookup("LLM_TEMPERATURE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let api_base_url =
            lookup("LLM_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let max_tokens = lookup("LLM_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let timeout_secs = lookup("LLM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            model,
            api_key,
            temperature,
            api_base_url,
            max_tokens,
            timeout_secs,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(api_key: impl Into<String>) -> LlmConfigBuilder {
        LlmConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Builder for constructing `LlmConfig` in tests.
pub struct LlmConfigBuilder {
    api_key: String,
    model: String,
    temperature: f64,
    api_base_url: String,
    max_tokens: u32,
    timeout_secs: u64,
}

impl LlmConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> LlmConfig {
        LlmConfig {
            model: self.model,
            api_key: self.api_key,
            temperature: self.temperature,
            api_base_url: self.api_base_url,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
        }
    }
}
