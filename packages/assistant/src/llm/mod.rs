mod client;
pub mod prompt;

#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockLlmClient;
pub use client::{GeminiClient, LlmClient, LlmResponse};
