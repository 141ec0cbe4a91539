use std::sync::Arc;

use nyaya_assistant::LegalAssistant;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<LegalAssistant>,
}
