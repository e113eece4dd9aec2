// src/state.rs

use std::sync::Arc;

use crate::llm::AdviceProvider;

/// Shared handler state. The provider sits behind a trait object so tests
/// can substitute the collaborator; nothing here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn AdviceProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self { provider }
    }
}
