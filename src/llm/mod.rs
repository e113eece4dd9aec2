// src/llm/mod.rs
// The chat-completion collaborator: a trait seam plus the OpenAI-backed
// client. Handlers only see the trait, so tests can substitute the upstream.

pub mod openai;

pub use openai::OpenAIClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the advice provider, split so the HTTP layer can map
/// each one to the right status and diagnostic payload.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("OPENAI_API_KEY not set")]
    MissingCredential,
    #[error("OpenAI error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("OpenAI request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One chat-completion call per advice request. No retries, no caching;
/// the call runs to completion or failure. `Ok(None)` means the upstream
/// answered but the first choice carried no usable text.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<Option<String>, ProviderError>;
}
