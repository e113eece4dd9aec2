// src/llm/openai.rs

//! Low-level OpenAI chat-completions client. No wrappers; just reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::env;

use super::{AdviceProvider, ProviderError};
use crate::config::CONFIG;

#[derive(Clone)]
pub struct OpenAIClient {
    pub client: Client,
    pub api_base: String, // Default "https://api.openai.com/v1", but can be overridden
    pub model: String,
    pub temperature: f64,
}

impl OpenAIClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_base: CONFIG.openai_base_url.clone(),
            model: CONFIG.model.clone(),
            temperature: CONFIG.temperature,
        }
    }

    // Read per call, not at startup: a missing key must surface as a 500 on
    // each advice request, never crash the process at boot.
    fn api_key(&self) -> Result<String, ProviderError> {
        env::var("OPENAI_API_KEY").map_err(|_| ProviderError::MissingCredential)
    }
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceProvider for OpenAIClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<Option<String>, ProviderError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.api_base);

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_content},
            ],
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let resp_json: serde_json::Value = resp.json().await?;
        let answer = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string);

        Ok(answer)
    }
}
