//! Search-grounded chat-completion provider.
//!
//! Used for factuality, political leaning, and source credibility. Every
//! call is grounded with live web search; the response carries a citation
//! URL list alongside the answer text, which the normalizer later merges
//! into the parsed payload.

use crate::llm::{
    errors::ProviderError,
    provider::{Completion, CompletionRequest, ModelProvider},
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

pub struct PerplexityProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl PerplexityProvider {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Deserialize, Default)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[async_trait]
impl ModelProvider for PerplexityProvider {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: request.prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http { status });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        debug!(
            response_len = text.len(),
            citations = parsed.citations.len(),
            "completion received"
        );

        Ok(Completion {
            text,
            citations: parsed.citations,
        })
    }
}
