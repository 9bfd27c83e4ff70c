//! General-purpose multimodal completion provider.
//!
//! Used for Markdown conversion, sentiment scoring, and image descriptions.
//! Returns no citations; search grounding is available as an opt-in tool and
//! is enabled only for the conversion task.

use crate::llm::{
    errors::ProviderError,
    provider::{Completion, CompletionRequest, ModelProvider},
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
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
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    #[instrument(skip_all, fields(model = %self.model, web_search = request.web_search))]
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let tools = if request.web_search {
            vec![Tool {
                google_search: serde_json::Map::new(),
            }]
        } else {
            Vec::new()
        };

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            tools,
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http { status });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        debug!(response_len = text.len(), "completion received");

        Ok(Completion {
            text,
            citations: Vec::new(),
        })
    }
}
