use crate::llm::errors::ProviderError;
use async_trait::async_trait;

/// A single completion request to an external model.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Ask the provider to ground the answer with live web search. The
    /// grounded provider always searches; for the general provider this
    /// toggles its search tool.
    pub web_search: bool,
}

impl CompletionRequest {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            web_search: false,
        }
    }

    pub fn with_web_search(prompt: String) -> Self {
        Self {
            prompt,
            web_search: true,
        }
    }
}

/// A provider answer: the text plus any citation URLs returned out-of-band.
///
/// Citations are a side channel, not part of the answer text. Only the
/// grounded provider populates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub text: String,
    pub citations: Vec<String>,
}

/// An external LLM endpoint. One configured instance per provider is built
/// at process start and shared across requests; implementations hold their
/// own connection-pooling HTTP client and no other state.
///
/// Implementations do not retry: any failure is the definitive failure of
/// that task for the current request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError>;
}
