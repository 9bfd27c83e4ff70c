pub mod errors;
pub mod gemini;
pub mod perplexity;
pub mod provider;

pub use errors::ProviderError;
pub use gemini::GeminiProvider;
pub use perplexity::PerplexityProvider;
pub use provider::{Completion, CompletionRequest, ModelProvider};

#[cfg(test)]
pub use provider::MockModelProvider;
