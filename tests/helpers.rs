use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use newslens::{
    app_state::AppState,
    llm::{Completion, CompletionRequest, ModelProvider, ProviderError},
};

/// When a scripted call started and finished, for asserting fan-out timing.
#[derive(Debug, Clone, Copy)]
pub struct CallTiming {
    pub started: Instant,
    pub finished: Instant,
}

/// Scripted provider double: answers by matching a keyword against the
/// prompt, simulates provider latency, and records call timings into a
/// timeline that can be shared between both providers.
pub struct ScriptedProvider {
    latency: Duration,
    rules: Vec<(&'static str, Option<Completion>)>,
    timeline: Arc<Mutex<Vec<CallTiming>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(50),
            rules: Vec::new(),
            timeline: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer prompts containing `keyword` with `text` (no citations).
    pub fn respond(mut self, keyword: &'static str, text: &str) -> Self {
        self.rules.push((
            keyword,
            Some(Completion {
                text: text.to_string(),
                citations: Vec::new(),
            }),
        ));
        self
    }

    /// Answer prompts containing `keyword` with `text` plus grounded-search
    /// citations.
    pub fn respond_with_citations(
        mut self,
        keyword: &'static str,
        text: &str,
        citations: &[&str],
    ) -> Self {
        self.rules.push((
            keyword,
            Some(Completion {
                text: text.to_string(),
                citations: citations.iter().map(|c| c.to_string()).collect(),
            }),
        ));
        self
    }

    /// Fail prompts containing `keyword` with an empty-response error.
    pub fn fail(mut self, keyword: &'static str) -> Self {
        self.rules.push((keyword, None));
        self
    }

    /// Share one timeline across several providers.
    pub fn with_timeline(mut self, timeline: Arc<Mutex<Vec<CallTiming>>>) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn timeline(&self) -> Arc<Mutex<Vec<CallTiming>>> {
        Arc::clone(&self.timeline)
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError> {
        let started = Instant::now();
        tokio::time::sleep(self.latency).await;
        let finished = Instant::now();
        self.timeline
            .lock()
            .unwrap()
            .push(CallTiming { started, finished });

        for (keyword, outcome) in &self.rules {
            if request.prompt.contains(keyword) {
                return match outcome {
                    Some(completion) => Ok(completion.clone()),
                    None => Err(ProviderError::EmptyResponse),
                };
            }
        }

        // Unscripted prompts answer with an empty object so unrelated
        // dimensions fall back to their defaults.
        Ok(Completion {
            text: "{}".to_string(),
            citations: Vec::new(),
        })
    }
}

pub fn test_app(general: ScriptedProvider, grounded: ScriptedProvider) -> Router {
    let general: Arc<dyn ModelProvider + Send + Sync> = Arc::new(general);
    let grounded: Arc<dyn ModelProvider + Send + Sync> = Arc::new(grounded);
    newslens::analysis::router(AppState::new(general, grounded))
}
