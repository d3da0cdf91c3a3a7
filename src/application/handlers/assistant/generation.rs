//! Single-attempt generation shared by the classifier and the handlers.

use std::sync::Arc;

use crate::domain::assistant::Prompt;
use crate::domain::foundation::TurnId;
use crate::ports::{AIError, AIProvider, CompletionRequest, RequestMetadata};

/// Sends one prompt to the backend and returns the trimmed completion.
///
/// There is no retry: a failure goes straight back to the caller, which
/// turns it into an apology or a safe default.
#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn AIProvider>,
}

impl Generator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub async fn ask(&self, prompt: Prompt, turn_id: TurnId, stage: &str) -> Result<String, AIError> {
        let request = CompletionRequest::from_prompt(prompt, RequestMetadata::new(turn_id, stage));
        self.send(request, stage).await
    }

    /// Like [`ask`](Self::ask), with the completion capped at `max_tokens`.
    pub async fn ask_brief(
        &self,
        prompt: Prompt,
        turn_id: TurnId,
        stage: &str,
        max_tokens: u32,
    ) -> Result<String, AIError> {
        let request = CompletionRequest::from_prompt(prompt, RequestMetadata::new(turn_id, stage))
            .with_max_tokens(max_tokens);
        self.send(request, stage).await
    }

    async fn send(&self, request: CompletionRequest, stage: &str) -> Result<String, AIError> {
        match self.provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    stage,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Completion received"
                );
                Ok(response.content.trim().to_string())
            }
            Err(e) => {
                tracing::warn!(stage, error = %e, transient = e.is_transient(), "Generation failed");
                Err(e)
            }
        }
    }
}
