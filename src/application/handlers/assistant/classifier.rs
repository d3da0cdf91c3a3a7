//! IntentClassifier - Map a user query to one of the seven intents.

use crate::domain::assistant::{ConversationState, Intent, Prompt};
use crate::domain::foundation::TurnId;

use super::generation::Generator;

/// The reply is a single label word.
const LABEL_MAX_TOKENS: u32 = 16;

/// Asks the backend for a label word and resolves it by keyword matching.
///
/// A backend failure classifies as handover, the only outcome that never
/// consults the backend again.
#[derive(Clone)]
pub struct IntentClassifier {
    generator: Generator,
}

impl IntentClassifier {
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    /// Sets the turn's intent and appends exactly one trace entry.
    pub async fn classify(&self, state: &mut ConversationState, turn_id: TurnId) -> Intent {
        let prompt = Prompt::intent(state.user_query());

        let intent = match self
            .generator
            .ask_brief(prompt, turn_id, "intent", LABEL_MAX_TOKENS)
            .await {
            Ok(raw) => {
                let intent = Intent::from_completion(&raw);
                state.push_trace(format!("[intent] {}", intent));
                tracing::info!(intent = %intent, raw = %raw, "Intent classified");
                intent
            }
            Err(e) => {
                state.push_trace(format!(
                    "[intent] classification failed ({e}), defaulting to {}",
                    Intent::Handover
                ));
                Intent::Handover
            }
        };

        state.set_intent(intent);
        intent
    }
}
