//! Assistant - The per-turn orchestrator.
//!
//! One run per user turn: classify, route, let exactly one handler answer.
//! Nothing inside a run returns an error to the caller; every failure has
//! already been turned into an answer and trace entries by the time
//! `handle_turn` returns.

use std::sync::Arc;
use tracing::Instrument;

use crate::application::tools::InventoryTools;
use crate::domain::assistant::{ConversationState, Route, HANDOVER_ANSWER};
use crate::domain::foundation::TurnId;
use crate::ports::{AIProvider, ContextProvider, ToolStore};

use super::canned::CannedHandler;
use super::classifier::IntentClassifier;
use super::generation::Generator;
use super::ordering::OrderingHandler;
use super::sales::SalesHandler;
use super::support::SupportHandler;

pub struct Assistant {
    classifier: IntentClassifier,
    support: SupportHandler,
    sales: SalesHandler,
    ordering: OrderingHandler,
    canned: CannedHandler,
    tools: InventoryTools,
}

impl Assistant {
    /// Wires every handler from the three external collaborators.
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        context: Arc<dyn ContextProvider>,
        store: Arc<dyn ToolStore>,
    ) -> Self {
        let generator = Generator::new(ai_provider);
        let tools = InventoryTools::new(store);

        Self {
            classifier: IntentClassifier::new(generator.clone()),
            support: SupportHandler::new(generator.clone(), context.clone()),
            sales: SalesHandler::new(generator.clone(), context.clone(), tools.clone()),
            ordering: OrderingHandler::new(generator, context, tools.clone()),
            canned: CannedHandler,
            tools,
        }
    }

    pub fn tools(&self) -> &InventoryTools {
        &self.tools
    }

    /// Runs one turn for `user_text` and returns the updated state with its
    /// intent, answer and trace populated. History is left to the caller.
    pub async fn handle_turn(
        &self,
        mut state: ConversationState,
        user_text: &str,
    ) -> ConversationState {
        let turn_id = TurnId::new();
        let span = tracing::info_span!("turn", turn_id = %turn_id);

        async move {
            state.begin_turn(user_text);

            let intent = self.classifier.classify(&mut state, turn_id).await;
            let route = Route::for_intent(Some(intent));
            tracing::info!(route = %route, "Handler selected");

            match route {
                Route::Support => self.support.handle(&mut state, turn_id).await,
                Route::Sales => self.sales.handle(&mut state, turn_id).await,
                Route::Ordering => self.ordering.handle(&mut state, turn_id).await,
                Route::Handover | Route::Greeting | Route::Thanks | Route::Farewell => {
                    self.canned.handle(&mut state, route)
                }
            }

            if state.ensure_answer(HANDOVER_ANSWER) {
                tracing::warn!(route = %route, "Handler produced no answer, escalating");
                state.push_trace("[assistant] empty answer, escalating");
            }

            state
        }
        .instrument(span)
        .await
    }

    /// Records the user turn, runs it, and records the assistant's answer.
    pub async fn converse(&self, mut state: ConversationState, user_text: &str) -> ConversationState {
        state.push_user_turn(user_text);
        let mut state = self.handle_turn(state, user_text).await;
        let answer = state.answer().unwrap_or(HANDOVER_ANSWER).to_string();
        state.push_assistant_turn(answer);
        state
    }
}
