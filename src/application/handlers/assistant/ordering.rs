//! OrderingHandler - Order creation, with an order status lookup as fallback.
//!
//! Two independent backend calls at most:
//!
//! 1. Order creation prompt (query + context). A `create_order` directive is
//!    executed and ends the turn.
//! 2. Otherwise, order status prompt (query only). A `get_order_status`
//!    directive is executed.
//!
//! When neither stage yields its directive, the first stage's text is the
//! answer.

use std::sync::Arc;

use crate::application::tools::{not_found_message, InventoryTools};
use crate::domain::assistant::{ConversationState, Directive, OrderReference, Prompt};
use crate::domain::foundation::TurnId;
use crate::ports::ContextProvider;

use super::generation::Generator;

pub struct OrderingHandler {
    generator: Generator,
    context: Arc<dyn ContextProvider>,
    tools: InventoryTools,
}

impl OrderingHandler {
    pub fn new(
        generator: Generator,
        context: Arc<dyn ContextProvider>,
        tools: InventoryTools,
    ) -> Self {
        Self {
            generator,
            context,
            tools,
        }
    }

    pub async fn handle(&self, state: &mut ConversationState, turn_id: TurnId) {
        let query = state.user_query().to_string();
        let context = self.context.make_context(&query).await;

        let creation = match self
            .generator
            .ask(
                Prompt::order_creation(&query, &context),
                turn_id,
                "ordering.create",
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                state.set_answer(format!("Désolé, je n'ai pas pu traiter votre commande : {e}"));
                state.push_trace(format!("[ordering] generation failed: {e}"));
                return;
            }
        };
        state.push_trace(format!("[ordering] raw model answer: {creation}"));

        if let Some(Directive::CreateOrder { order_details }) = Directive::parse(&creation) {
            tracing::info!(tool = "create_order", "Running tool");
            let result = self.tools.create_order(&order_details).await;
            state.set_answer(result);
            state.push_trace("[ordering] tool create_order");
            return;
        }

        let status = match self
            .generator
            .ask(Prompt::order_status(&query), turn_id, "ordering.status")
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                state.set_answer(format!(
                    "Désolé, je n'ai pas pu vérifier le statut de votre commande : {e}"
                ));
                state.push_trace(format!("[ordering] status lookup failed: {e}"));
                return;
            }
        };

        match Directive::parse(&status) {
            Some(Directive::GetOrderStatus { order_id }) => {
                let result = self.order_status(&order_id).await;
                state.set_answer(result);
                state.push_trace(format!("[ordering] tool get_order_status({order_id})"));
            }
            _ => {
                state.set_answer(creation);
                state.push_trace("[ordering] no directive, answering with model text");
            }
        }
    }

    /// An id that is not an integer cannot match any order.
    async fn order_status(&self, reference: &OrderReference) -> String {
        match reference.resolve() {
            Ok(id) => {
                tracing::info!(tool = "get_order_status", order_id = id, "Running tool");
                self.tools.get_order_status(id).await
            }
            Err(raw) => {
                tracing::info!(order_id = %raw, "Order id is not an integer");
                not_found_message(raw)
            }
        }
    }
}
