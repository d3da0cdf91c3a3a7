//! SalesHandler - Availability and pricing, optionally via an inventory lookup.

use std::sync::Arc;

use crate::application::tools::InventoryTools;
use crate::domain::assistant::{ConversationState, Directive, Prompt};
use crate::domain::foundation::TurnId;
use crate::ports::ContextProvider;

use super::generation::Generator;

/// Answers in free text unless the backend asks for an inventory check.
pub struct SalesHandler {
    generator: Generator,
    context: Arc<dyn ContextProvider>,
    tools: InventoryTools,
}

impl SalesHandler {
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

        let raw = match self
            .generator
            .ask(Prompt::sales(&query, &context), turn_id, "sales")
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                state.set_answer(format!("Désolé, je n'ai pas pu générer de réponse : {e}"));
                state.push_trace(format!("[sales] generation failed: {e}"));
                return;
            }
        };
        state.push_trace(format!("[sales] raw model answer: {raw}"));

        // Any other directive is not ours to run: the raw text is the answer.
        match Directive::parse(&raw) {
            Some(Directive::CheckProductInventory { name }) => {
                tracing::info!(tool = "check_product_inventory", name = %name, "Running tool");
                let result = self.tools.check_product_inventory(&name).await;
                state.set_answer(result);
                state.push_trace(format!("[sales] tool check_product_inventory({name})"));
            }
            _ => state.set_answer(raw),
        }
    }
}
