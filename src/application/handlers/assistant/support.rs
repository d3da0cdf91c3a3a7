//! SupportHandler - Documentation-grounded technical answers.

use std::sync::Arc;

use crate::domain::assistant::{ConversationState, Prompt};
use crate::domain::foundation::TurnId;
use crate::ports::ContextProvider;

use super::generation::Generator;

pub struct SupportHandler {
    generator: Generator,
    context: Arc<dyn ContextProvider>,
}

impl SupportHandler {
    pub fn new(generator: Generator, context: Arc<dyn ContextProvider>) -> Self {
        Self { generator, context }
    }

    pub async fn handle(&self, state: &mut ConversationState, turn_id: TurnId) {
        let query = state.user_query().to_string();
        let context = self.context.make_context(&query).await;

        match self
            .generator
            .ask(Prompt::support(&query, &context), turn_id, "support")
            .await
        {
            Ok(answer) => {
                state.set_answer(answer);
                state.push_trace("[support] model answer");
            }
            Err(e) => {
                state.set_answer(format!("Désolé, je n'ai pas pu générer de réponse : {e}"));
                state.push_trace(format!("[support] generation failed: {e}"));
            }
        }
    }
}
