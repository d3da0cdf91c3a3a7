//! CannedHandler - Table-driven replies for greeting, thanks, farewell and handover.

use crate::domain::assistant::{CannedReply, ConversationState, Route};

pub struct CannedHandler;

impl CannedHandler {
    /// Routes without a table entry get the handover reply.
    pub fn handle(&self, state: &mut ConversationState, route: Route) {
        let reply = CannedReply::for_route(route).unwrap_or(CannedReply::HANDOVER);

        state.set_answer(reply.answer);
        state.push_trace(reply.trace);
    }
}
