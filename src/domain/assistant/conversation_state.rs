//! Conversation State
//!
//! The record threaded through one orchestration run. It is owned by the
//! surrounding session for the conversation's duration and is never
//! persisted beyond it.

use serde::{Deserialize, Serialize};

use super::intent::Intent;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the displayed conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// State of a conversation, mutated by exactly one run per user turn.
///
/// `history` and `trace` are append-only. `intent` and `answer` are set
/// once per run and cleared by [`ConversationState::begin_turn`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    #[serde(default)]
    history: Vec<Turn>,
    #[serde(default)]
    user_query: String,
    #[serde(default)]
    intent: Option<Intent>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    trace: Vec<String>,
    /// Index of the first trace entry written by the current run.
    #[serde(default)]
    turn_trace_start: usize,
}

impl ConversationState {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run for `query`.
    pub fn begin_turn(&mut self, query: impl Into<String>) {
        self.user_query = query.into();
        self.intent = None;
        self.answer = None;
        self.turn_trace_start = self.trace.len();
    }

    pub fn user_query(&self) -> &str {
        &self.user_query
    }

    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    /// Records the classified intent. Classification happens once per run.
    pub fn set_intent(&mut self, intent: Intent) {
        debug_assert!(self.intent.is_none(), "intent already set for this turn");
        self.intent = Some(intent);
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Records the handler's answer. Exactly one handler answers per run.
    pub fn set_answer(&mut self, answer: impl Into<String>) {
        debug_assert!(self.answer.is_none(), "answer already set for this turn");
        self.answer = Some(answer.into());
    }

    /// True once a non-blank answer has been recorded.
    pub fn has_answer(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }

    /// Replaces a missing or blank answer. Used only at the orchestrator exit.
    pub fn ensure_answer(&mut self, fallback: impl Into<String>) -> bool {
        if self.has_answer() {
            return false;
        }
        self.answer = Some(fallback.into());
        true
    }

    pub fn push_trace(&mut self, entry: impl Into<String>) {
        self.trace.push(entry.into());
    }

    /// Every trace entry since the conversation started.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Trace entries written by the current run.
    pub fn turn_trace(&self) -> &[String] {
        self.trace
            .get(self.turn_trace_start..)
            .unwrap_or_default()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn push_user_turn(&mut self, content: impl Into<String>) {
        self.history.push(Turn {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant_turn(&mut self, content: impl Into<String>) {
        self.history.push(Turn {
            role: Role::Assistant,
            content: content.into(),
        });
    }
}
