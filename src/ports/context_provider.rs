//! Context provider port - document retrieval for grounding answers.
//!
//! Given a free-text query, a provider returns the most relevant excerpts of
//! the shop's documentation. How the corpus is indexed is the adapter's
//! business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An excerpt of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPassage {
    /// Document the excerpt was taken from, e.g. a file name.
    pub source: String,
    pub excerpt: String,
}

impl ContextPassage {
    pub fn new(source: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            excerpt: excerpt.into(),
        }
    }

    /// `[source]` line followed by the excerpt.
    pub fn render(&self) -> String {
        format!("[{}]\n{}", self.source, self.excerpt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    #[error("document source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("no documents found in {0}")]
    Empty(String),

    #[error("failed to read document {path}: {message}")]
    Read { path: String, message: String },
}

#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Passages relevant to `query`, best first.
    async fn retrieve(&self, query: &str) -> Result<Vec<ContextPassage>, RetrievalError>;

    /// Rendered passages separated by blank lines.
    ///
    /// Retrieval failures degrade to empty context: an answer without
    /// documentation beats no answer.
    async fn make_context(&self, query: &str) -> String {
        match self.retrieve(query).await {
            Ok(passages) => passages
                .iter()
                .map(ContextPassage::render)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Err(e) => {
                tracing::warn!(error = %e, "Context retrieval failed, continuing without context");
                String::new()
            }
        }
    }
}
