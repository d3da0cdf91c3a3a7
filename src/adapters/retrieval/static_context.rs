//! Fixed-passage context provider.
//!
//! Returns the same passages for every query. Used when no documentation
//! directory is configured, and in tests.

use async_trait::async_trait;

use crate::ports::{ContextPassage, ContextProvider, RetrievalError};

#[derive(Debug, Clone, Default)]
pub struct StaticContextProvider {
    passages: Vec<ContextPassage>,
}

impl StaticContextProvider {
    /// A provider that never finds anything.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_passage(mut self, source: impl Into<String>, excerpt: impl Into<String>) -> Self {
        self.passages.push(ContextPassage::new(source, excerpt));
        self
    }
}

#[async_trait]
impl ContextProvider for StaticContextProvider {
    async fn retrieve(&self, _query: &str) -> Result<Vec<ContextPassage>, RetrievalError> {
        Ok(self.passages.clone())
    }
}
