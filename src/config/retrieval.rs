//! Document retrieval configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Document retrieval configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Index the documentation directory. When off, answers carry no context.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directory holding `.txt` and `.md` documentation
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,

    /// Passages returned per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Window size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters shared by consecutive windows
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl RetrievalConfig {
    /// Validate retrieval configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }
        if self.chunk_size == 0 || self.chunk_overlap >= self.chunk_size {
            return Err(ValidationError::InvalidChunking);
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            documents_dir: default_documents_dir(),
            top_k: default_top_k(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("donnees")
}

fn default_top_k() -> usize {
    3
}

fn default_chunk_size() -> usize {
    800
}

fn default_chunk_overlap() -> usize {
    100
}
