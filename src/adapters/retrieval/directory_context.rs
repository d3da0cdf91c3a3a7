//! Directory-backed context provider.
//!
//! Loads the shop's text documentation (`*.txt`, `*.md`) once at start-up,
//! cuts it into overlapping character windows and ranks windows against a
//! query by shared terms. Matching ignores case and accents, so "memoire"
//! finds "mémoire".
//!
//! PDF manuals are not indexed. Each one found is logged at `warn` so a
//! manual that never shows up in answers is easy to spot.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::ports::{ContextPassage, ContextProvider, RetrievalError};

/// Terms shorter than this carry no signal ("le", "de", "un").
const MIN_TERM_CHARS: usize = 3;

const EXTENSIONS: &[&str] = &["txt", "md"];

/// Documentation formats that are recognised but not indexed.
const UNINDEXED_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Debug, Clone)]
pub struct DirectoryContextConfig {
    pub documents_dir: PathBuf,
    /// Number of passages returned per query.
    pub top_k: usize,
    /// Window size in characters.
    pub chunk_size: usize,
    /// Characters shared by consecutive windows. Must be below `chunk_size`.
    pub chunk_overlap: usize,
}

impl DirectoryContextConfig {
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
            top_k: 3,
            chunk_size: 800,
            chunk_overlap: 100,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_chunking(mut self, chunk_size: usize, chunk_overlap: usize) -> Self {
        self.chunk_size = chunk_size;
        self.chunk_overlap = chunk_overlap;
        self
    }
}

#[derive(Debug, Clone)]
struct Chunk {
    source: String,
    text: String,
    terms: HashSet<String>,
}

/// In-memory index over a documentation directory.
#[derive(Debug, Clone)]
pub struct DirectoryContextProvider {
    chunks: Vec<Chunk>,
    top_k: usize,
}

impl DirectoryContextProvider {
    /// Reads and indexes every document under `config.documents_dir`.
    ///
    /// A missing directory, or one without any document, is an error.
    pub async fn load(config: &DirectoryContextConfig) -> Result<Self, RetrievalError> {
        let root = &config.documents_dir;
        if !fs::metadata(root).await.map(|m| m.is_dir()).unwrap_or(false) {
            return Err(RetrievalError::SourceUnavailable(root.display().to_string()));
        }

        let found = collect_documents(root).await?;
        for path in &found.unindexed {
            tracing::warn!(path = %path.display(), "Skipping document in unsupported format");
        }

        let mut chunks = Vec::new();
        for path in found.documents {
            let text = fs::read_to_string(&path)
                .await
                .map_err(|e| RetrievalError::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            let source = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();

            for window in split_windows(&text, config.chunk_size, config.chunk_overlap) {
                chunks.push(Chunk {
                    source: source.clone(),
                    terms: terms(&window),
                    text: window,
                });
            }
        }

        if chunks.is_empty() {
            return Err(RetrievalError::Empty(root.display().to_string()));
        }

        tracing::info!(
            documents_dir = %root.display(),
            chunks = chunks.len(),
            "Documentation indexed"
        );

        Ok(Self {
            chunks,
            top_k: config.top_k.max(1),
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[async_trait]
impl ContextProvider for DirectoryContextProvider {
    async fn retrieve(&self, query: &str) -> Result<Vec<ContextPassage>, RetrievalError> {
        let wanted = terms(query);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, &Chunk)> = self
            .chunks
            .iter()
            .map(|chunk| (chunk.terms.intersection(&wanted).count(), chunk))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable: equal scores keep document order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(self.top_k)
            .map(|(_, chunk)| ContextPassage::new(chunk.source.clone(), chunk.text.clone()))
            .collect())
    }
}

#[derive(Debug, Default)]
struct Collected {
    documents: Vec<PathBuf>,
    unindexed: Vec<PathBuf>,
}

/// Documents under `root`, depth first, in file name order.
async fn collect_documents(root: &Path) -> Result<Collected, RetrievalError> {
    let mut pending = vec![root.to_path_buf()];
    let mut found = Collected::default();

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| RetrievalError::Read {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;

        let read_error = |e: std::io::Error| RetrievalError::Read {
            path: dir.display().to_string(),
            message: e.to_string(),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
            let is_dir = entry.file_type().await.map_err(read_error)?.is_dir();
            paths.push((entry.path(), is_dir));
        }
        paths.sort();

        for (path, is_dir) in paths {
            if is_dir {
                pending.push(path);
            } else if has_extension(&path, EXTENSIONS) {
                found.documents.push(path);
            } else if has_extension(&path, UNINDEXED_EXTENSIONS) {
                found.unindexed.push(path);
            }
        }
    }

    found.documents.sort();
    found.unindexed.sort();
    Ok(found)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Overlapping windows of `size` characters, trimmed, blanks dropped.
fn split_windows(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let size = size.max(1);
    let step = size.saturating_sub(overlap).max(1);

    let mut windows = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if !trimmed.is_empty() {
            windows.push(trimmed.to_string());
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }
    windows
}

/// Lower-cased, accent-stripped alphanumeric terms of at least three characters.
fn terms(text: &str) -> HashSet<String> {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn docs(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await.unwrap();
            }
            fs::write(path, content).await.unwrap();
        }
        dir
    }

    #[test]
    fn terms_fold_case_and_accents() {
        let found = terms("Mémoire DDR4, 16 Go : très RAPIDE");

        assert!(found.contains("memoire"));
        assert!(found.contains("ddr4"));
        assert!(found.contains("tres"));
        assert!(found.contains("rapide"));
        assert!(!found.contains("go"));
        assert!(!found.contains("16"));
    }

    #[test]
    fn windows_overlap() {
        let windows = split_windows("abcdefghij", 4, 1);
        assert_eq!(windows, vec!["abcd", "defg", "ghij"]);
    }

    #[test]
    fn short_text_is_a_single_window() {
        assert_eq!(split_windows("  garantie  ", 800, 100), vec!["garantie"]);
        assert!(split_windows("   ", 800, 100).is_empty());
    }

    #[test]
    fn windows_count_characters_not_bytes() {
        let windows = split_windows("ééééé", 2, 0);
        assert_eq!(windows, vec!["éé", "éé", "é"]);
    }

    #[tokio::test]
    async fn collects_nested_documents_and_sets_pdf_aside() {
        let dir = docs(&[
            ("faq.md", "Questions fréquentes"),
            ("manuels/serveur.pdf", "%PDF-1.4"),
            ("manuels/serveur.txt", "Installation du serveur"),
            ("photo.png", "binary"),
        ])
        .await;

        let found = collect_documents(dir.path()).await.unwrap();

        assert_eq!(
            found.documents,
            vec![dir.path().join("faq.md"), dir.path().join("manuels/serveur.txt")]
        );
        assert_eq!(found.unindexed, vec![dir.path().join("manuels/serveur.pdf")]);
    }

    #[tokio::test]
    async fn pdf_only_directory_is_empty() {
        let dir = docs(&[("manuel.pdf", "%PDF-1.4 garantie")]).await;
        let config = DirectoryContextConfig::new(dir.path());

        let err = DirectoryContextProvider::load(&config).await.unwrap_err();

        assert!(matches!(err, RetrievalError::Empty(_)));
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let config = DirectoryContextConfig::new("/definitely/not/here");

        let err = DirectoryContextProvider::load(&config).await.unwrap_err();

        assert!(matches!(err, RetrievalError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn directory_without_documents_is_an_error() {
        let dir = docs(&[("image.png", "binary")]).await;
        let config = DirectoryContextConfig::new(dir.path());

        let err = DirectoryContextProvider::load(&config).await.unwrap_err();

        assert!(matches!(err, RetrievalError::Empty(_)));
    }

    #[tokio::test]
    async fn retrieves_best_matching_passages_first() {
        let dir = docs(&[
            ("garantie.txt", "Tous nos produits sont garantis deux ans."),
            (
                "livraison.md",
                "La livraison est gratuite. Livraison express en 24h pour les produits en stock.",
            ),
            ("sav/retour.txt", "Les retours sont acceptés sous 14 jours."),
        ])
        .await;
        let provider = DirectoryContextProvider::load(&DirectoryContextConfig::new(dir.path()))
            .await
            .unwrap();

        let passages = provider
            .retrieve("Quel délai de livraison pour vos produits ?")
            .await
            .unwrap();

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].source, "livraison.md");
        assert_eq!(passages[1].source, "garantie.txt");
    }

    #[tokio::test]
    async fn nested_documents_keep_relative_source() {
        let dir = docs(&[("sav/retour.txt", "Les retours sont acceptés sous 14 jours.")]).await;
        let provider = DirectoryContextProvider::load(&DirectoryContextConfig::new(dir.path()))
            .await
            .unwrap();

        let passages = provider.retrieve("retours acceptes").await.unwrap();

        assert_eq!(passages.len(), 1);
        assert_eq!(
            Path::new(&passages[0].source),
            Path::new("sav").join("retour.txt")
        );
    }

    #[tokio::test]
    async fn top_k_bounds_the_result() {
        let dir = docs(&[
            ("a.txt", "clavier mécanique"),
            ("b.txt", "clavier sans fil"),
            ("c.txt", "clavier gaming"),
        ])
        .await;
        let config = DirectoryContextConfig::new(dir.path()).with_top_k(2);
        let provider = DirectoryContextProvider::load(&config).await.unwrap();

        let passages = provider.retrieve("clavier").await.unwrap();

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].source, "a.txt");
    }

    #[tokio::test]
    async fn unrelated_query_yields_empty_context() {
        let dir = docs(&[("a.txt", "clavier mécanique")]).await;
        let provider = DirectoryContextProvider::load(&DirectoryContextConfig::new(dir.path()))
            .await
            .unwrap();

        assert!(provider.retrieve("imprimante").await.unwrap().is_empty());
        assert_eq!(provider.make_context("de la").await, "");
    }
}
