//! Resource loading from local files and the Hugging Face Hub.
//!
//! ## Main Types
//!
//! - [`HubFile`] - One file in a Hub repository, fetched with retry logic
//! - [`LexiconLoader`] - Loads a [`LexiconScorer`] from any [`LexiconSource`]
//! - [`ConfigLoader`] - Loads an [`AnalyzerConfig`] from a file or the Hub
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use aspect_sentiment::loaders::{HubFile, LexiconLoader};
//! use aspect_sentiment::models::LexiconSource;
//!
//! let source = LexiconSource::Hub(HubFile::dataset("someone/vader-lexicon", "vader_lexicon.txt"));
//! let scorer = LexiconLoader::new(source).load()?;
//! println!("{} entries", scorer.len());
//! # Ok::<(), aspect_sentiment::core::AbsaError>(())
//! ```
//!
//! Hub downloads are cached on disk by `hf-hub`; lock-acquisition failures
//! from concurrent downloads are retried with exponential backoff.

use std::path::PathBuf;
use std::time::Duration;

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};

use crate::core::{AbsaError, AnalyzerConfig, Result};
use crate::models::{LexiconScorer, LexiconSource, PolarityScorer};

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubRepoKind {
    Model,
    Dataset,
}

/// A file in a Hugging Face Hub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HubFile {
    pub repo: String,
    pub filename: String,
    pub kind: HubRepoKind,
}

impl HubFile {
    pub fn model(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
            kind: HubRepoKind::Model,
        }
    }

    pub fn dataset(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
            kind: HubRepoKind::Dataset,
        }
    }

    /// Download the file (or reuse the local copy) and return its path.
    pub fn fetch(&self) -> Result<PathBuf> {
        let api = ApiBuilder::new()
            .build()
            .map_err(|e| AbsaError::Hub(e.to_string()))?;
        let repo_type = match self.kind {
            HubRepoKind::Model => RepoType::Model,
            HubRepoKind::Dataset => RepoType::Dataset,
        };
        let repo = api.repo(Repo::new(self.repo.clone(), repo_type));

        let mut attempt = 0;
        loop {
            match repo.get(&self.filename) {
                Ok(path) => return Ok(path),
                Err(e) => {
                    let message = e.to_string();
                    attempt += 1;
                    if message.contains("Lock acquisition failed") && attempt < MAX_RETRIES {
                        let wait = Duration::from_millis(100 * (1 << attempt));
                        tracing::debug!(repo = %self.repo, attempt, "hub lock busy, retrying");
                        std::thread::sleep(wait);
                        continue;
                    }
                    return Err(AbsaError::Hub(format!(
                        "{}/{}: {message}",
                        self.repo, self.filename
                    )));
                }
            }
        }
    }
}

/// Loads a valence lexicon scorer.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub source: LexiconSource,
}

impl LexiconLoader {
    pub fn new(source: LexiconSource) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<LexiconScorer> {
        LexiconScorer::load(self.source.clone())
    }
}

/// Where an [`AnalyzerConfig`] is read from.
#[derive(Debug, Clone)]
pub enum ConfigLoader {
    File(PathBuf),
    Hub(HubFile),
}

impl ConfigLoader {
    pub fn load(&self) -> Result<AnalyzerConfig> {
        let path = match self {
            ConfigLoader::File(path) => path.clone(),
            ConfigLoader::Hub(file) => file.fetch()?,
        };
        AnalyzerConfig::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_lexicon_loader_reads_file() {
        let file = temp_file("stellar\t3.0\t0.5\t[3]\nmeh\t-0.5\t0.5\t[0]\n");

        let source = LexiconSource::File(file.path().to_path_buf());
        let scorer = LexiconLoader::new(source).load().unwrap();
        assert_eq!(scorer.len(), 2);
        assert!(scorer.polarity_scores("stellar").unwrap().compound > 0.5);
    }

    #[test]
    fn test_lexicon_loader_embedded() {
        let scorer = LexiconLoader::new(LexiconSource::Embedded).load().unwrap();
        assert!(!scorer.is_empty());
    }

    #[test]
    fn test_config_loader_reads_file() {
        let file = temp_file(r#"{ "modifier_window": 5 }"#);

        let config = ConfigLoader::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(config.modifier_window, 5);
    }

    #[test]
    fn test_config_loader_rejects_invalid_json() {
        let file = temp_file("{ not json");

        let err = ConfigLoader::File(file.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(err, AbsaError::Json(_)));
    }
}
