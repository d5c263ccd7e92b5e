use thiserror::Error;

/// Error type returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum AbsaError {
    /// A pipeline could not be constructed: bad configuration values, a lexicon
    /// that failed to load, or a parser whose resources are missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// The dependency parser rejected the input. Fatal to the `analyze` call.
    #[error("parse failure: {0}")]
    Parse(String),

    /// The polarity scorer could not score a single opinion fragment.
    ///
    /// The pipeline skips the affected pair instead of surfacing this.
    #[error("could not score fragment {fragment:?}: {reason}")]
    Scoring { fragment: String, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fetching a file from the Hugging Face Hub failed.
    #[error("hub download failed: {0}")]
    Hub(String),
}

impl AbsaError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        AbsaError::Config(msg.into())
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        AbsaError::Parse(msg.into())
    }

    pub(crate) fn scoring(fragment: &str, reason: impl Into<String>) -> Self {
        AbsaError::Scoring {
            fragment: fragment.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AbsaError>;
