//! Collaborator interfaces and their built-in implementations.
//!
//! The analysis pipeline needs two external services: a dependency parser
//! that turns text into a [`ParsedDocument`], and a polarity scorer that
//! rates short fragments. Both are loaded once from their `Options` and then
//! shared read-only, so implementations must be `Send + Sync`.

pub mod document;
pub mod implementations;

pub use document::{DependencyLabel, DocumentBuilder, ParsedDocument, PartOfSpeech, Token};
pub use implementations::{LexiconScorer, LexiconSource, RuleParser, RuleParserOptions};

use crate::core::{PolarityBreakdown, Result};

/// Turns raw text into a dependency-parsed document.
pub trait DependencyParser: Send + Sync {
    /// Everything needed to construct the parser; also used as its cache key.
    type Options: std::fmt::Debug + Clone;

    /// Construct the parser. Failures are configuration errors.
    fn load(options: Self::Options) -> Result<Self>
    where
        Self: Sized;

    /// Parse well-formed UTF-8 text. Errors here are fatal to the analysis call.
    fn parse(&self, text: &str) -> Result<ParsedDocument>;
}

/// Rates the sentiment of a short text fragment.
pub trait PolarityScorer: Send + Sync {
    /// Everything needed to construct the scorer; also used as its cache key.
    type Options: std::fmt::Debug + Clone;

    fn load(options: Self::Options) -> Result<Self>
    where
        Self: Sized;

    /// Score one fragment. An empty fragment scores as all-neutral.
    fn polarity_scores(&self, fragment: &str) -> Result<PolarityBreakdown>;
}
