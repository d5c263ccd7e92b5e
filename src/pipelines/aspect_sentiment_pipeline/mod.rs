//! Aspect-based sentiment analysis pipeline.
//!
//! Finds the things a text talks about ("the pizza", "battery life") and
//! decides how the text feels about each one. The pipeline parses the text,
//! pairs every noun phrase with the words that describe it through the
//! dependency tree, scores those words with a valence lexicon, adjusts for
//! nearby degree adverbs and negation, and keeps the most confident verdict
//! per aspect.
//!
//! ## Main Types
//!
//! - [`AspectSentimentPipeline`] - Runs the analysis stages over a parser and a scorer
//! - [`AspectSentimentPipelineBuilder`] - Builder for pipeline configuration and resource loading
//! - [`AspectSentiment`] - One verdict: aspect text, label, confidence, span and raw polarity
//! - [`AnalyzerConfig`] - Thresholds, modifier factors and closed vocabularies
//!
//! ## Usage Example
//!
//! ```rust
//! use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;
//!
//! let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
//!
//! for result in pipeline.analyze("The pizza was great but the service was bad")? {
//!     println!("{}: {} ({:.2})", result.aspect, result.sentiment, result.confidence);
//! }
//! # Ok::<(), aspect_sentiment::core::AbsaError>(())
//! ```

pub mod aggregate;
pub mod aspects;
pub mod builder;
pub mod modifiers;
pub mod negation;
pub mod normalizer;
pub mod pairing;
pub mod pipeline;
pub mod scoring;

pub use builder::AspectSentimentPipelineBuilder;
pub use pipeline::AspectSentimentPipeline;

pub use crate::core::{
    AnalyzerConfig, AspectSentiment, PolarityBreakdown, SentimentLabel, TextSpan,
};
