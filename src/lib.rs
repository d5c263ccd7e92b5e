//! Rule-based aspect sentiment analysis.
//!
//! ```rust
//! use aspect_sentiment::{AspectSentimentPipelineBuilder, SentimentLabel};
//!
//! let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
//! let results = pipeline.analyze("The food was not good.")?;
//! assert_eq!(results[0].aspect, "food");
//! assert_eq!(results[0].sentiment, SentimentLabel::Negative);
//! # Ok::<(), aspect_sentiment::AbsaError>(())
//! ```

pub mod core;
pub mod loaders;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use crate::core::{
    AbsaError, AnalyzerConfig, AspectSentiment, PolarityBreakdown, Result, SentimentLabel, TextSpan,
};

// Re-export the built-in collaborators and the pipeline entry points
pub use crate::models::{
    DependencyParser, LexiconScorer, ParsedDocument, PolarityScorer, RuleParser,
};
pub use crate::pipelines::{
    AspectSentimentAnalyzer, AspectSentimentPipeline, AspectSentimentPipelineBuilder,
};
