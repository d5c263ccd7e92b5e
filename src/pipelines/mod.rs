pub mod aspect_sentiment_pipeline;

pub use aspect_sentiment_pipeline::{AspectSentimentPipeline, AspectSentimentPipelineBuilder};

use crate::core::{AspectSentiment, Result};

/// Common interface of every aspect sentiment analyzer.
///
/// Lets callers swap the rule-based pipeline for another strategy without
/// changing how results are consumed.
pub trait AspectSentimentAnalyzer {
    /// Aspects found in `text`, one record per aspect.
    fn analyze(&self, text: &str) -> Result<Vec<AspectSentiment>>;
}
