use std::sync::Arc;

use super::aggregate::aggregate;
use super::aspects::{aspect_for, extract_aspects};
use super::normalizer::normalize;
use super::pairing::find_pairs;
use super::scoring::score_pair;
use crate::core::{AbsaError, AnalyzerConfig, AspectSentiment, Result};
use crate::models::{DependencyParser, ParsedDocument, PolarityScorer};
use crate::pipelines::AspectSentimentAnalyzer;

/// Rule-based aspect sentiment analysis over a parser and a polarity scorer.
///
/// Built with [`AspectSentimentPipelineBuilder`](super::AspectSentimentPipelineBuilder).
/// The pipeline holds no per-call state, so one instance can serve many
/// threads at once.
pub struct AspectSentimentPipeline<P: DependencyParser, S: PolarityScorer> {
    pub(crate) parser: Arc<P>,
    pub(crate) scorer: Arc<S>,
    pub(crate) config: AnalyzerConfig,
}

impl<P: DependencyParser, S: PolarityScorer> AspectSentimentPipeline<P, S> {
    /// One record per aspect, keeping the most confident judgment.
    ///
    /// Empty or whitespace-only text yields an empty result. A parser
    /// failure is returned as [`AbsaError::Parse`].
    pub fn analyze(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        Ok(aggregate(self.judgments(text)?))
    }

    /// Every (aspect, opinion) judgment in the text, before aggregation.
    pub fn judgments(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let normalized = self.normalize(text);
        tracing::debug!(text = %normalized, "normalized input");

        let doc = self.parser.parse(&normalized).map_err(|e| match e {
            AbsaError::Parse(_) => e,
            other => AbsaError::parse(other.to_string()),
        })?;
        Ok(self.judge(&doc))
    }

    /// Runs extraction, pairing, scoring and aggregation on a document that
    /// was parsed elsewhere, for example with
    /// [`ParsedDocument::from_spacy_json`]. The document text is used as is.
    pub fn analyze_document(&self, doc: &ParsedDocument) -> Vec<AspectSentiment> {
        aggregate(self.judge(doc))
    }

    /// Analyzes each text independently; one failure does not affect the others.
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<Result<Vec<AspectSentiment>>> {
        texts.iter().map(|text| self.analyze(text)).collect()
    }

    /// The text as the parser sees it, with emoji replaced by words.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.config)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    fn judge(&self, doc: &ParsedDocument) -> Vec<AspectSentiment> {
        let _stage = tracing::trace_span!("judge", tokens = doc.len()).entered();

        let aspects = extract_aspects(doc, &self.config);
        tracing::debug!(
            aspects = ?aspects.iter().map(|a| a.text.as_str()).collect::<Vec<_>>(),
            "extracted aspect candidates"
        );
        if aspects.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::new();
        for pair in find_pairs(doc) {
            let Some(aspect) = aspect_for(&aspects, pair.aspect) else {
                tracing::trace!(?pair, "aspect token outside every candidate");
                continue;
            };
            let opinion = &doc.tokens()[pair.opinion];
            match score_pair(doc, aspect, opinion, self.scorer.as_ref(), &self.config) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        aspect = %aspect.text,
                        opinion = opinion.text(),
                        error = %e,
                        "skipping opinion"
                    );
                }
            }
        }
        records
    }
}

impl<P: DependencyParser, S: PolarityScorer> AspectSentimentAnalyzer
    for AspectSentimentPipeline<P, S>
{
    fn analyze(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        AspectSentimentPipeline::analyze(self, text)
    }
}

impl<P: DependencyParser, S: PolarityScorer> Clone for AspectSentimentPipeline<P, S> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            scorer: Arc::clone(&self.scorer),
            config: self.config.clone(),
        }
    }
}
