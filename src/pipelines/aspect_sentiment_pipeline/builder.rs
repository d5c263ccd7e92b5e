use std::path::PathBuf;
use std::sync::Arc;

use super::pipeline::AspectSentimentPipeline;
use crate::core::{global_cache, AnalyzerConfig, Result};
use crate::loaders::{ConfigLoader, HubFile};
use crate::models::{
    DependencyParser, LexiconScorer, LexiconSource, PolarityScorer, RuleParser,
    RuleParserOptions,
};

pub struct AspectSentimentPipelineBuilder<P: DependencyParser, S: PolarityScorer> {
    parser_options: P::Options,
    scorer_options: S::Options,
    config: Option<AnalyzerConfig>,
    config_loader: Option<ConfigLoader>,
    modifier_window: Option<usize>,
    confidence_cap: Option<f64>,
    share_resources: bool,
}

impl<P: DependencyParser, S: PolarityScorer> AspectSentimentPipelineBuilder<P, S> {
    pub fn new(parser_options: P::Options, scorer_options: S::Options) -> Self {
        Self {
            parser_options,
            scorer_options,
            config: None,
            config_loader: None,
            modifier_window: None,
            confidence_cap: None,
            share_resources: true,
        }
    }

    /// Replaces the default analyzer settings.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self.config_loader = None;
        self
    }

    /// Reads analyzer settings from a JSON file when the pipeline is built.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_loader = Some(ConfigLoader::File(path.into()));
        self.config = None;
        self
    }

    /// Downloads analyzer settings from a Hugging Face Hub model repository.
    pub fn config_from_hub(mut self, repo: &str, filename: &str) -> Self {
        self.config_loader = Some(ConfigLoader::Hub(HubFile::model(repo, filename)));
        self.config = None;
        self
    }

    pub fn parser_options(mut self, options: P::Options) -> Self {
        self.parser_options = options;
        self
    }

    pub fn scorer_options(mut self, options: S::Options) -> Self {
        self.scorer_options = options;
        self
    }

    /// Overrides `modifier_window` on whichever config is used.
    pub fn modifier_window(mut self, window: usize) -> Self {
        self.modifier_window = Some(window);
        self
    }

    /// Overrides `confidence_cap` on whichever config is used.
    pub fn confidence_cap(mut self, cap: f64) -> Self {
        self.confidence_cap = Some(cap);
        self
    }

    /// Whether to reuse parsers and scorers loaded by other pipelines with
    /// the same options. On by default.
    pub fn share_resources(mut self, share: bool) -> Self {
        self.share_resources = share;
        self
    }

    pub fn build(self) -> Result<AspectSentimentPipeline<P, S>>
    where
        P: 'static,
        S: 'static,
    {
        let mut config = match &self.config_loader {
            Some(loader) => loader.load()?,
            None => self.config.unwrap_or_default(),
        };
        if let Some(window) = self.modifier_window {
            config.modifier_window = window;
        }
        if let Some(cap) = self.confidence_cap {
            config.confidence_cap = cap;
        }
        config.validate()?;

        let (parser, scorer) = if self.share_resources {
            let parser_key = format!("{:?}", self.parser_options);
            let scorer_key = format!("{:?}", self.scorer_options);
            let parser_options = self.parser_options;
            let scorer_options = self.scorer_options;
            (
                global_cache().get_or_load(&parser_key, || P::load(parser_options))?,
                global_cache().get_or_load(&scorer_key, || S::load(scorer_options))?,
            )
        } else {
            (
                Arc::new(P::load(self.parser_options)?),
                Arc::new(S::load(self.scorer_options)?),
            )
        };

        Ok(AspectSentimentPipeline {
            parser,
            scorer,
            config,
        })
    }
}

impl AspectSentimentPipelineBuilder<RuleParser, LexiconScorer> {
    /// The built-in English rule parser with the embedded valence lexicon.
    pub fn rule_based() -> Self {
        Self::new(RuleParserOptions::default(), LexiconSource::Embedded)
    }

    /// Scores with a VADER-format lexicon file instead of the embedded table.
    pub fn lexicon_file(self, path: impl Into<PathBuf>) -> Self {
        self.scorer_options(LexiconSource::File(path.into()))
    }

    /// Scores with a VADER-format lexicon stored in a Hugging Face Hub model repository.
    pub fn lexicon_from_hub(self, repo: &str, filename: &str) -> Self {
        self.scorer_options(LexiconSource::Hub(HubFile::model(repo, filename)))
    }

    /// Extra words the rule parser should tag as adjectives.
    pub fn adjectives<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.parser_options = self.parser_options.with_adjectives(words);
        self
    }

    /// Extra regular verbs (base forms) for the rule parser.
    pub fn verbs<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.parser_options = self.parser_options.with_verbs(words);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AbsaError;

    #[test]
    fn test_shared_resources_are_reused() {
        let first = AspectSentimentPipelineBuilder::rule_based().build().unwrap();
        let second = AspectSentimentPipelineBuilder::rule_based()
            .modifier_window(5)
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(&first.parser, &second.parser));
        assert!(Arc::ptr_eq(&first.scorer, &second.scorer));
        assert_eq!(second.config().modifier_window, 5);
        assert_eq!(first.config().modifier_window, 3);
    }

    #[test]
    fn test_private_resources() {
        let shared = AspectSentimentPipelineBuilder::rule_based().build().unwrap();
        let private = AspectSentimentPipelineBuilder::rule_based()
            .share_resources(false)
            .build()
            .unwrap();
        assert!(!Arc::ptr_eq(&shared.scorer, &private.scorer));
    }

    #[test]
    fn test_invalid_overrides_fail_the_build() {
        let err = AspectSentimentPipelineBuilder::rule_based()
            .confidence_cap(0.0)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AbsaError::Config(_)));
    }

    #[test]
    fn test_missing_lexicon_fails_the_build() {
        let err = AspectSentimentPipelineBuilder::rule_based()
            .lexicon_file("/definitely/not/a/lexicon.txt")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AbsaError::Config(_)));
    }

    #[test]
    fn test_parser_vocabulary() {
        let pipeline = AspectSentimentPipelineBuilder::rule_based()
            .adjectives(["scrumptious"])
            .share_resources(false)
            .build()
            .unwrap();
        let doc = pipeline.parser().parse("The cake was scrumptious").unwrap();
        assert_eq!(doc.tokens()[3].pos(), crate::models::PartOfSpeech::Adj);
    }
}
