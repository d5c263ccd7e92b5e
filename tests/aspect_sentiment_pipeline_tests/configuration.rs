use std::path::PathBuf;

use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;
use aspect_sentiment::AbsaError;
use tempfile::{tempdir, TempDir};

/// Writes `content` into a fresh directory; the file goes away with the returned `TempDir`.
fn temp_file(name: &str, content: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

#[test]
fn config_file_moves_thresholds() -> anyhow::Result<()> {
    let (_dir, path) = temp_file("strict.json", r#"{ "positive_threshold": 0.7 }"#)?;
    let pipeline = AspectSentimentPipelineBuilder::rule_based()
        .config_file(&path)
        .build()?;

    assert_eq!(pipeline.config().positive_threshold, 0.7);
    let results = pipeline.analyze("The pizza was great")?;
    assert_eq!(results[0].sentiment, SentimentLabel::Neutral);
    Ok(())
}

#[test]
fn confidence_cap_limits_every_record() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based()
        .confidence_cap(0.5)
        .build()?;
    let results = pipeline.analyze("The pizza was extremely great but the service was bad")?;
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.confidence <= 0.5));
    Ok(())
}

#[test]
fn custom_negations() -> anyhow::Result<()> {
    let config = AnalyzerConfig {
        negations: vec!["hardly".to_string()],
        ..AnalyzerConfig::default()
    };
    let pipeline = AspectSentimentPipelineBuilder::rule_based()
        .config(config)
        .build()?;
    // "not" is still attached as `neg` by the parser, so structural negation holds.
    let results = pipeline.analyze("The food was not good")?;
    assert_eq!(results[0].sentiment, SentimentLabel::Negative);
    Ok(())
}

#[test]
fn lexicon_file_replaces_embedded_table() -> anyhow::Result<()> {
    let (_dir, path) = temp_file(
        "inverted-lexicon.txt",
        "great\t-3.0\t0.5\t[-3, -3]\nbad\t2.5\t0.5\t[2, 3]\n",
    )?;
    let pipeline = AspectSentimentPipelineBuilder::rule_based()
        .lexicon_file(&path)
        .share_resources(false)
        .build()?;

    let results = pipeline.analyze("The pizza was great but the service was bad")?;
    assert_eq!(results[0].sentiment, SentimentLabel::Negative);
    assert_eq!(results[1].sentiment, SentimentLabel::Positive);
    Ok(())
}

#[test]
fn invalid_config_file_fails_the_build() -> anyhow::Result<()> {
    let (_dir, path) = temp_file(
        "inverted.json",
        r#"{ "positive_threshold": -0.5, "negative_threshold": 0.5 }"#,
    )?;
    let result = AspectSentimentPipelineBuilder::rule_based()
        .config_file(&path)
        .build();

    assert!(matches!(result.err(), Some(AbsaError::Config(_))));
    Ok(())
}
