use aspect_sentiment::pipelines::aspect_sentiment_pipeline::aggregate::aggregate;
use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;
use aspect_sentiment::{LexiconScorer, RuleParser};

type RuleBased = AspectSentimentPipeline<RuleParser, LexiconScorer>;

fn only(pipeline: &RuleBased, text: &str) -> anyhow::Result<AspectSentiment> {
    let mut results = pipeline.analyze(text)?;
    anyhow::ensure!(
        results.len() == 1,
        "expected one aspect in {text:?}, got {results:?}"
    );
    Ok(results.remove(0))
}

#[test]
fn negation_inverts_polarity() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let plain = only(&pipeline, "The food was good")?;
    let negated = only(&pipeline, "The food was not good")?;
    assert_eq!(plain.aspect, "food");
    assert_eq!(plain.sentiment, SentimentLabel::Positive);
    assert_eq!(negated.aspect, "food");
    assert_eq!(negated.sentiment, SentimentLabel::Negative);
    Ok(())
}

#[test]
fn weak_opinions_are_neutral() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let result = only(&pipeline, "The service was okay")?;
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    Ok(())
}

#[test]
fn intensifiers_never_lower_confidence() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let base = only(&pipeline, "The service was bad")?;
    let intensified = only(&pipeline, "The service was extremely bad")?;
    assert_eq!(intensified.aspect, "service");
    assert_eq!(intensified.sentiment, SentimentLabel::Negative);
    assert!(intensified.confidence >= base.confidence);
    Ok(())
}

#[test]
fn softeners_never_raise_confidence() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let base = only(&pipeline, "The service was bad")?;
    let softened = only(&pipeline, "The service was somewhat bad")?;
    assert_eq!(softened.aspect, "service");
    assert!(softened.confidence <= base.confidence);
    Ok(())
}

#[test]
fn normalization_is_idempotent() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    for text in [
        "",
        "great pizza 😂😂",
        "service :( but food :)",
        "💘❤️😡😢😔",
        "plain text",
    ] {
        let once = pipeline.normalize(text);
        assert_eq!(pipeline.normalize(&once), once);
    }
    Ok(())
}

#[test]
fn empty_input_yields_nothing() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    assert!(pipeline.analyze("")?.is_empty());
    assert!(pipeline.analyze("   ")?.is_empty());
    assert!(pipeline.judgments("\n\t")?.is_empty());
    Ok(())
}

#[test]
fn aggregation_keeps_the_most_confident_record() {
    let merged = aggregate(vec![
        AspectSentiment::new("pizza", SentimentLabel::Positive, 0.4),
        AspectSentiment::new("pizza", SentimentLabel::Negative, 0.9),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].aspect, "pizza");
    assert_eq!(merged[0].confidence, 0.9);
}

#[test]
fn labels_follow_final_scores() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let texts = [
        "The pizza was great but the service was bad",
        "The food was not good",
        "The service was extremely bad",
        "The staff was rude.",
        "The service was okay",
    ];
    for text in texts {
        for result in pipeline.judgments(text)? {
            assert!((0.0..=1.0).contains(&result.confidence));
            match result.sentiment {
                SentimentLabel::Neutral => {}
                _ => assert!(result.confidence > 0.3, "{result:?}"),
            }
        }
    }
    Ok(())
}
