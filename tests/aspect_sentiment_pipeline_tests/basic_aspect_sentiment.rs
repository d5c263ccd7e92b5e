use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;
use aspect_sentiment::AspectSentimentAnalyzer;

fn label_of(results: &[AspectSentiment], aspect: &str) -> Option<SentimentLabel> {
    results
        .iter()
        .find(|r| r.aspect == aspect)
        .map(|r| r.sentiment)
}

#[test]
fn pizza_and_service() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let results = pipeline.analyze("The pizza was great but the service was bad")?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].aspect, "pizza");
    assert_eq!(results[0].sentiment, SentimentLabel::Positive);
    assert!(results[0].confidence > 0.3);
    assert_eq!(results[0].text_span, Some(TextSpan::new(4, 9)));
    assert_eq!(results[1].aspect, "service");
    assert_eq!(results[1].sentiment, SentimentLabel::Negative);
    assert!(results[1].confidence > 0.3);
    assert!(results[1].polarity.is_some_and(|p| p.compound < 0.0));
    Ok(())
}

#[test]
fn sentences_joined_without_space() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let text = "The pizza was great.The service was bad.";
    let results = pipeline.analyze(text)?;

    assert_eq!(results.len(), 2);
    assert_eq!(label_of(&results, "pizza"), Some(SentimentLabel::Positive));
    assert_eq!(label_of(&results, "service"), Some(SentimentLabel::Negative));
    Ok(())
}

#[test]
fn attributive_adjectives() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let results = pipeline.analyze("Delicious food and friendly staff!")?;
    assert_eq!(label_of(&results, "food"), Some(SentimentLabel::Positive));
    assert_eq!(label_of(&results, "staff"), Some(SentimentLabel::Positive));
    Ok(())
}

#[test]
fn verbal_opinion() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let results = pipeline.analyze("The camera disappoints.")?;
    assert_eq!(label_of(&results, "camera"), Some(SentimentLabel::Negative));
    Ok(())
}

#[test]
fn most_confident_judgment_wins() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let text = "The great pizza was bad.";

    let judgments = pipeline.judgments(text)?;
    assert_eq!(judgments.len(), 2);
    assert!(judgments.iter().all(|j| j.aspect == "pizza"));

    let results = pipeline.analyze(text)?;
    assert_eq!(results.len(), 1);
    let best = judgments
        .iter()
        .map(|j| j.confidence)
        .fold(f64::MIN, f64::max);
    assert_eq!(results[0].confidence, best);
    assert_eq!(results[0].sentiment, SentimentLabel::Positive);
    Ok(())
}

#[test]
fn emoji_words_are_not_aspects() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    assert!(pipeline.analyze("❤️")?.is_empty());
    assert_eq!(pipeline.normalize("❤️"), " love ");
    Ok(())
}

#[test]
fn usable_as_trait_object_across_threads() -> anyhow::Result<()> {
    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let analyzer: &(dyn AspectSentimentAnalyzer + Sync) = &pipeline;

    let texts = [
        "The pizza was great.",
        "The service was bad.",
        "The staff was rude.",
    ];
    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| scope.spawn(move || analyzer.analyze(text)))
            .collect();
        for handle in handles {
            let results = handle.join().expect("analysis thread panicked")?;
            assert_eq!(results.len(), 1);
        }
        anyhow::Ok(())
    })?;
    Ok(())
}
