use anyhow::Result;
use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;

    println!("Pipeline built successfully.");

    let reviews = [
        "The pizza was great but the service was bad",
        "The food was not good 😡",
        "Delicious food and friendly staff!",
        "The battery life is extremely disappointing, the screen is okay :)",
    ];

    for text in reviews {
        let results = pipeline.analyze(text)?;

        println!("\n=== Aspect Sentiment ===");
        println!("Text: \"{}\"", text);
        for result in &results {
            println!(
                "  {}: {} (confidence: {:.4})",
                result.aspect, result.sentiment, result.confidence
            );
        }
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
