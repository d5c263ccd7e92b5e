use aspect_sentiment::pipelines::aspect_sentiment_pipeline::*;
use aspect_sentiment::ParsedDocument;

// Output of spaCy's `Doc.to_json()` for "The café is great, the wait is not bad."
// trimmed to the fields the importer reads. Offsets are in characters.
const SPACY_JSON: &str = r#"{
    "text": "The café is great, the wait is not bad.",
    "ents": [],
    "sents": [{"start": 0, "end": 39}],
    "tokens": [
        {"id": 0, "start": 0, "end": 3, "tag": "DT", "pos": "DET", "morph": "", "lemma": "the", "dep": "det", "head": 1},
        {"id": 1, "start": 4, "end": 8, "tag": "NN", "pos": "NOUN", "morph": "", "lemma": "café", "dep": "nsubj", "head": 2},
        {"id": 2, "start": 9, "end": 11, "tag": "VBZ", "pos": "AUX", "morph": "", "lemma": "be", "dep": "ccomp", "head": 7},
        {"id": 3, "start": 12, "end": 17, "tag": "JJ", "pos": "ADJ", "morph": "", "lemma": "great", "dep": "acomp", "head": 2},
        {"id": 4, "start": 17, "end": 18, "tag": ",", "pos": "PUNCT", "morph": "", "lemma": ",", "dep": "punct", "head": 7},
        {"id": 5, "start": 19, "end": 22, "tag": "DT", "pos": "DET", "morph": "", "lemma": "the", "dep": "det", "head": 6},
        {"id": 6, "start": 23, "end": 27, "tag": "NN", "pos": "NOUN", "morph": "", "lemma": "wait", "dep": "nsubj", "head": 7},
        {"id": 7, "start": 28, "end": 30, "tag": "VBZ", "pos": "AUX", "morph": "", "lemma": "be", "dep": "ROOT", "head": 7},
        {"id": 8, "start": 31, "end": 34, "tag": "RB", "pos": "PART", "morph": "", "lemma": "not", "dep": "neg", "head": 7},
        {"id": 9, "start": 35, "end": 38, "tag": "JJ", "pos": "ADJ", "morph": "", "lemma": "bad", "dep": "acomp", "head": 7},
        {"id": 10, "start": 38, "end": 39, "tag": ".", "pos": "PUNCT", "morph": "", "lemma": ".", "dep": "punct", "head": 7}
    ]
}"#;

#[test]
fn analyzes_imported_spacy_parse() -> anyhow::Result<()> {
    let doc = ParsedDocument::from_spacy_json(SPACY_JSON)?;
    assert_eq!(doc.len(), 11);
    assert_eq!(doc.noun_chunks().len(), 2);

    let pipeline = AspectSentimentPipelineBuilder::rule_based().build()?;
    let results = pipeline.analyze_document(&doc);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].aspect, "café");
    assert_eq!(results[0].sentiment, SentimentLabel::Positive);
    // spaCy counts characters; spans are bytes, and "é" takes two.
    assert_eq!(results[0].text_span, Some(TextSpan::new(4, 9)));
    assert_eq!(results[1].aspect, "wait");
    assert_eq!(results[1].sentiment, SentimentLabel::Positive);
    Ok(())
}

#[test]
fn rejects_broken_spacy_json() {
    let broken = r#"{"text": "pizza", "tokens": [{"id": 0, "start": 0, "end": 5, "head": 4}]}"#;
    assert!(ParsedDocument::from_spacy_json(broken).is_err());
    assert!(ParsedDocument::from_spacy_json("not json").is_err());
}
