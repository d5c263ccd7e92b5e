use super::aspects::AspectCandidate;
use super::modifiers::{modifier_multiplier, scan_modifiers, Modifier};
use super::negation::has_negation;
use crate::core::{AnalyzerConfig, AspectSentiment, Result, SentimentLabel};
use crate::models::{ParsedDocument, PolarityScorer, Token};

/// Final score of one opinion after modifiers and negation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpinionScore {
    /// Signed score in `[-1, 1]`.
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: f64,
}

/// Combines a raw compound score with the opinion's context.
///
/// Modifiers scale the magnitude first, negation then flips the sign, and
/// the result is clamped to `[-1, 1]`. Every nearby adverb adds
/// `adverb_confidence_bonus` to the confidence, whether or not it changed
/// the score.
pub fn compose(
    compound: f64,
    modifiers: &[Modifier],
    negated: bool,
    config: &AnalyzerConfig,
) -> OpinionScore {
    let mut score = compound * modifier_multiplier(modifiers, config);
    if negated {
        score = -score;
    }
    let score = score.clamp(-1.0, 1.0);

    let bonus = config.adverb_confidence_bonus * modifiers.len() as f64;
    OpinionScore {
        score,
        label: SentimentLabel::from_score(
            score,
            config.positive_threshold,
            config.negative_threshold,
        ),
        confidence: (score.abs() + bonus).min(config.confidence_cap),
    }
}

/// Scores one (aspect, opinion) pair into a result record.
///
/// The fragment sent to the scorer is the opinion's subtree, so "very good"
/// is scored as a phrase. Scorer errors are returned to the caller.
pub fn score_pair<S: PolarityScorer>(
    doc: &ParsedDocument,
    aspect: &AspectCandidate,
    opinion: &Token,
    scorer: &S,
    config: &AnalyzerConfig,
) -> Result<AspectSentiment> {
    let fragment = doc.subtree_text(opinion);
    let polarity = scorer.polarity_scores(fragment)?;
    let modifiers = scan_modifiers(doc, opinion, config);
    let negated = has_negation(doc, opinion, config);
    let scored = compose(polarity.compound, &modifiers, negated, config);

    tracing::debug!(
        aspect = %aspect.text,
        opinion = fragment,
        compound = polarity.compound,
        negated,
        score = scored.score,
        label = %scored.label,
        "scored opinion"
    );

    Ok(
        AspectSentiment::new(aspect.text.clone(), scored.label, scored.confidence)
            .with_span(aspect.span)
            .with_polarity(polarity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextSpan;
    use crate::models::{DocumentBuilder, LexiconScorer};
    use crate::pipelines::aspect_sentiment_pipeline::aspects::extract_aspects;
    use crate::pipelines::aspect_sentiment_pipeline::modifiers::ModifierKind;

    fn modifier(kind: ModifierKind) -> Modifier {
        Modifier { token: 0, kind }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intensifier_scales_and_adds_confidence() {
        let config = AnalyzerConfig::default();
        let scored = compose(0.5, &[modifier(ModifierKind::Intensifier)], false, &config);
        assert!(approx(scored.score, 0.6));
        assert_eq!(scored.label, SentimentLabel::Positive);
        assert!(approx(scored.confidence, 0.7));
    }

    #[test]
    fn test_negation_flips_sign_only() {
        let config = AnalyzerConfig::default();
        let scored = compose(0.5, &[], true, &config);
        assert!(approx(scored.score, -0.5));
        assert_eq!(scored.label, SentimentLabel::Negative);
        assert!(approx(scored.confidence, 0.5));

        let softened = compose(-0.5, &[modifier(ModifierKind::Softener)], true, &config);
        assert!(approx(softened.score, 0.4));
        assert_eq!(softened.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_clamps_score_and_caps_confidence() {
        let config = AnalyzerConfig::default();
        let strong = [
            modifier(ModifierKind::Intensifier),
            modifier(ModifierKind::Intensifier),
        ];
        let scored = compose(0.9, &strong, false, &config);
        assert_eq!(scored.score, 1.0);
        assert_eq!(scored.confidence, 1.0);

        let capped = AnalyzerConfig {
            confidence_cap: 0.8,
            ..AnalyzerConfig::default()
        };
        assert!(approx(compose(-0.9, &[], false, &capped).confidence, 0.8));
    }

    #[test]
    fn test_neutral_band_still_earns_adverb_confidence() {
        let config = AnalyzerConfig::default();
        let adverbs = [
            modifier(ModifierKind::Neutral),
            modifier(ModifierKind::Neutral),
            modifier(ModifierKind::Neutral),
        ];
        let scored = compose(0.25, &adverbs, false, &config);
        assert_eq!(scored.label, SentimentLabel::Neutral);
        assert!(approx(scored.confidence, 0.55));
        assert_eq!(compose(0.3, &[], false, &config).label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_pair_with_head_negation() {
        // "the food was not good"
        let doc = DocumentBuilder::from_words(&[
            ("the", "DET", "det", 1),
            ("food", "NOUN", "nsubj", 2),
            ("was", "AUX", "ROOT", 2),
            ("not", "PART", "neg", 2),
            ("good", "ADJ", "acomp", 2),
        ])
        .unwrap();
        let config = AnalyzerConfig::default();
        let aspects = extract_aspects(&doc, &config);
        let record = score_pair(
            &doc,
            &aspects[0],
            &doc.tokens()[4],
            &LexiconScorer::embedded(),
            &config,
        )
        .unwrap();

        assert_eq!(record.aspect, "food");
        assert_eq!(record.sentiment, SentimentLabel::Negative);
        assert_eq!(record.text_span, Some(TextSpan::new(4, 8)));
        let polarity = record.polarity.unwrap();
        assert!(polarity.compound > 0.4);
        assert!(approx(record.confidence, polarity.compound));
    }

    #[test]
    fn test_score_pair_propagates_scorer_errors() {
        // "pizza ???", with the punctuation misparsed as an adjective
        let doc = DocumentBuilder::from_words(&[
            ("pizza", "NOUN", "ROOT", 0),
            ("???", "ADJ", "amod", 0),
        ])
        .unwrap();
        let config = AnalyzerConfig::default();
        let aspects = extract_aspects(&doc, &config);
        let result = score_pair(
            &doc,
            &aspects[0],
            &doc.tokens()[1],
            &LexiconScorer::embedded(),
            &config,
        );
        assert!(result.is_err());
    }
}
