use crate::core::AnalyzerConfig;
use crate::models::{DependencyLabel, ParsedDocument, Token};

/// The evidence that put an opinion under negation, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NegationCue {
    /// The opinion has a `neg` child of its own: "never cheap food".
    OwnNegation,
    /// The opinion's head carries the `neg`: "the food was not good".
    HeadNegation,
    /// The token right before the opinion is a negation word, wherever it is attached.
    PrecedingWord,
}

pub fn negation_cue(
    doc: &ParsedDocument,
    opinion: &Token,
    config: &AnalyzerConfig,
) -> Option<NegationCue> {
    let has_neg_child =
        |token: &Token| doc.children(token).any(|c| c.dep() == DependencyLabel::Neg);

    if has_neg_child(opinion) {
        return Some(NegationCue::OwnNegation);
    }
    if !opinion.is_root() && has_neg_child(doc.head(opinion)) {
        return Some(NegationCue::HeadNegation);
    }
    match doc.nbor(opinion, -1) {
        Some(prev) if config.is_negation(prev.lower()) => Some(NegationCue::PrecedingWord),
        _ => None,
    }
}

pub fn has_negation(doc: &ParsedDocument, opinion: &Token, config: &AnalyzerConfig) -> bool {
    let cue = negation_cue(doc, opinion, config);
    if let Some(cue) = cue {
        tracing::debug!(opinion = opinion.text(), ?cue, "opinion is negated");
    }
    cue.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentBuilder;

    #[test]
    fn test_negation_on_head() {
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
        let good = &doc.tokens()[4];
        assert_eq!(negation_cue(&doc, good, &config), Some(NegationCue::HeadNegation));
        assert!(has_negation(&doc, good, &config));
    }

    #[test]
    fn test_negation_on_token() {
        // "never cheap food"
        let doc = DocumentBuilder::from_words(&[
            ("never", "ADV", "neg", 1),
            ("cheap", "ADJ", "amod", 2),
            ("food", "NOUN", "ROOT", 2),
        ])
        .unwrap();
        let config = AnalyzerConfig::default();
        let cheap = &doc.tokens()[1];
        assert_eq!(negation_cue(&doc, cheap, &config), Some(NegationCue::OwnNegation));
    }

    #[test]
    fn test_preceding_negation_word() {
        // "no good pizza", with "no" left as a determiner
        let doc = DocumentBuilder::from_words(&[
            ("no", "DET", "det", 2),
            ("good", "ADJ", "amod", 2),
            ("pizza", "NOUN", "ROOT", 2),
        ])
        .unwrap();
        let config = AnalyzerConfig::default();
        let good = &doc.tokens()[1];
        assert_eq!(negation_cue(&doc, good, &config), Some(NegationCue::PrecedingWord));

        let strict = AnalyzerConfig {
            negations: vec!["not".to_string()],
            ..AnalyzerConfig::default()
        };
        assert!(!has_negation(&doc, good, &strict));
    }

    #[test]
    fn test_preceding_word_attached_elsewhere() {
        // "never good food returns", with "never" hanging off the verb
        let doc = DocumentBuilder::from_words(&[
            ("never", "ADV", "advmod", 3),
            ("good", "ADJ", "amod", 2),
            ("food", "NOUN", "nsubj", 3),
            ("returns", "VERB", "ROOT", 3),
        ])
        .unwrap();
        let config = AnalyzerConfig::default();
        let good = &doc.tokens()[1];
        assert_eq!(negation_cue(&doc, good, &config), Some(NegationCue::PrecedingWord));
    }

    #[test]
    fn test_root_opinion_is_not_its_own_head() {
        // "disappoints", a lone root verb
        let doc = DocumentBuilder::from_words(&[("disappoints", "VERB", "ROOT", 0)]).unwrap();
        let config = AnalyzerConfig::default();
        assert!(!has_negation(&doc, &doc.tokens()[0], &config));
    }
}
