use crate::core::AnalyzerConfig;
use crate::models::{ParsedDocument, PartOfSpeech, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Intensifier,
    Softener,
    /// An adverb outside both vocabularies. It still counts toward confidence.
    Neutral,
}

impl ModifierKind {
    /// Classifies an adverb by itself, or together with the previous token
    /// for two-word entries such as "kind of".
    pub fn classify(doc: &ParsedDocument, token: &Token, config: &AnalyzerConfig) -> Self {
        let word = token.lower();
        if config.is_intensifier(word) {
            return ModifierKind::Intensifier;
        }
        if config.is_softener(word) {
            return ModifierKind::Softener;
        }
        if let Some(prev) = doc.nbor(token, -1) {
            let phrase = format!("{} {}", prev.lower(), word);
            if config.is_intensifier(&phrase) {
                return ModifierKind::Intensifier;
            }
            if config.is_softener(&phrase) {
                return ModifierKind::Softener;
            }
        }
        ModifierKind::Neutral
    }

    pub fn factor(&self, config: &AnalyzerConfig) -> f64 {
        match self {
            ModifierKind::Intensifier => config.intensifier_factor,
            ModifierKind::Softener => config.softener_factor,
            ModifierKind::Neutral => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub token: usize,
    pub kind: ModifierKind,
}

/// Adverbs within `config.modifier_window` tokens of the opinion, left to right.
pub fn scan_modifiers(
    doc: &ParsedDocument,
    opinion: &Token,
    config: &AnalyzerConfig,
) -> Vec<Modifier> {
    let center = opinion.index();
    let start = center.saturating_sub(config.modifier_window);
    let end = center
        .saturating_add(config.modifier_window)
        .min(doc.len().saturating_sub(1));

    let modifiers: Vec<Modifier> = doc.tokens()[start..=end]
        .iter()
        .filter(|t| t.index() != center && t.pos() == PartOfSpeech::Adv)
        .map(|t| Modifier {
            token: t.index(),
            kind: ModifierKind::classify(doc, t, config),
        })
        .collect();

    if !modifiers.is_empty() {
        tracing::debug!(
            opinion = opinion.text(),
            modifiers = ?modifiers.iter().map(|m| doc.tokens()[m.token].text()).collect::<Vec<_>>(),
            "found nearby adverbs"
        );
    }
    modifiers
}

/// Product of the modifier factors, applied in scan order.
pub fn modifier_multiplier(modifiers: &[Modifier], config: &AnalyzerConfig) -> f64 {
    modifiers
        .iter()
        .fold(1.0, |acc, modifier| acc * modifier.kind.factor(config))
}
