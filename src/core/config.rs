use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AbsaError, Result};

/// Tunable constants and closed vocabularies used by the analysis stages.
///
/// Every field has a default, so a JSON config only needs to list what it
/// changes:
///
/// ```rust
/// use aspect_sentiment::core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::from_json_str(r#"{ "modifier_window": 2 }"#)?;
/// assert_eq!(config.modifier_window, 2);
/// assert_eq!(config.intensifier_factor, 1.2);
/// # Ok::<(), aspect_sentiment::core::AbsaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum token distance between an opinion word and an adverb that modifies it.
    pub modifier_window: usize,
    pub intensifier_factor: f64,
    pub softener_factor: f64,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
    /// Added to the confidence for every adverb inside the modifier window.
    pub adverb_confidence_bonus: f64,
    pub confidence_cap: f64,
    pub intensifiers: Vec<String>,
    pub softeners: Vec<String>,
    pub negations: Vec<String>,
    /// Glyph -> replacement word, applied before parsing.
    pub emoji_map: BTreeMap<String, String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            modifier_window: 3,
            intensifier_factor: 1.2,
            softener_factor: 0.8,
            positive_threshold: 0.3,
            negative_threshold: -0.3,
            adverb_confidence_bonus: 0.1,
            confidence_cap: 1.0,
            intensifiers: words(&["very", "extremely", "really", "so", "super", "highly", "too"]),
            softeners: words(&["slightly", "somewhat", "barely", "a bit", "kind of", "rather"]),
            negations: words(&["not", "no", "never", "n't"]),
            emoji_map: [
                ("💘", "love"),
                ("❤️", "love"),
                ("😡", "angry"),
                ("😢", "sad"),
                ("😂", "laughing"),
                (":(", "sad"),
                (":)", "happy"),
                ("😔", "sad"),
            ]
            .iter()
            .map(|(glyph, word)| (glyph.to_string(), word.to_string()))
            .collect(),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AbsaError::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Checks that the numeric settings describe a usable scorer.
    pub fn validate(&self) -> Result<()> {
        if self.negative_threshold > self.positive_threshold {
            return Err(AbsaError::config(format!(
                "negative_threshold ({}) is above positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }
        if self.intensifier_factor <= 0.0 || self.softener_factor <= 0.0 {
            return Err(AbsaError::config(
                "modifier factors must be strictly positive",
            ));
        }
        if self.adverb_confidence_bonus < 0.0 {
            return Err(AbsaError::config("adverb_confidence_bonus must not be negative"));
        }
        if !(self.confidence_cap > 0.0 && self.confidence_cap <= 1.0) {
            return Err(AbsaError::config(format!(
                "confidence_cap must lie in (0, 1], got {}",
                self.confidence_cap
            )));
        }
        for (glyph, word) in &self.emoji_map {
            if glyph.is_empty() {
                return Err(AbsaError::config("emoji_map contains an empty glyph"));
            }
            // Rewriting must terminate: no replacement may reintroduce a glyph.
            if let Some(other) = self.emoji_map.keys().find(|g| word.contains(g.as_str())) {
                return Err(AbsaError::config(format!(
                    "emoji replacement {word:?} contains the glyph {other:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn is_intensifier(&self, phrase: &str) -> bool {
        self.intensifiers.iter().any(|w| w == phrase)
    }

    pub fn is_softener(&self, phrase: &str) -> bool {
        self.softeners.iter().any(|w| w == phrase)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|w| w == word)
    }

    /// True when `word` (lowercase) is one of the words emoji are rewritten to.
    pub fn is_emoji_word(&self, word: &str) -> bool {
        self.emoji_map.values().any(|w| w == word)
    }
}
