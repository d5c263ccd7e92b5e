//! Valence-lexicon polarity scorer.
//!
//! Applies VADER's valence arithmetic to short fragments: per-word lexicon
//! valence, ALL-CAPS emphasis, degree boosters up to three words back, the
//! contrastive "but" shift, and `!`/`?` emphasis, normalized into a compound
//! score with `s / sqrt(s^2 + 15)`.
//!
//! Negation is not applied here; the aspect pipeline resolves it from the
//! dependency tree.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::lexicon_data::{BOOSTER_DECREMENTS, BOOSTER_INCREMENTS, EMBEDDED_LEXICON};
use crate::core::{AbsaError, PolarityBreakdown, Result};
use crate::loaders::HubFile;
use crate::models::PolarityScorer;

const BOOST_INCREMENT: f64 = 0.293;
const BOOST_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Where a [`LexiconScorer`] gets its valence table from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LexiconSource {
    /// The review-oriented table compiled into the crate.
    #[default]
    Embedded,
    /// A local file in VADER lexicon format.
    File(PathBuf),
    /// A VADER lexicon file stored in a Hugging Face Hub repository.
    Hub(HubFile),
}

/// Scores fragments against a word -> valence table.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    /// A scorer over the built-in table.
    pub fn embedded() -> Self {
        let lexicon = EMBEDDED_LEXICON
            .iter()
            .map(|&(word, valence)| (word.to_string(), valence))
            .collect();
        Self::with_lexicon(lexicon)
    }

    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        let boosters = BOOSTER_INCREMENTS
            .iter()
            .map(|&w| (w, BOOST_INCREMENT))
            .chain(BOOSTER_DECREMENTS.iter().map(|&w| (w, BOOST_DECREMENT)))
            .collect();
        Self { lexicon, boosters }
    }

    /// Reads a lexicon in VADER format: `token<TAB>mean<TAB>stddev<TAB>ratings`.
    ///
    /// Lines without a parsable mean are skipped.
    pub fn from_vader_str(content: &str) -> Result<Self> {
        let lexicon: HashMap<String, f64> = content
            .lines()
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let token = fields.next()?.trim();
                let mean = fields.next()?.trim().parse::<f64>().ok()?;
                (!token.is_empty()).then(|| (token.to_lowercase(), mean))
            })
            .collect();

        if lexicon.is_empty() {
            return Err(AbsaError::config("lexicon contains no valid entries"));
        }
        Ok(Self::with_lexicon(lexicon))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AbsaError::config(format!("cannot read lexicon {}: {e}", path.display()))
        })?;
        Self::from_vader_str(&content)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Valence of a single word, if the lexicon knows it.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn booster_scalar(&self, word: &str, valence: f64, caps_differ: bool) -> f64 {
        let Some(&base) = self.boosters.get(word.to_lowercase().as_str()) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if caps_differ && is_shouting(word) {
            scalar += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }
        scalar
    }

    fn word_valences(&self, words: &[&str]) -> Vec<f64> {
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let shouting: HashSet<usize> = (0..words.len()).filter(|&i| is_shouting(words[i])).collect();
        let caps_differ = !shouting.is_empty() && shouting.len() < words.len();

        let mut valences = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            let is_kind_of = word == "kind" && lowered.get(i + 1).is_some_and(|n| n == "of");
            if self.boosters.contains_key(word.as_str()) || is_kind_of {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = self.lexicon.get(word) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if caps_differ && shouting.contains(&i) {
                valence += if valence > 0.0 {
                    CAPS_INCREMENT
                } else {
                    -CAPS_INCREMENT
                };
            }

            for distance in 1..=3 {
                if i < distance {
                    break;
                }
                let previous = &lowered[i - distance];
                if self.lexicon.contains_key(previous) {
                    continue;
                }
                let damping = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += self.booster_scalar(words[i - distance], valence, caps_differ) * damping;
            }
            valences.push(valence);
        }

        if let Some(but) = lowered.iter().position(|w| w == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but {
                    *valence *= 0.5;
                } else if i > but {
                    *valence *= 1.5;
                }
            }
        }

        valences
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::embedded()
    }
}

fn is_shouting(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn punctuation_emphasis(fragment: &str) -> f64 {
    let exclamations = fragment.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = fragment.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl PolarityScorer for LexiconScorer {
    type Options = LexiconSource;

    fn load(options: LexiconSource) -> Result<Self> {
        let scorer = match &options {
            LexiconSource::Embedded => Self::embedded(),
            LexiconSource::File(path) => Self::from_file(path)?,
            LexiconSource::Hub(file) => Self::from_file(file.fetch()?)?,
        };
        tracing::info!(source = ?options, entries = scorer.len(), "loaded valence lexicon");
        Ok(scorer)
    }

    fn polarity_scores(&self, fragment: &str) -> Result<PolarityBreakdown> {
        if fragment.trim().is_empty() {
            return Ok(PolarityBreakdown::neutral());
        }

        let words: Vec<&str> = fragment
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(AbsaError::scoring(fragment, "fragment contains no words"));
        }

        let valences = self.word_valences(&words);
        let emphasis = punctuation_emphasis(fragment);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                positive_sum += v + 1.0;
            } else if v < 0.0 {
                negative_sum += v - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if positive_sum > negative_sum.abs() {
            positive_sum += emphasis;
        } else if positive_sum < negative_sum.abs() {
            negative_sum -= emphasis;
        }

        let total = positive_sum + negative_sum.abs() + neutral_count;
        if total == 0.0 {
            return Ok(PolarityBreakdown::neutral());
        }

        Ok(PolarityBreakdown {
            negative: round3((negative_sum / total).abs()),
            neutral: round3((neutral_count / total).abs()),
            positive: round3((positive_sum / total).abs()),
            compound: round3(compound),
        })
    }
}
