use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Polarity assigned to an aspect.
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classifies a final signed score against the two thresholds.
    ///
    /// Both bounds are exclusive: a score sitting exactly on a threshold is neutral.
    pub fn from_score(score: f64, positive_threshold: f64, negative_threshold: f64) -> Self {
        if score > positive_threshold {
            SentimentLabel::Positive
        } else if score < negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Returns the string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open byte range `[start, end)` into the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw output of a lexicon polarity scorer for one text fragment.
///
/// `negative`, `neutral` and `positive` are proportions; `compound` is the
/// normalized overall score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityBreakdown {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl PolarityBreakdown {
    /// The breakdown of a fragment that carries no sentiment at all.
    pub fn neutral() -> Self {
        Self {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound: 0.0,
        }
    }
}

impl Default for PolarityBreakdown {
    fn default() -> Self {
        Self::neutral()
    }
}

/// One judgment about one aspect of the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSentiment {
    /// Surface text of the aspect, e.g. `"pizza"` or `"battery life"`.
    pub aspect: String,
    pub sentiment: SentimentLabel,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_span: Option<TextSpan>,
    /// Scorer output for the opinion fragment, before modifiers and negation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub polarity: Option<PolarityBreakdown>,
}

impl AspectSentiment {
    pub fn new(aspect: impl Into<String>, sentiment: SentimentLabel, confidence: f64) -> Self {
        Self {
            aspect: aspect.into(),
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
            text_span: None,
            polarity: None,
        }
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.text_span = Some(span);
        self
    }

    pub fn with_polarity(mut self, polarity: PolarityBreakdown) -> Self {
        self.polarity = Some(polarity);
        self
    }
}
