use std::ops::Range;

use crate::core::{AnalyzerConfig, TextSpan};
use crate::models::ParsedDocument;

/// A noun phrase that can receive opinions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectCandidate {
    /// Tokens from the first NOUN/PROPN of the chunk to its end.
    pub tokens: Range<usize>,
    /// Surface text of `tokens`, as reported in results.
    pub text: String,
    pub span: TextSpan,
}

impl AspectCandidate {
    pub fn contains(&self, token: usize) -> bool {
        self.tokens.contains(&token)
    }
}

/// Aspect candidates in surface order.
///
/// Chunks without a noun (pronouns) and chunks containing a word that an
/// emoji was rewritten to are skipped. Repeated aspects are kept.
pub fn extract_aspects(doc: &ParsedDocument, config: &AnalyzerConfig) -> Vec<AspectCandidate> {
    let tokens = doc.tokens();
    doc.noun_chunks()
        .iter()
        .filter_map(|chunk| {
            let first_noun = chunk.clone().find(|&i| tokens[i].pos().is_nominal())?;
            if let Some(i) = chunk.clone().find(|&i| config.is_emoji_word(tokens[i].lower())) {
                tracing::debug!(
                    chunk = doc.span_text(chunk.clone()),
                    word = tokens[i].text(),
                    "skipping emoji-derived chunk"
                );
                return None;
            }
            let range = first_noun..chunk.end;
            let span = doc.span_of(range.clone())?;
            Some(AspectCandidate {
                text: doc.span_text(range.clone()).to_string(),
                tokens: range,
                span,
            })
        })
        .collect()
}

/// The candidate whose tokens include `token`.
pub fn aspect_for(candidates: &[AspectCandidate], token: usize) -> Option<&AspectCandidate> {
    candidates.iter().find(|candidate| candidate.contains(token))
}
