//! Built-in rule-based English dependency parser.
//!
//! Good enough for short review sentences: copular clauses ("the pizza was
//! great"), transitive verbs, negation, degree adverbs, attributive
//! adjectives and coordinated clauses. For anything harder, parse with an
//! external parser and import the result through
//! [`ParsedDocument::from_spacy_json`].
//!
//! ## Usage Example
//!
//! ```rust
//! use aspect_sentiment::models::{DependencyParser, RuleParser, RuleParserOptions};
//!
//! let parser = RuleParser::load(RuleParserOptions::default())?;
//! let doc = parser.parse("The pizza was not good.")?;
//! let not = &doc.tokens()[3];
//! assert_eq!(not.dep().as_str(), "neg");
//! assert_eq!(doc.head(not).text(), "was");
//! # Ok::<(), aspect_sentiment::core::AbsaError>(())
//! ```

mod attach;
mod tagger;
mod tokenize;
mod vocabulary;

use std::collections::HashSet;

use self::tagger::Tagger;
use self::vocabulary::VerbMorphology;
use crate::core::{AbsaError, Result};
use crate::models::{DependencyParser, DocumentBuilder, ParsedDocument};

/// Vocabulary added on top of the built-in word lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleParserOptions {
    /// Words always tagged ADJ.
    pub extra_adjectives: Vec<String>,
    /// Base forms of regular verbs; inflections are derived.
    pub extra_verbs: Vec<String>,
}

impl RuleParserOptions {
    pub fn with_adjectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_adjectives.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_verbs<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_verbs.extend(words.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone)]
pub struct RuleParser {
    adjectives: HashSet<String>,
    verbs: VerbMorphology,
}

impl RuleParser {
    fn tagger(&self) -> Tagger<'_> {
        Tagger {
            adjectives: &self.adjectives,
            verbs: &self.verbs,
        }
    }
}

impl DependencyParser for RuleParser {
    type Options = RuleParserOptions;

    fn load(options: Self::Options) -> Result<Self> {
        let blank = options
            .extra_adjectives
            .iter()
            .chain(&options.extra_verbs)
            .find(|w| w.trim().is_empty() || w.split_whitespace().count() > 1);
        if let Some(word) = blank {
            return Err(AbsaError::config(format!(
                "parser vocabulary entries must be single words, got {word:?}"
            )));
        }

        let adjectives = options
            .extra_adjectives
            .iter()
            .map(|w| w.trim().to_lowercase())
            .collect();
        let mut verbs = VerbMorphology::new();
        for verb in &options.extra_verbs {
            verbs.add_regular(verb.trim());
        }

        tracing::info!(
            extra_adjectives = options.extra_adjectives.len(),
            extra_verbs = options.extra_verbs.len(),
            "loaded rule-based parser"
        );
        Ok(Self { adjectives, verbs })
    }

    fn parse(&self, text: &str) -> Result<ParsedDocument> {
        let spans = tokenize::tokenize(text);
        if spans.is_empty() {
            return Ok(ParsedDocument::empty(text));
        }

        let words: Vec<&str> = spans.iter().map(|s| &text[s.start..s.end]).collect();
        let tags = self.tagger().tag(&words);
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let (heads, labels) = attach::attach(&lower, &tags);

        let mut builder = DocumentBuilder::new(text);
        for (((span, tagged), head), label) in spans.into_iter().zip(&tags).zip(heads).zip(labels)
        {
            builder.push(span, tagged.pos, label, head);
        }
        let doc = builder.build()?;
        tracing::trace!(tokens = doc.len(), chunks = doc.noun_chunks().len(), "parsed text");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DependencyLabel, PartOfSpeech};

    fn parser() -> RuleParser {
        RuleParser::load(RuleParserOptions::default()).unwrap()
    }

    fn arcs(doc: &ParsedDocument) -> Vec<(String, DependencyLabel, String)> {
        doc.iter()
            .map(|t| (t.text().to_string(), t.dep(), doc.head(t).text().to_string()))
            .collect()
    }

    #[test]
    fn test_parses_coordinated_clauses() {
        let doc = parser()
            .parse("The pizza was great but the service was bad")
            .unwrap();
        let arcs = arcs(&doc);
        assert_eq!(arcs[1], ("pizza".into(), DependencyLabel::Nsubj, "was".into()));
        assert_eq!(arcs[2].1, DependencyLabel::Root);
        assert_eq!(arcs[3], ("great".into(), DependencyLabel::Acomp, "was".into()));
        assert_eq!(arcs[4], ("but".into(), DependencyLabel::Cc, "was".into()));
        assert_eq!(doc.tokens()[7].head_index(), 2);
        assert_eq!(arcs[7].1, DependencyLabel::Conj);
        assert_eq!(doc.tokens()[6].head_index(), 7);
        assert_eq!(arcs[8].1, DependencyLabel::Acomp);
        assert_eq!(doc.noun_chunks(), &[0..2, 5..7]);
    }

    #[test]
    fn test_parses_contracted_negation() {
        let doc = parser().parse("The battery doesn't last.").unwrap();
        let words: Vec<_> = doc.iter().map(|t| t.text()).collect();
        assert_eq!(words, vec!["The", "battery", "does", "n't", "last", "."]);
        let last = &doc.tokens()[4];
        assert_eq!(last.pos(), PartOfSpeech::Verb);
        assert!(last.is_root());
        assert_eq!(doc.tokens()[3].dep(), DependencyLabel::Neg);
        assert_eq!(doc.tokens()[2].dep(), DependencyLabel::Aux);
        assert_eq!(doc.tokens()[1].dep(), DependencyLabel::Nsubj);
    }

    #[test]
    fn test_attributive_adjective() {
        let doc = parser().parse("Delicious food and friendly staff!").unwrap();
        let food = &doc.tokens()[1];
        assert_eq!(doc.tokens()[0].dep(), DependencyLabel::Amod);
        assert_eq!(doc.tokens()[0].head_index(), food.index());
        assert_eq!(doc.tokens()[3].dep(), DependencyLabel::Amod);
        assert_eq!(doc.tokens()[3].head_index(), 4);
    }

    #[test]
    fn test_extra_vocabulary() {
        let options = RuleParserOptions::default()
            .with_adjectives(["scrumptious"])
            .with_verbs(["glitch"]);
        let parser = RuleParser::load(options).unwrap();
        let doc = parser.parse("The dessert was scrumptious").unwrap();
        assert_eq!(doc.tokens()[3].pos(), PartOfSpeech::Adj);
        let doc = parser.parse("The screen glitches").unwrap();
        assert_eq!(doc.tokens()[2].pos(), PartOfSpeech::Verb);
    }

    #[test]
    fn test_rejects_multiword_vocabulary() {
        let options = RuleParserOptions::default().with_adjectives(["two words"]);
        let err = RuleParser::load(options).unwrap_err();
        assert!(matches!(err, AbsaError::Config(_)));
    }

    #[test]
    fn test_empty_and_symbol_input() {
        let parser = parser();
        assert!(parser.parse("").unwrap().is_empty());
        assert!(parser.parse("  \n ").unwrap().is_empty());
        let doc = parser.parse("!!! ...").unwrap();
        assert!(doc.iter().filter(|t| t.is_root()).count() >= 1);
    }

    #[test]
    fn test_every_sentence_has_one_root() {
        let doc = parser()
            .parse("Great place. The waiter, however, ignored us! Would not return?")
            .unwrap();
        let roots = doc.iter().filter(|t| t.is_root()).count();
        assert_eq!(roots, 3);
    }

    #[test]
    fn test_sentence_end_without_space() {
        let doc = parser()
            .parse("The pizza was great.The service was bad.")
            .unwrap();
        let words: Vec<_> = doc.iter().map(|t| t.text()).collect();
        assert_eq!(words[3..6], ["great", ".", "The"]);
        assert_eq!(doc.iter().filter(|t| t.is_root()).count(), 2);
        assert_eq!(doc.tokens()[3].dep(), DependencyLabel::Acomp);
        assert_eq!(doc.tokens()[6].dep(), DependencyLabel::Nsubj);
    }
}
