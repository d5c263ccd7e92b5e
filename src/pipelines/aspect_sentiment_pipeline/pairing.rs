use crate::models::{DependencyLabel, ParsedDocument, PartOfSpeech, Token};

/// Which structural rule produced a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingRule {
    /// `amod` adjective on a noun: "great pizza".
    AdjectivalModifier,
    /// `acomp` adjective on a verb, paired with the verb's subjects: "the pizza was great".
    AdjectivalComplement,
    /// A verb paired with its nominal subjects: "the camera disappoints".
    VerbalOpinion,
}

/// An aspect token and the opinion token that describes it, both as document indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpinionPair {
    pub aspect: usize,
    pub opinion: usize,
    pub rule: PairingRule,
}

/// Scans the document in surface order and applies the pairing rules to every token.
///
/// A token may take part in several pairs; pairs are emitted in token order,
/// and within one token in rule order.
pub fn find_pairs(doc: &ParsedDocument) -> Vec<OpinionPair> {
    let mut pairs = Vec::new();
    for token in doc {
        let head = doc.head(token);
        match token.dep() {
            DependencyLabel::Amod if !token.is_root() && head.pos().is_nominal() => {
                pairs.push(pair(head, token, PairingRule::AdjectivalModifier));
            }
            DependencyLabel::Acomp if !token.is_root() && head.pos().is_verbal() => {
                pairs.extend(
                    subjects(doc, head)
                        .map(|subject| pair(subject, token, PairingRule::AdjectivalComplement)),
                );
            }
            _ => {}
        }
        if token.pos() == PartOfSpeech::Verb {
            pairs.extend(
                subjects(doc, token)
                    .filter(|subject| subject.pos().is_nominal())
                    .map(|subject| pair(subject, token, PairingRule::VerbalOpinion)),
            );
        }
    }
    tracing::debug!(pairs = pairs.len(), "matched aspect/opinion pairs");
    pairs
}

fn subjects<'a>(
    doc: &'a ParsedDocument,
    token: &'a Token,
) -> impl Iterator<Item = &'a Token> + 'a {
    doc.children(token).filter(|child| child.dep().is_subject())
}

fn pair(aspect: &Token, opinion: &Token, rule: PairingRule) -> OpinionPair {
    OpinionPair {
        aspect: aspect.index(),
        opinion: opinion.index(),
        rule,
    }
}
