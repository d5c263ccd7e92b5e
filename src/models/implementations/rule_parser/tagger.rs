//! Context-sensitive part-of-speech tagging.
//!
//! Each word first gets a lexical class from the word lists, then a
//! left-to-right pass resolves ambiguous classes using the tags already
//! assigned on the left and the lexical classes on the right.

use std::collections::HashSet;

use super::vocabulary::{
    VerbForm, VerbMorphology, ADJECTIVES, ADVERBS, AUXILIARIES, COORDINATORS, DEMONSTRATIVES,
    DETERMINERS, DO_HAVE, INTERJECTIONS, NEGATIONS, NUMBERS, POSSESSIVES, POSSESSIVE_CLITICS,
    PREPOSITIONS, PRONOUNS, SUBORDINATORS,
};
use crate::models::PartOfSpeech;

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "less", "able", "ible", "ive", "ish", "ical"];
const SENTENCE_FINAL: &[&str] = &[".", "!", "?"];
const NON_PUNCT_SYMBOLS: &str = "$+<=>^|~`";
const UNICODE_PUNCT: &str = "\u{2026}\u{201c}\u{201d}\u{2018}\u{2019}\u{2013}\u{2014}\u{ab}\u{bb}\u{a1}\u{bf}";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Lexical {
    Fixed(PartOfSpeech),
    Demonstrative,
    ApostropheS,
    DoHave,
    To,
    Like,
    Pretty,
    /// "kind", "sort"; adverbial in "kind of".
    Hedge,
    /// "bit", "little", "lot"; adverbial after "a".
    Quantity,
    /// Subordinator that is also a preposition or adverb.
    Subordinator,
    Adjective,
    Verb(VerbForm),
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tagged {
    pub pos: PartOfSpeech,
    /// A verb form that can head a passive.
    pub participle: bool,
}

impl Tagged {
    fn plain(pos: PartOfSpeech) -> Self {
        Self {
            pos,
            participle: false,
        }
    }
}

pub(crate) struct Tagger<'a> {
    pub adjectives: &'a HashSet<String>,
    pub verbs: &'a VerbMorphology,
}

impl Tagger<'_> {
    /// Tags words given in surface form.
    pub(crate) fn tag(&self, words: &[&str]) -> Vec<Tagged> {
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let lexical: Vec<Lexical> = lower.iter().map(|w| self.lexical(w)).collect();

        let mut tags: Vec<Tagged> = Vec::with_capacity(words.len());
        let mut forced: Vec<Option<PartOfSpeech>> = vec![None; words.len()];

        for i in 0..words.len() {
            if let Some(pos) = forced[i] {
                tags.push(Tagged::plain(pos));
                continue;
            }
            let context = Context {
                words,
                lower: &lower,
                lexical: &lexical,
                tags: &tags,
                i,
            };
            let tagged = match lexical[i] {
                Lexical::Fixed(pos) => Tagged::plain(pos),
                Lexical::Demonstrative => {
                    if matches!(
                        context.next(1),
                        Some(Lexical::Adjective | Lexical::Open | Lexical::Fixed(PartOfSpeech::Num))
                    ) {
                        Tagged::plain(PartOfSpeech::Det)
                    } else {
                        Tagged::plain(PartOfSpeech::Pron)
                    }
                }
                Lexical::ApostropheS => Tagged::plain(context.apostrophe_s()),
                Lexical::DoHave => Tagged::plain(context.do_have()),
                Lexical::To => {
                    if matches!(
                        context.next(1),
                        Some(Lexical::Verb(_) | Lexical::Like | Lexical::DoHave)
                    ) || context.next_word(1) == Some("be")
                    {
                        Tagged::plain(PartOfSpeech::Part)
                    } else {
                        Tagged::plain(PartOfSpeech::Adp)
                    }
                }
                Lexical::Like => {
                    if context.follows_subject_or_auxiliary() {
                        Tagged::plain(PartOfSpeech::Verb)
                    } else {
                        Tagged::plain(PartOfSpeech::Adp)
                    }
                }
                Lexical::Pretty => {
                    if matches!(
                        context.next(1),
                        Some(Lexical::Adjective | Lexical::Fixed(PartOfSpeech::Adv))
                    ) {
                        Tagged::plain(PartOfSpeech::Adv)
                    } else {
                        Tagged::plain(PartOfSpeech::Adj)
                    }
                }
                Lexical::Hedge => {
                    if context.next_word(1) == Some("of")
                        && matches!(
                            context.next(2),
                            Some(
                                Lexical::Adjective
                                    | Lexical::Fixed(PartOfSpeech::Adv)
                                    | Lexical::Verb(_)
                                    | Lexical::Pretty
                                    | Lexical::Like
                            )
                        )
                    {
                        forced[i + 1] = Some(PartOfSpeech::Adv);
                        Tagged::plain(PartOfSpeech::Adv)
                    } else if matches!(
                        context.prev_pos(),
                        Some(PartOfSpeech::Det | PartOfSpeech::Adj)
                    ) || context.prev_is_possessive()
                    {
                        Tagged::plain(PartOfSpeech::Noun)
                    } else {
                        Tagged::plain(PartOfSpeech::Adj)
                    }
                }
                Lexical::Quantity => {
                    if context.prev_word() == Some("a") {
                        Tagged::plain(PartOfSpeech::Adv)
                    } else if lower[i] == "little" {
                        Tagged::plain(PartOfSpeech::Adj)
                    } else {
                        Tagged::plain(PartOfSpeech::Noun)
                    }
                }
                Lexical::Subordinator => Tagged::plain(context.subordinator()),
                Lexical::Adjective => Tagged::plain(PartOfSpeech::Adj),
                Lexical::Verb(form) => context.verb(form),
                Lexical::Open => context.open(),
            };
            tags.push(tagged);
        }
        tags
    }

    fn lexical(&self, word: &str) -> Lexical {
        if !word.chars().any(char::is_alphanumeric) {
            let punct = word.chars().all(|c| {
                (c.is_ascii_punctuation() && !NON_PUNCT_SYMBOLS.contains(c))
                    || UNICODE_PUNCT.contains(c)
            });
            return Lexical::Fixed(if punct {
                PartOfSpeech::Punct
            } else {
                PartOfSpeech::Sym
            });
        }
        if word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return Lexical::Fixed(PartOfSpeech::Num);
        }

        let is = |list: &[&str]| list.contains(&word);
        if is(NEGATIONS) {
            return Lexical::Fixed(if word == "never" {
                PartOfSpeech::Adv
            } else {
                PartOfSpeech::Part
            });
        }
        match word {
            "to" => return Lexical::To,
            "like" => return Lexical::Like,
            "pretty" => return Lexical::Pretty,
            "kind" | "sort" => return Lexical::Hedge,
            "bit" | "little" | "lot" => return Lexical::Quantity,
            _ => {}
        }

        if is(POSSESSIVE_CLITICS) {
            Lexical::ApostropheS
        } else if is(DO_HAVE) {
            Lexical::DoHave
        } else if is(AUXILIARIES) {
            Lexical::Fixed(PartOfSpeech::Aux)
        } else if is(DETERMINERS) {
            Lexical::Fixed(PartOfSpeech::Det)
        } else if is(DEMONSTRATIVES) {
            Lexical::Demonstrative
        } else if is(POSSESSIVES) || is(PRONOUNS) {
            Lexical::Fixed(PartOfSpeech::Pron)
        } else if is(SUBORDINATORS) {
            if is(PREPOSITIONS) || is(ADVERBS) {
                Lexical::Subordinator
            } else {
                Lexical::Fixed(PartOfSpeech::Sconj)
            }
        } else if is(PREPOSITIONS) {
            Lexical::Fixed(PartOfSpeech::Adp)
        } else if is(COORDINATORS) {
            Lexical::Fixed(PartOfSpeech::Cconj)
        } else if is(NUMBERS) {
            Lexical::Fixed(PartOfSpeech::Num)
        } else if is(ADVERBS) {
            Lexical::Fixed(PartOfSpeech::Adv)
        } else if is(INTERJECTIONS) {
            Lexical::Fixed(PartOfSpeech::Intj)
        } else if is(ADJECTIVES) || self.adjectives.contains(word) {
            Lexical::Adjective
        } else if let Some(form) = self.verbs.lookup(word) {
            Lexical::Verb(form)
        } else {
            Lexical::Open
        }
    }
}

struct Context<'c> {
    words: &'c [&'c str],
    lower: &'c [String],
    lexical: &'c [Lexical],
    tags: &'c [Tagged],
    i: usize,
}

impl Context<'_> {
    fn next(&self, offset: usize) -> Option<Lexical> {
        self.lexical.get(self.i + offset).copied()
    }

    fn next_word(&self, offset: usize) -> Option<&str> {
        self.lower.get(self.i + offset).map(String::as_str)
    }

    fn prev_word(&self) -> Option<&str> {
        self.i.checked_sub(1).map(|p| self.lower[p].as_str())
    }

    fn prev_pos(&self) -> Option<PartOfSpeech> {
        self.tags.last().map(|t| t.pos)
    }

    fn prev_is_possessive(&self) -> bool {
        self.prev_word().is_some_and(|w| POSSESSIVES.contains(&w))
    }

    /// Index of the previous token that is not an adverb.
    fn prev_content(&self) -> Option<usize> {
        (0..self.i)
            .rev()
            .find(|&p| self.tags[p].pos != PartOfSpeech::Adv)
    }

    fn sentence_start(&self) -> bool {
        self.i == 0 || self.prev_word().is_some_and(|w| SENTENCE_FINAL.contains(&w))
    }

    fn follows_subject_or_auxiliary(&self) -> bool {
        match self.prev_content() {
            Some(p) => match self.tags[p].pos {
                PartOfSpeech::Pron => !POSSESSIVES.contains(&self.lower[p].as_str()),
                PartOfSpeech::Noun
                | PartOfSpeech::Propn
                | PartOfSpeech::Aux
                | PartOfSpeech::Part => true,
                _ => false,
            },
            None => false,
        }
    }

    fn apostrophe_s(&self) -> PartOfSpeech {
        match self.prev_pos() {
            Some(PartOfSpeech::Pron) => PartOfSpeech::Aux,
            Some(PartOfSpeech::Noun | PartOfSpeech::Propn)
                if matches!(
                    self.next(1),
                    Some(
                        Lexical::Adjective
                            | Lexical::Verb(_)
                            | Lexical::Pretty
                            | Lexical::Hedge
                            | Lexical::Demonstrative
                            | Lexical::Fixed(
                                PartOfSpeech::Adv | PartOfSpeech::Det | PartOfSpeech::Part
                            )
                    )
                ) =>
            {
                PartOfSpeech::Aux
            }
            _ => PartOfSpeech::Part,
        }
    }

    /// "do" and "have" are auxiliaries when a verb or negation follows.
    fn do_have(&self) -> PartOfSpeech {
        let mut offset = 1;
        while let Some(next) = self.next(offset) {
            match next {
                Lexical::Fixed(PartOfSpeech::Part) => return PartOfSpeech::Aux,
                Lexical::Fixed(PartOfSpeech::Adv) => offset += 1,
                Lexical::Verb(_) | Lexical::Like | Lexical::DoHave => return PartOfSpeech::Aux,
                Lexical::Fixed(PartOfSpeech::Aux) => return PartOfSpeech::Aux,
                _ => break,
            }
        }
        PartOfSpeech::Verb
    }

    fn subordinator(&self) -> PartOfSpeech {
        let opens_clause = matches!(
            self.next(1),
            Some(
                Lexical::Fixed(PartOfSpeech::Det | PartOfSpeech::Pron)
                    | Lexical::Demonstrative
                    | Lexical::Open
                    | Lexical::Adjective
            )
        );
        let has_verb = (1..=6)
            .map_while(|offset| self.next(offset))
            .take_while(|lex| {
                !matches!(
                    lex,
                    Lexical::Fixed(PartOfSpeech::Punct | PartOfSpeech::Cconj)
                )
            })
            .any(|lex| {
                matches!(
                    lex,
                    Lexical::Fixed(PartOfSpeech::Aux)
                        | Lexical::Verb(_)
                        | Lexical::DoHave
                        | Lexical::ApostropheS
                )
            });
        let word = self.lower[self.i].as_str();
        if opens_clause && has_verb {
            PartOfSpeech::Sconj
        } else if PREPOSITIONS.contains(&word) {
            PartOfSpeech::Adp
        } else {
            PartOfSpeech::Adv
        }
    }

    fn verb(&self, form: VerbForm) -> Tagged {
        let verb = Tagged {
            pos: PartOfSpeech::Verb,
            participle: form.participle,
        };
        let noun = Tagged::plain(PartOfSpeech::Noun);
        let next = self.next(1);
        let next_is_verbal = matches!(
            next,
            Some(
                Lexical::Fixed(PartOfSpeech::Aux)
                    | Lexical::Verb(_)
                    | Lexical::DoHave
                    | Lexical::ApostropheS
            )
        );
        let next_opens_object = matches!(
            next,
            Some(
                Lexical::Fixed(
                    PartOfSpeech::Det
                        | PartOfSpeech::Pron
                        | PartOfSpeech::Adp
                        | PartOfSpeech::Adv
                        | PartOfSpeech::Punct
                ) | Lexical::Demonstrative
                    | Lexical::Adjective
                    | Lexical::Pretty
                    | Lexical::To
            )
        ) || next.is_none();

        if self.sentence_start() {
            return if next_is_verbal || !next_opens_object {
                noun
            } else {
                verb
            };
        }

        let Some(p) = self.prev_content() else {
            return verb;
        };
        match self.tags[p].pos {
            PartOfSpeech::Pron if POSSESSIVES.contains(&self.lower[p].as_str()) => noun,
            PartOfSpeech::Pron | PartOfSpeech::Aux | PartOfSpeech::Part | PartOfSpeech::Verb => {
                verb
            }
            PartOfSpeech::Noun | PartOfSpeech::Propn => {
                if next_is_verbal {
                    noun
                } else {
                    verb
                }
            }
            PartOfSpeech::Det | PartOfSpeech::Adj | PartOfSpeech::Num | PartOfSpeech::Adp => noun,
            PartOfSpeech::Cconj => {
                let before = (0..p).rev().find(|&b| self.tags[b].pos != PartOfSpeech::Adv);
                match before.map(|b| self.tags[b].pos) {
                    Some(PartOfSpeech::Verb) => verb,
                    _ if next_is_verbal => noun,
                    Some(PartOfSpeech::Noun | PartOfSpeech::Propn) => noun,
                    _ => verb,
                }
            }
            _ => {
                if next_opens_object && !next_is_verbal {
                    verb
                } else {
                    noun
                }
            }
        }
    }

    fn open(&self) -> Tagged {
        let word = self.lower[self.i].as_str();
        let len = word.chars().count();
        if len > 4 && word.ends_with("ly") {
            return Tagged::plain(PartOfSpeech::Adv);
        }
        if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Tagged::plain(PartOfSpeech::Adj);
        }
        let capitalized = self.words[self.i]
            .chars()
            .next()
            .is_some_and(char::is_uppercase);
        if capitalized && !self.sentence_start() {
            return Tagged::plain(PartOfSpeech::Propn);
        }

        let after_verbal = self.prev_content().is_some_and(|p| {
            let pos = self.tags[p].pos;
            pos == PartOfSpeech::Aux
                || (pos == PartOfSpeech::Pron && !POSSESSIVES.contains(&self.lower[p].as_str()))
        });
        if after_verbal && len > 4 && word.ends_with("ed") {
            return Tagged {
                pos: PartOfSpeech::Verb,
                participle: true,
            };
        }
        if after_verbal && len > 5 && word.ends_with("ing") {
            return Tagged::plain(PartOfSpeech::Verb);
        }
        Tagged::plain(PartOfSpeech::Noun)
    }
}
