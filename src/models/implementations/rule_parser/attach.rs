//! Dependency attachment over tagged words.
//!
//! Sentences are cut at final punctuation, nominal groups are chunked
//! greedily, and each sentence is split into clauses at conjunctions that
//! introduce a new subject. Within a clause the verbal chain is found first;
//! nominals before it are subjects, material after it becomes complements.
//! Clause heads are then joined under the sentence root.

use std::ops::Range;

use super::tagger::Tagged;
use super::vocabulary::{BE_FORMS, NEGATIONS, POSSESSIVES, POSSESSIVE_CLITICS};
use crate::models::{DependencyLabel as Label, PartOfSpeech as Pos};

const SENTENCE_FINAL: &[&str] = &[".", "!", "?"];

/// A chunked noun phrase ending before `end`, headed by `head`.
#[derive(Debug, Clone, Copy)]
struct Group {
    end: usize,
    head: usize,
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Group(Group),
    Token(usize),
}

/// How a clause connects to the sentence root, with the connecting token.
#[derive(Debug, Clone, Copy)]
enum Link {
    Main,
    Coordinate(usize),
    Subordinate(usize),
    Juxtaposed(usize),
}

#[derive(Debug)]
struct Clause {
    link: Link,
    units: Vec<Unit>,
}

/// Computes a head index and label for every token.
pub(crate) fn attach(lower: &[String], tags: &[Tagged]) -> (Vec<usize>, Vec<Label>) {
    let mut tree = Tree {
        lower,
        tags,
        heads: (0..lower.len()).collect(),
        labels: vec![Label::Dep; lower.len()],
    };
    for sentence in tree.sentences() {
        tree.attach_sentence(sentence);
    }
    (tree.heads, tree.labels)
}

struct Tree<'a> {
    lower: &'a [String],
    tags: &'a [Tagged],
    heads: Vec<usize>,
    labels: Vec<Label>,
}

impl Tree<'_> {
    fn pos(&self, i: usize) -> Pos {
        self.tags[i].pos
    }

    fn word(&self, i: usize) -> &str {
        &self.lower[i]
    }

    fn link(&mut self, child: usize, head: usize, label: Label) {
        self.heads[child] = head;
        self.labels[child] = label;
    }

    fn is_negation(&self, i: usize) -> bool {
        NEGATIONS.contains(&self.word(i))
    }

    fn is_possessive(&self, i: usize, end: usize) -> bool {
        POSSESSIVES.contains(&self.word(i))
            && i + 1 < end
            && matches!(
                self.pos(i + 1),
                Pos::Adj | Pos::Adv | Pos::Noun | Pos::Propn | Pos::Num
            )
    }

    fn sentences(&self) -> Vec<Range<usize>> {
        let count = self.lower.len();
        let mut sentences = Vec::new();
        let (mut start, mut i) = (0, 0);
        while i < count {
            if SENTENCE_FINAL.contains(&self.word(i)) {
                let mut end = i + 1;
                while end < count && self.pos(end) == Pos::Punct && self.word(end) != "," {
                    end += 1;
                }
                sentences.push(start..end);
                start = end;
                i = end;
            } else {
                i += 1;
            }
        }
        if start < count {
            sentences.push(start..count);
        }
        sentences
    }

    fn attach_sentence(&mut self, range: Range<usize>) {
        let units = self.units(range.clone());
        let clauses = self.clauses(&units);
        let heads: Vec<Option<usize>> = clauses
            .iter()
            .map(|clause| self.attach_clause(&clause.units))
            .collect();

        let root = clauses
            .iter()
            .zip(&heads)
            .find(|(clause, head)| !matches!(clause.link, Link::Subordinate(_)) && head.is_some())
            .and_then(|(_, head)| *head)
            .or_else(|| heads.iter().flatten().next().copied())
            .unwrap_or(range.start);

        for (clause, head) in clauses.iter().zip(&heads) {
            if let Some(h) = head.filter(|&h| h != root) {
                let label = match clause.link {
                    Link::Subordinate(_) => Label::Advcl,
                    _ => Label::Conj,
                };
                self.link(h, root, label);
            }
            let (connective, head, label) = match clause.link {
                Link::Main => continue,
                Link::Coordinate(c) => (c, root, Label::Cc),
                Link::Subordinate(m) => (m, head.unwrap_or(root), Label::Mark),
                Link::Juxtaposed(p) => (p, root, Label::Punct),
            };
            if connective != head {
                self.link(connective, head, label);
            }
        }

        for i in range {
            if i != root && SENTENCE_FINAL.contains(&self.word(i)) {
                self.link(i, root, Label::Punct);
            }
        }
        self.link(root, root, Label::Root);
    }

    fn units(&mut self, range: Range<usize>) -> Vec<Unit> {
        let mut units = Vec::new();
        let mut i = range.start;
        while i < range.end {
            match self.take_group(i, range.end) {
                Some(group) => {
                    units.push(Unit::Group(group));
                    i = group.end;
                }
                None => {
                    units.push(Unit::Token(i));
                    i += 1;
                }
            }
        }
        units
    }

    /// Chunks a nominal group starting at `start` and links its internal structure.
    fn take_group(&mut self, start: usize, end: usize) -> Option<Group> {
        let mut j = start;
        while j < end {
            let premodifier = match self.pos(j) {
                Pos::Det | Pos::Num | Pos::Adj => true,
                Pos::Pron => self.is_possessive(j, end),
                Pos::Adv => j + 1 < end && matches!(self.pos(j + 1), Pos::Adj | Pos::Adv),
                _ => false,
            };
            if !premodifier {
                break;
            }
            j += 1;
        }

        let noun_start = j;
        while j < end && self.pos(j).is_nominal() {
            j += 1;
        }
        if j == noun_start {
            return (j == start && self.pos(start) == Pos::Pron).then_some(Group {
                end: start + 1,
                head: start,
            });
        }

        let head = j - 1;
        for k in start..head {
            let label = match self.pos(k) {
                Pos::Det => Label::Det,
                Pos::Num => Label::Nummod,
                Pos::Adj => Label::Amod,
                Pos::Pron => Label::Poss,
                Pos::Noun | Pos::Propn => Label::Compound,
                Pos::Adv => {
                    let modified = (k + 1..head).find(|&a| matches!(self.pos(a), Pos::Adj | Pos::Adv));
                    self.link(k, modified.unwrap_or(head), Label::Advmod);
                    continue;
                }
                _ => Label::Dep,
            };
            self.link(k, head, label);
        }

        // "the restaurant 's pizza": the possessor hangs off the possessed noun
        if j + 1 < end && self.pos(j) == Pos::Part && POSSESSIVE_CLITICS.contains(&self.word(j)) {
            if let Some(owned) = self.take_group(j + 1, end) {
                self.link(j, head, Label::Case);
                self.link(head, owned.head, Label::Poss);
                return Some(Group {
                    end: owned.end,
                    head: owned.head,
                });
            }
        }

        Some(Group { end: j, head })
    }

    fn clauses(&self, units: &[Unit]) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut current = Clause {
            link: Link::Main,
            units: Vec::new(),
        };

        for (k, unit) in units.iter().enumerate() {
            if let Unit::Token(i) = *unit {
                let link = match self.pos(i) {
                    Pos::Cconj => Some(Link::Coordinate(i)),
                    Pos::Sconj => Some(Link::Subordinate(i)),
                    Pos::Punct if matches!(self.word(i), "," | ";") => Some(Link::Juxtaposed(i)),
                    _ => None,
                };
                if let Some(link) = link {
                    let rest = &units[k + 1..];
                    if current.units.is_empty() {
                        if matches!(link, Link::Subordinate(_)) {
                            current.link = link;
                            continue;
                        }
                    } else if (matches!(link, Link::Subordinate(_))
                        || self.word(i) == ";"
                        || self.has_verbal(&current.units))
                        && self.opens_clause(rest, matches!(link, Link::Coordinate(_)))
                    {
                        let finished = std::mem::replace(
                            &mut current,
                            Clause {
                                link,
                                units: Vec::new(),
                            },
                        );
                        clauses.push(finished);
                        continue;
                    }
                }
            }
            current.units.push(*unit);
        }

        if !current.units.is_empty() || clauses.is_empty() || !matches!(current.link, Link::Main) {
            clauses.push(current);
        }
        clauses
    }

    fn has_verbal(&self, units: &[Unit]) -> bool {
        units
            .iter()
            .any(|u| matches!(*u, Unit::Token(i) if self.pos(i).is_verbal()))
    }

    /// Whether `rest` starts a clause of its own: a subject followed by a verb,
    /// or (after a coordinator) a bare verb sharing the earlier subject.
    fn opens_clause(&self, rest: &[Unit], after_coordinator: bool) -> bool {
        if after_coordinator
            && matches!(rest.first(), Some(&Unit::Token(i)) if self.pos(i) == Pos::Verb)
        {
            return true;
        }
        let mut seen_subject = false;
        for unit in rest {
            match *unit {
                Unit::Group(_) => seen_subject = true,
                Unit::Token(i) => match self.pos(i) {
                    Pos::Verb | Pos::Aux => return seen_subject,
                    Pos::Adv | Pos::Part => {}
                    _ => return false,
                },
            }
        }
        false
    }

    fn attach_clause(&mut self, units: &[Unit]) -> Option<usize> {
        let predicate = units
            .iter()
            .position(|u| matches!(*u, Unit::Token(i) if self.pos(i).is_verbal()));
        match predicate {
            Some(p) => Some(self.attach_predicate(units, p)),
            None => self.attach_verbless(units),
        }
    }

    fn attach_predicate(&mut self, units: &[Unit], p: usize) -> usize {
        let mut chain = Vec::new();
        let mut verb = None;
        let mut k = p;
        while let Some(&Unit::Token(i)) = units.get(k) {
            match self.pos(i) {
                Pos::Verb => {
                    chain.push(i);
                    verb = Some(i);
                    k += 1;
                    break;
                }
                Pos::Aux | Pos::Adv => chain.push(i),
                Pos::Part if self.is_negation(i) => chain.push(i),
                _ => break,
            }
            k += 1;
        }

        let auxiliaries: Vec<usize> = chain
            .iter()
            .copied()
            .filter(|&i| self.pos(i) == Pos::Aux)
            .collect();
        let first = match units[p] {
            Unit::Token(i) => i,
            Unit::Group(g) => g.head,
        };
        let head = verb.or_else(|| auxiliaries.last().copied()).unwrap_or(first);
        let passive = verb.is_some_and(|v| self.tags[v].participle)
            && auxiliaries.iter().any(|&a| BE_FORMS.contains(&self.word(a)));

        for &a in &auxiliaries {
            if a != head {
                let label = if passive && BE_FORMS.contains(&self.word(a)) {
                    Label::Auxpass
                } else {
                    Label::Aux
                };
                self.link(a, head, label);
            }
        }

        let adjective_next = match units.get(k) {
            Some(&Unit::Token(i)) if self.pos(i) == Pos::Adj => Some(i),
            _ => None,
        };
        for &t in &chain {
            if t == head || self.pos(t) == Pos::Aux {
                continue;
            }
            if self.is_negation(t) {
                self.link(t, head, Label::Neg);
            } else if let Some(adj) = adjective_next.filter(|_| t > head) {
                self.link(t, adj, Label::Advmod);
            } else {
                self.link(t, head, Label::Advmod);
            }
        }

        self.attach_subjects(&units[..p], head, passive);
        self.attach_complements(&units[k..], head);
        head
    }

    fn attach_subjects(&mut self, units: &[Unit], head: usize, passive: bool) {
        let mut subject: Option<usize> = None;
        let mut pending_adp = None;
        let mut pending_cc = None;
        let mut prev_group = None;

        for unit in units {
            match *unit {
                Unit::Group(g) => {
                    if let Some(adp) = pending_adp.take() {
                        self.link(g.head, adp, Label::Pobj);
                    } else if let Some(s) = subject {
                        self.link(g.head, s, Label::Conj);
                        if let Some(cc) = pending_cc.take() {
                            self.link(cc, s, Label::Cc);
                        }
                    } else {
                        subject = Some(g.head);
                    }
                    prev_group = Some(g.head);
                    continue;
                }
                Unit::Token(i) => match self.pos(i) {
                    Pos::Adp => {
                        self.link(i, prev_group.unwrap_or(head), Label::Prep);
                        pending_adp = Some(i);
                    }
                    Pos::Cconj => pending_cc = Some(i),
                    Pos::Adv | Pos::Part if self.is_negation(i) => self.link(i, head, Label::Neg),
                    Pos::Adv => self.link(i, head, Label::Advmod),
                    Pos::Punct => self.link(i, head, Label::Punct),
                    Pos::Sconj => self.link(i, head, Label::Mark),
                    _ => self.link(i, head, Label::Dep),
                },
            }
            prev_group = None;
        }

        if let Some(s) = subject {
            let label = if passive {
                Label::Nsubjpass
            } else {
                Label::Nsubj
            };
            self.link(s, head, label);
        }
        if let Some(cc) = pending_cc {
            self.link(cc, head, Label::Cc);
        }
    }

    fn attach_complements(&mut self, units: &[Unit], head: usize) {
        let mut complement: Option<usize> = None;
        let mut object: Option<usize> = None;
        let mut pending_adp = None;
        let mut pending_cc = None;
        let mut pending_to = None;
        let mut prev_group = None;

        for (offset, unit) in units.iter().enumerate() {
            let i = match *unit {
                Unit::Group(g) => {
                    if let Some(adp) = pending_adp.take() {
                        self.link(g.head, adp, Label::Pobj);
                    } else if let (Some(o), Some(cc)) = (object, pending_cc) {
                        self.link(g.head, o, Label::Conj);
                        self.link(cc, o, Label::Cc);
                        pending_cc = None;
                    } else if object.is_none() {
                        let label = if self.pos(head) == Pos::Aux {
                            Label::Attr
                        } else {
                            Label::Dobj
                        };
                        self.link(g.head, head, label);
                        object = Some(g.head);
                    } else {
                        self.link(g.head, head, Label::Npadvmod);
                    }
                    prev_group = Some(g.head);
                    continue;
                }
                Unit::Token(i) => i,
            };

            match self.pos(i) {
                Pos::Adj => match complement {
                    None => {
                        self.link(i, head, Label::Acomp);
                        complement = Some(i);
                    }
                    Some(first) => {
                        self.link(i, first, Label::Conj);
                        if let Some(cc) = pending_cc.take() {
                            self.link(cc, first, Label::Cc);
                        }
                    }
                },
                Pos::Adv | Pos::Part if self.is_negation(i) => self.link(i, head, Label::Neg),
                Pos::Adv => {
                    let target = self.adverb_target(&units[offset + 1..]);
                    self.link(i, target.unwrap_or(head), Label::Advmod);
                }
                Pos::Det => match units.get(offset + 1) {
                    Some(&Unit::Token(n)) if self.pos(n) == Pos::Adv => self.link(i, n, Label::Det),
                    _ => self.link(i, head, Label::Dep),
                },
                Pos::Adp => {
                    self.link(i, prev_group.unwrap_or(head), Label::Prep);
                    pending_adp = Some(i);
                }
                Pos::Part if self.word(i) == "to" => pending_to = Some(i),
                Pos::Verb | Pos::Aux => {
                    if let Some(to) = pending_to.take() {
                        self.link(to, i, Label::Aux);
                        self.link(i, head, Label::Xcomp);
                    } else if let Some(adp) = pending_adp.take() {
                        self.link(i, adp, Label::Pcomp);
                    } else {
                        self.link(i, head, Label::Conj);
                        if let Some(cc) = pending_cc.take() {
                            self.link(cc, head, Label::Cc);
                        }
                    }
                }
                Pos::Cconj => pending_cc = Some(i),
                Pos::Punct => self.link(i, head, Label::Punct),
                Pos::Sconj => self.link(i, head, Label::Mark),
                _ => self.link(i, head, Label::Dep),
            }
            prev_group = None;
        }

        if let Some(cc) = pending_cc {
            self.link(cc, head, Label::Cc);
        }
        if let Some(to) = pending_to {
            self.link(to, head, Label::Dep);
        }
    }

    /// The adjective or adverb an adverb modifies, if it directly follows.
    fn adverb_target(&self, rest: &[Unit]) -> Option<usize> {
        match rest.first() {
            Some(&Unit::Token(j)) if matches!(self.pos(j), Pos::Adj | Pos::Adv) => Some(j),
            _ => None,
        }
    }

    /// A clause without a verb ("Great pizza!") is headed by its first nominal.
    fn attach_verbless(&mut self, units: &[Unit]) -> Option<usize> {
        let first_group = units.iter().find_map(|u| match *u {
            Unit::Group(g) => Some(g.head),
            Unit::Token(_) => None,
        });
        let first_token = |wanted: &dyn Fn(Pos) -> bool| {
            units.iter().find_map(|u| match *u {
                Unit::Token(i) if wanted(self.pos(i)) => Some(i),
                _ => None,
            })
        };
        let head = first_group
            .or_else(|| first_token(&|pos| pos == Pos::Adj))
            .or_else(|| first_token(&|pos| pos != Pos::Punct))
            .or_else(|| first_token(&|_| true))?;
        let nominal_head = matches!(self.pos(head), Pos::Noun | Pos::Propn | Pos::Pron);

        let mut pending_adp = None;
        let mut pending_cc = None;
        let mut prev_group = None;
        for (offset, unit) in units.iter().enumerate() {
            let i = match *unit {
                Unit::Group(g) => {
                    if g.head != head {
                        if let Some(adp) = pending_adp.take() {
                            self.link(g.head, adp, Label::Pobj);
                        } else {
                            self.link(g.head, head, Label::Conj);
                            if let Some(cc) = pending_cc.take() {
                                self.link(cc, head, Label::Cc);
                            }
                        }
                    }
                    prev_group = Some(g.head);
                    continue;
                }
                Unit::Token(i) if i == head => {
                    prev_group = None;
                    continue;
                }
                Unit::Token(i) => i,
            };

            match self.pos(i) {
                Pos::Adj => {
                    let label = if nominal_head { Label::Amod } else { Label::Conj };
                    self.link(i, head, label);
                    if let Some(cc) = pending_cc.take() {
                        self.link(cc, head, Label::Cc);
                    }
                }
                Pos::Adv | Pos::Part if self.is_negation(i) => {
                    let target = self.adverb_target(&units[offset + 1..]);
                    self.link(i, target.unwrap_or(head), Label::Neg);
                }
                Pos::Adv => {
                    let target = self.adverb_target(&units[offset + 1..]);
                    self.link(i, target.unwrap_or(head), Label::Advmod);
                }
                Pos::Det => match units.get(offset + 1) {
                    Some(&Unit::Token(n)) if self.pos(n) == Pos::Adv => self.link(i, n, Label::Det),
                    _ => self.link(i, head, Label::Dep),
                },
                Pos::Adp => {
                    self.link(i, prev_group.unwrap_or(head), Label::Prep);
                    pending_adp = Some(i);
                }
                Pos::Cconj => pending_cc = Some(i),
                Pos::Punct => self.link(i, head, Label::Punct),
                _ => self.link(i, head, Label::Dep),
            }
            prev_group = None;
        }

        if let Some(cc) = pending_cc {
            self.link(cc, head, Label::Cc);
        }
        Some(head)
    }
}
