//! Parsed document model shared by every analysis stage.
//!
//! A [`ParsedDocument`] is an arena: tokens live in one `Vec` and refer to
//! their head and children by index. The tree is read-only once built, so the
//! analysis stages can walk it in any direction without reference cycles.
//!
//! ## Main Types
//!
//! - [`ParsedDocument`] - Tokens, dependency tree and noun chunks of one text
//! - [`Token`] - One word or punctuation mark with its tag, label and head
//! - [`DocumentBuilder`] - Validating constructor used by parsers and tests
//! - [`PartOfSpeech`], [`DependencyLabel`] - Closed tag sets

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{AbsaError, Result, TextSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Universal part-of-speech tag.
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Intj,
    Punct,
    Sym,
    X,
}

impl PartOfSpeech {
    /// Parses a Universal POS tag such as `"NOUN"`. Unknown tags map to `X`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "NOUN" => PartOfSpeech::Noun,
            "PROPN" => PartOfSpeech::Propn,
            "VERB" => PartOfSpeech::Verb,
            "AUX" => PartOfSpeech::Aux,
            "ADJ" => PartOfSpeech::Adj,
            "ADV" => PartOfSpeech::Adv,
            "ADP" => PartOfSpeech::Adp,
            "DET" => PartOfSpeech::Det,
            "PRON" => PartOfSpeech::Pron,
            "CCONJ" | "CONJ" => PartOfSpeech::Cconj,
            "SCONJ" => PartOfSpeech::Sconj,
            "PART" => PartOfSpeech::Part,
            "NUM" => PartOfSpeech::Num,
            "INTJ" => PartOfSpeech::Intj,
            "PUNCT" => PartOfSpeech::Punct,
            "SYM" => PartOfSpeech::Sym,
            _ => PartOfSpeech::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::X => "X",
        }
    }

    /// NOUN or PROPN.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }

    /// VERB or AUX.
    pub fn is_verbal(&self) -> bool {
        matches!(self, PartOfSpeech::Verb | PartOfSpeech::Aux)
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Dependency relation between a token and its head (ClearNLP English label set).
pub enum DependencyLabel {
    Acomp,
    Advcl,
    Advmod,
    Amod,
    Appos,
    Attr,
    Aux,
    Auxpass,
    Case,
    Cc,
    Ccomp,
    Compound,
    Conj,
    Dative,
    Det,
    Dobj,
    Mark,
    Neg,
    Npadvmod,
    Nsubj,
    Nsubjpass,
    Nummod,
    Oprd,
    Pcomp,
    Pobj,
    Poss,
    Prep,
    Punct,
    Relcl,
    Root,
    Xcomp,
    /// Unclassified relation, and the fallback for labels outside this set.
    Dep,
}

impl DependencyLabel {
    /// Parses a label such as `"amod"` or `"ROOT"`. Unknown labels map to `Dep`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "acomp" => DependencyLabel::Acomp,
            "advcl" => DependencyLabel::Advcl,
            "advmod" => DependencyLabel::Advmod,
            "amod" => DependencyLabel::Amod,
            "appos" => DependencyLabel::Appos,
            "attr" => DependencyLabel::Attr,
            "aux" => DependencyLabel::Aux,
            "auxpass" => DependencyLabel::Auxpass,
            "case" => DependencyLabel::Case,
            "cc" => DependencyLabel::Cc,
            "ccomp" => DependencyLabel::Ccomp,
            "compound" => DependencyLabel::Compound,
            "conj" => DependencyLabel::Conj,
            "dative" => DependencyLabel::Dative,
            "det" => DependencyLabel::Det,
            "dobj" => DependencyLabel::Dobj,
            "mark" => DependencyLabel::Mark,
            "neg" => DependencyLabel::Neg,
            "npadvmod" => DependencyLabel::Npadvmod,
            "nsubj" => DependencyLabel::Nsubj,
            "nsubjpass" => DependencyLabel::Nsubjpass,
            "nummod" => DependencyLabel::Nummod,
            "oprd" => DependencyLabel::Oprd,
            "pcomp" => DependencyLabel::Pcomp,
            "pobj" => DependencyLabel::Pobj,
            "poss" => DependencyLabel::Poss,
            "prep" => DependencyLabel::Prep,
            "punct" => DependencyLabel::Punct,
            "relcl" => DependencyLabel::Relcl,
            "root" => DependencyLabel::Root,
            "xcomp" => DependencyLabel::Xcomp,
            _ => DependencyLabel::Dep,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyLabel::Acomp => "acomp",
            DependencyLabel::Advcl => "advcl",
            DependencyLabel::Advmod => "advmod",
            DependencyLabel::Amod => "amod",
            DependencyLabel::Appos => "appos",
            DependencyLabel::Attr => "attr",
            DependencyLabel::Aux => "aux",
            DependencyLabel::Auxpass => "auxpass",
            DependencyLabel::Case => "case",
            DependencyLabel::Cc => "cc",
            DependencyLabel::Ccomp => "ccomp",
            DependencyLabel::Compound => "compound",
            DependencyLabel::Conj => "conj",
            DependencyLabel::Dative => "dative",
            DependencyLabel::Det => "det",
            DependencyLabel::Dobj => "dobj",
            DependencyLabel::Mark => "mark",
            DependencyLabel::Neg => "neg",
            DependencyLabel::Npadvmod => "npadvmod",
            DependencyLabel::Nsubj => "nsubj",
            DependencyLabel::Nsubjpass => "nsubjpass",
            DependencyLabel::Nummod => "nummod",
            DependencyLabel::Oprd => "oprd",
            DependencyLabel::Pcomp => "pcomp",
            DependencyLabel::Pobj => "pobj",
            DependencyLabel::Poss => "poss",
            DependencyLabel::Prep => "prep",
            DependencyLabel::Punct => "punct",
            DependencyLabel::Relcl => "relcl",
            DependencyLabel::Root => "ROOT",
            DependencyLabel::Xcomp => "xcomp",
            DependencyLabel::Dep => "dep",
        }
    }

    /// nsubj or nsubjpass.
    pub fn is_subject(&self) -> bool {
        matches!(self, DependencyLabel::Nsubj | DependencyLabel::Nsubjpass)
    }

    /// Labels whose NOUN/PRON dependents head a noun chunk.
    fn heads_noun_chunk(&self) -> bool {
        matches!(
            self,
            DependencyLabel::Nsubj
                | DependencyLabel::Nsubjpass
                | DependencyLabel::Dobj
                | DependencyLabel::Pobj
                | DependencyLabel::Pcomp
                | DependencyLabel::Dative
                | DependencyLabel::Appos
                | DependencyLabel::Attr
                | DependencyLabel::Oprd
                | DependencyLabel::Root
        )
    }
}

impl std::fmt::Display for DependencyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One token of a [`ParsedDocument`].
///
/// Structural links (head, children) are indices into the owning document;
/// use the navigation methods on [`ParsedDocument`] to follow them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    text: String,
    lower: String,
    whitespace: String,
    pos: PartOfSpeech,
    dep: DependencyLabel,
    head: usize,
    idx: usize,
    span: TextSpan,
    children: Vec<usize>,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Whitespace between this token and the next one in the source text.
    pub fn whitespace(&self) -> &str {
        &self.whitespace
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn dep(&self) -> DependencyLabel {
        self.dep
    }

    /// Position of this token in the document.
    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn head_index(&self) -> usize {
        self.head
    }

    pub fn is_root(&self) -> bool {
        self.head == self.idx
    }

    pub fn span(&self) -> TextSpan {
        self.span
    }

    /// Indices of the syntactic children, in surface order.
    pub fn child_indices(&self) -> &[usize] {
        &self.children
    }
}

/// The output of a dependency parser for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    text: String,
    tokens: Vec<Token>,
    noun_chunks: Vec<Range<usize>>,
}

impl ParsedDocument {
    /// A document without tokens.
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
            noun_chunks: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn head(&self, token: &Token) -> &Token {
        &self.tokens[token.head]
    }

    pub fn children<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        token.children.iter().map(move |&i| &self.tokens[i])
    }

    /// Children positioned before the token.
    pub fn lefts<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.children(token).filter(move |c| c.idx < token.idx)
    }

    /// Children positioned after the token.
    pub fn rights<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.children(token).filter(move |c| c.idx > token.idx)
    }

    /// The token `offset` positions away in surface order.
    pub fn nbor(&self, token: &Token, offset: isize) -> Option<&Token> {
        let target = token.idx.checked_add_signed(offset)?;
        self.tokens.get(target)
    }

    /// Other children of this token's head that precede it.
    pub fn left_siblings<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        let head = self.head(token);
        self.children(head)
            .filter(move |s| !token.is_root() && s.idx < token.idx)
    }

    /// Other children of this token's head that follow it.
    pub fn right_siblings<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        let head = self.head(token);
        self.children(head)
            .filter(move |s| !token.is_root() && s.idx > token.idx)
    }

    /// Index of the leftmost token in this token's subtree.
    pub fn left_edge(&self, token: &Token) -> usize {
        self.subtree_bounds(token).0
    }

    /// Index of the rightmost token in this token's subtree.
    pub fn right_edge(&self, token: &Token) -> usize {
        self.subtree_bounds(token).1
    }

    fn subtree_bounds(&self, token: &Token) -> (usize, usize) {
        let (mut lo, mut hi) = (token.idx, token.idx);
        let mut stack = vec![token.idx];
        while let Some(i) = stack.pop() {
            for &child in &self.tokens[i].children {
                lo = lo.min(child);
                hi = hi.max(child);
                stack.push(child);
            }
        }
        (lo, hi)
    }

    /// Source text covered by the token's subtree, from left edge to right edge.
    pub fn subtree_text(&self, token: &Token) -> &str {
        let (lo, hi) = self.subtree_bounds(token);
        self.span_text(lo..hi + 1)
    }

    /// Byte span of a token range.
    pub fn span_of(&self, range: Range<usize>) -> Option<TextSpan> {
        if range.is_empty() || range.end > self.tokens.len() {
            return None;
        }
        Some(TextSpan::new(
            self.tokens[range.start].span.start,
            self.tokens[range.end - 1].span.end,
        ))
    }

    /// Source text of a token range. Out-of-range input yields `""`.
    pub fn span_text(&self, range: Range<usize>) -> &str {
        match self.span_of(range) {
            Some(span) => &self.text[span.start..span.end],
            None => "",
        }
    }

    /// Noun-phrase spans as token ranges, in surface order.
    pub fn noun_chunks(&self) -> &[Range<usize>] {
        &self.noun_chunks
    }

    /// Imports the JSON produced by spaCy's `Doc.to_json()`.
    ///
    /// spaCy reports character offsets; they are converted to byte offsets here.
    pub fn from_spacy_json(json: &str) -> Result<Self> {
        let doc: SpacyDoc = serde_json::from_str(json)?;

        let mut char_to_byte: Vec<usize> = doc.text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(doc.text.len());
        let byte_at = |c: usize| {
            char_to_byte
                .get(c)
                .copied()
                .ok_or_else(|| AbsaError::parse(format!("character offset {c} is out of range")))
        };

        let mut tokens = doc.tokens;
        tokens.sort_by_key(|t| t.id);

        let mut builder = DocumentBuilder::new(doc.text.clone());
        for token in &tokens {
            builder.push(
                TextSpan::new(byte_at(token.start)?, byte_at(token.end)?),
                PartOfSpeech::from_tag(&token.pos),
                DependencyLabel::from_label(&token.dep),
                token.head,
            );
        }
        builder.build()
    }
}

impl<'a> IntoIterator for &'a ParsedDocument {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[derive(Deserialize)]
struct SpacyDoc {
    text: String,
    tokens: Vec<SpacyToken>,
}

#[derive(Deserialize)]
struct SpacyToken {
    id: usize,
    start: usize,
    end: usize,
    #[serde(default)]
    pos: String,
    #[serde(default)]
    dep: String,
    head: usize,
}

#[derive(Debug, Clone)]
struct PendingToken {
    span: TextSpan,
    pos: PartOfSpeech,
    dep: DependencyLabel,
    head: usize,
}

/// Builds a [`ParsedDocument`] from token spans and annotations.
///
/// Heads are token indices; a token whose head is itself is a root.
/// `build` checks spans and heads, links children and derives noun chunks.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    text: String,
    tokens: Vec<PendingToken>,
}

impl DocumentBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
        }
    }

    /// Appends a token and returns its index.
    pub fn push(
        &mut self,
        span: TextSpan,
        pos: PartOfSpeech,
        dep: DependencyLabel,
        head: usize,
    ) -> usize {
        self.tokens.push(PendingToken {
            span,
            pos,
            dep,
            head,
        });
        self.tokens.len() - 1
    }

    /// Builds a document from words joined by single spaces.
    ///
    /// Tags and labels are given as strings, the way spaCy prints them.
    ///
    /// ```rust
    /// use aspect_sentiment::models::DocumentBuilder;
    ///
    /// let doc = DocumentBuilder::from_words(&[
    ///     ("great", "ADJ", "amod", 1),
    ///     ("pizza", "NOUN", "ROOT", 1),
    /// ])?;
    /// assert_eq!(doc.text(), "great pizza");
    /// assert_eq!(doc.head(&doc.tokens()[0]).text(), "pizza");
    /// # Ok::<(), aspect_sentiment::core::AbsaError>(())
    /// ```
    pub fn from_words(words: &[(&str, &str, &str, usize)]) -> Result<ParsedDocument> {
        let text = words.iter().map(|w| w.0).collect::<Vec<_>>().join(" ");
        let mut builder = DocumentBuilder::new(text);
        let mut offset = 0;
        for &(word, pos, dep, head) in words {
            builder.push(
                TextSpan::new(offset, offset + word.len()),
                PartOfSpeech::from_tag(pos),
                DependencyLabel::from_label(dep),
                head,
            );
            offset += word.len() + 1;
        }
        builder.build()
    }

    pub fn build(self) -> Result<ParsedDocument> {
        let DocumentBuilder { text, tokens } = self;
        let count = tokens.len();

        for (i, token) in tokens.iter().enumerate() {
            let TextSpan { start, end } = token.span;
            if start > end
                || end > text.len()
                || !text.is_char_boundary(start)
                || !text.is_char_boundary(end)
            {
                return Err(AbsaError::parse(format!(
                    "token {i} has an invalid span {start}..{end}"
                )));
            }
            if token.head >= count {
                return Err(AbsaError::parse(format!(
                    "token {i} points at head {} but the document has {count} tokens",
                    token.head
                )));
            }
        }

        // Every head chain has to end in a root, otherwise subtree walks never terminate.
        for start in 0..count {
            let mut current = start;
            let mut steps = 0;
            while tokens[current].head != current {
                current = tokens[current].head;
                steps += 1;
                if steps > count {
                    return Err(AbsaError::parse(format!(
                        "token {start} is part of a head cycle"
                    )));
                }
            }
        }

        let mut children = vec![Vec::new(); count];
        for (i, token) in tokens.iter().enumerate() {
            if token.head != i {
                children[token.head].push(i);
            }
        }

        let built: Vec<Token> = tokens
            .into_iter()
            .zip(children)
            .enumerate()
            .map(|(i, (pending, children))| {
                let word = &text[pending.span.start..pending.span.end];
                let whitespace: String = text[pending.span.end..]
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .collect();
                Token {
                    text: word.to_string(),
                    lower: word.to_lowercase(),
                    whitespace,
                    pos: pending.pos,
                    dep: pending.dep,
                    head: pending.head,
                    idx: i,
                    span: pending.span,
                    children,
                }
            })
            .collect();

        let mut doc = ParsedDocument {
            text,
            tokens: built,
            noun_chunks: Vec::new(),
        };
        doc.noun_chunks = derive_noun_chunks(&doc);
        Ok(doc)
    }
}

/// Standard English noun-chunk iteration over the dependency tree.
fn derive_noun_chunks(doc: &ParsedDocument) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut prev_end: Option<usize> = None;

    for word in doc.iter() {
        if !matches!(
            word.pos,
            PartOfSpeech::Noun | PartOfSpeech::Propn | PartOfSpeech::Pron
        ) {
            continue;
        }
        let left_edge = doc.left_edge(word);
        if prev_end.is_some_and(|end| left_edge <= end) {
            continue;
        }

        let qualifies = if word.dep.heads_noun_chunk() {
            true
        } else if word.dep == DependencyLabel::Conj {
            let mut head = doc.head(word);
            while head.dep == DependencyLabel::Conj && head.head < head.idx {
                head = doc.head(head);
            }
            head.dep.heads_noun_chunk()
        } else {
            false
        };

        if qualifies {
            prev_end = Some(word.idx);
            chunks.push(left_edge..word.idx + 1);
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    // "The pizza was not good ."
    fn copular_negated() -> ParsedDocument {
        DocumentBuilder::from_words(&[
            ("The", "DET", "det", 1),
            ("pizza", "NOUN", "nsubj", 2),
            ("was", "AUX", "ROOT", 2),
            ("not", "PART", "neg", 2),
            ("good", "ADJ", "acomp", 2),
            (".", "PUNCT", "punct", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_children_and_sides() {
        let doc = copular_negated();
        let root = &doc.tokens()[2];
        assert!(root.is_root());
        let children: Vec<_> = doc.children(root).map(|t| t.text()).collect();
        assert_eq!(children, vec!["pizza", "not", "good", "."]);
        let lefts: Vec<_> = doc.lefts(root).map(|t| t.text()).collect();
        assert_eq!(lefts, vec!["pizza"]);
        assert_eq!(doc.rights(root).count(), 3);
    }

    #[test]
    fn test_siblings() {
        let doc = copular_negated();
        let good = &doc.tokens()[4];
        let left: Vec<_> = doc.left_siblings(good).map(|t| t.text()).collect();
        assert_eq!(left, vec!["pizza", "not"]);
        let right: Vec<_> = doc.right_siblings(good).map(|t| t.text()).collect();
        assert_eq!(right, vec!["."]);
    }

    #[test]
    fn test_subtree_text_and_edges() {
        let doc = copular_negated();
        let pizza = &doc.tokens()[1];
        assert_eq!(doc.left_edge(pizza), 0);
        assert_eq!(doc.subtree_text(pizza), "The pizza");
        assert_eq!(doc.subtree_text(&doc.tokens()[2]), "The pizza was not good .");
        assert_eq!(doc.subtree_text(&doc.tokens()[4]), "good");
    }

    #[test]
    fn test_noun_chunks() {
        let doc = copular_negated();
        assert_eq!(doc.noun_chunks(), &[0..2]);
        assert_eq!(doc.span_text(0..2), "The pizza");
        assert_eq!(doc.span_of(0..2), Some(TextSpan::new(0, 9)));
    }

    #[test]
    fn test_conj_noun_chunks() {
        // "the pizza and the pasta were great"
        let doc = DocumentBuilder::from_words(&[
            ("the", "DET", "det", 1),
            ("pizza", "NOUN", "nsubj", 5),
            ("and", "CCONJ", "cc", 1),
            ("the", "DET", "det", 4),
            ("pasta", "NOUN", "conj", 1),
            ("were", "AUX", "ROOT", 5),
            ("great", "ADJ", "acomp", 5),
        ])
        .unwrap();
        assert_eq!(doc.noun_chunks(), &[0..2, 3..5]);
    }

    #[test]
    fn test_nbor() {
        let doc = copular_negated();
        let good = &doc.tokens()[4];
        assert_eq!(doc.nbor(good, -1).map(|t| t.lower()), Some("not"));
        assert!(doc.nbor(&doc.tokens()[0], -1).is_none());
        assert!(doc.nbor(&doc.tokens()[5], 1).is_none());
    }

    #[test]
    fn test_rejects_bad_heads() {
        let err = DocumentBuilder::from_words(&[("pizza", "NOUN", "ROOT", 3)]).unwrap_err();
        assert!(matches!(err, AbsaError::Parse(_)));

        let err = DocumentBuilder::from_words(&[("a", "DET", "det", 1), ("b", "NOUN", "nsubj", 0)])
            .unwrap_err();
        assert!(matches!(err, AbsaError::Parse(_)));
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(DependencyLabel::from_label("ROOT"), DependencyLabel::Root);
        assert_eq!(DependencyLabel::from_label("nsubjpass"), DependencyLabel::Nsubjpass);
        assert_eq!(DependencyLabel::from_label("meta"), DependencyLabel::Dep);
        assert_eq!(PartOfSpeech::from_tag("propn"), PartOfSpeech::Propn);
        assert_eq!(PartOfSpeech::from_tag("???"), PartOfSpeech::X);
    }

    #[test]
    fn test_from_spacy_json_converts_char_offsets() {
        let json = r#"{
            "text": "Café food is great",
            "tokens": [
                {"id": 0, "start": 0, "end": 4, "pos": "PROPN", "dep": "compound", "head": 1},
                {"id": 1, "start": 5, "end": 9, "pos": "NOUN", "dep": "nsubj", "head": 2},
                {"id": 2, "start": 10, "end": 12, "pos": "AUX", "dep": "ROOT", "head": 2},
                {"id": 3, "start": 13, "end": 18, "pos": "ADJ", "dep": "acomp", "head": 2}
            ]
        }"#;
        let doc = ParsedDocument::from_spacy_json(json).unwrap();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.tokens()[0].text(), "Café");
        assert_eq!(doc.tokens()[1].text(), "food");
        assert_eq!(doc.tokens()[1].span(), TextSpan::new(6, 10));
        assert_eq!(doc.tokens()[3].dep(), DependencyLabel::Acomp);
        assert_eq!(doc.noun_chunks(), &[0..2]);
    }
}
