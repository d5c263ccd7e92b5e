//! Word segmentation with clitic splitting.
//!
//! Unicode word bounds give us words, punctuation and emoji as separate
//! pieces; English contractions are then split the way treebank tokenizers
//! do it (`don't` -> `do n't`, `it's` -> `it 's`, `can't` -> `ca n't`).
//! Word bounds keep `great.The` together, so sentence punctuation wedged
//! between letters is split out first; abbreviations and numbers stay whole.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::TextSpan;

const NEGATIVE_CLITICS: &[&str] = &["n't", "n\u{2019}t"];
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'m", "'d"];
const INNER_PUNCTUATION: &[char] = &['.', '!', '?', ':'];
const ABBREVIATIONS: &[&str] = &["ph.d", "m.sc", "b.sc"];

pub(crate) fn tokenize(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    for (offset, piece) in text.split_word_bound_indices() {
        if piece.chars().all(char::is_whitespace) {
            continue;
        }
        for (start, part) in split_inner_punctuation(piece, offset) {
            split_clitics(part, start, &mut spans);
        }
    }
    spans
}

/// Splits `piece` at sentence punctuation with letters on both sides.
fn split_inner_punctuation(piece: &str, offset: usize) -> Vec<(usize, &str)> {
    if is_abbreviation(piece) {
        return vec![(offset, piece)];
    }

    let chars: Vec<(usize, char)> = piece.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    for window in chars.windows(3) {
        let [(_, before), (at, mark), (_, after)] = [window[0], window[1], window[2]];
        if INNER_PUNCTUATION.contains(&mark) && before.is_alphabetic() && after.is_alphabetic() {
            let mark_end = at + mark.len_utf8();
            parts.push((offset + start, &piece[start..at]));
            parts.push((offset + at, &piece[at..mark_end]));
            start = mark_end;
        }
    }
    parts.push((offset + start, &piece[start..]));
    parts
}

/// `e.g`, `U.S.A` and friends: every dot-separated run is one letter, or the
/// whole piece is a listed abbreviation.
fn is_abbreviation(piece: &str) -> bool {
    if !piece.contains('.') {
        return false;
    }
    let lower = piece.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    lower.split('.').all(|run| run.chars().count() == 1)
}

fn split_clitics(piece: &str, offset: usize, spans: &mut Vec<TextSpan>) {
    let lower = piece.to_lowercase();
    // Lowercasing may change byte lengths for non-ASCII text; only split when it doesn't.
    if lower.len() == piece.len() {
        for clitic in NEGATIVE_CLITICS {
            if lower.len() > clitic.len() && lower.ends_with(clitic) {
                let cut = piece.len() - clitic.len();
                spans.push(TextSpan::new(offset, offset + cut));
                spans.push(TextSpan::new(offset + cut, offset + piece.len()));
                return;
            }
        }

        let normalized = lower.replace('\u{2019}', "'");
        for clitic in CLITICS {
            if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
                let clitic_bytes = clitic.len() - 1 + apostrophe_len(piece, clitic.len());
                let cut = piece.len() - clitic_bytes;
                spans.push(TextSpan::new(offset, offset + cut));
                spans.push(TextSpan::new(offset + cut, offset + piece.len()));
                return;
            }
        }
    }
    spans.push(TextSpan::new(offset, offset + piece.len()));
}

/// Byte length of the apostrophe that starts a clitic of `clitic_chars` characters.
fn apostrophe_len(piece: &str, clitic_chars: usize) -> usize {
    piece
        .chars()
        .rev()
        .nth(clitic_chars - 1)
        .map(char::len_utf8)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text)
            .into_iter()
            .map(|span| &text[span.start..span.end])
            .collect()
    }

    #[test]
    fn test_splits_punctuation_and_words() {
        assert_eq!(
            words("The pizza was great, really!"),
            vec!["The", "pizza", "was", "great", ",", "really", "!"]
        );
    }

    #[test]
    fn test_splits_negative_contractions() {
        assert_eq!(words("It isn't good"), vec!["It", "is", "n't", "good"]);
        assert_eq!(words("I can't"), vec!["I", "ca", "n't"]);
        assert_eq!(words("won't"), vec!["wo", "n't"]);
    }

    #[test]
    fn test_splits_other_clitics() {
        assert_eq!(words("it's fine"), vec!["it", "'s", "fine"]);
        assert_eq!(words("we're here"), vec!["we", "'re", "here"]);
        assert_eq!(words("it\u{2019}s"), vec!["it", "\u{2019}s"]);
    }

    #[test]
    fn test_splits_missing_space_after_sentence_end() {
        assert_eq!(
            words("great.The service"),
            vec!["great", ".", "The", "service"]
        );
        assert_eq!(words("great:the"), vec!["great", ":", "the"]);
        assert_eq!(
            words("fine.Really.Good"),
            vec!["fine", ".", "Really", ".", "Good"]
        );
    }

    #[test]
    fn test_keeps_abbreviations_and_numbers_whole() {
        assert_eq!(words("It was 3.5 stars"), vec!["It", "was", "3.5", "stars"]);
        assert_eq!(words("e.g. pizza"), vec!["e.g", ".", "pizza"]);
        assert_eq!(words("the U.S.A"), vec!["the", "U.S.A"]);
        assert_eq!(words("a Ph.D"), vec!["a", "Ph.D"]);
    }

    #[test]
    fn test_split_spans_keep_offsets() {
        let text = "ok.Isn't";
        let spans = tokenize(text);
        let pieces: Vec<&str> = spans.iter().map(|s| &text[s.start..s.end]).collect();
        assert_eq!(pieces, vec!["ok", ".", "Is", "n't"]);
        assert_eq!(spans[2].start, 3);
    }

    #[test]
    fn test_spans_point_into_text() {
        let text = "Café  rocks";
        let spans = tokenize(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].start..spans[0].end], "Café");
        assert_eq!(spans[1].start, 7);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}
