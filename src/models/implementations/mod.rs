mod lexicon_data;
pub mod lexicon_scorer;
pub mod rule_parser;

pub use lexicon_scorer::{LexiconScorer, LexiconSource};
pub use rule_parser::{RuleParser, RuleParserOptions};
