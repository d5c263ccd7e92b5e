pub mod cache;
pub mod config;
pub mod error;
pub mod sentiment;

pub use cache::{global_cache, ResourceCache};
pub use config::AnalyzerConfig;
pub use error::{AbsaError, Result};
pub use sentiment::{AspectSentiment, PolarityBreakdown, SentimentLabel, TextSpan};
