// Integration tests for the aspect sentiment pipeline.
// This is a separate crate that tests the public API.

mod basic_aspect_sentiment;
mod configuration;
mod properties;
mod spacy_import;
