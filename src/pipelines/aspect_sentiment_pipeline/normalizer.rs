use crate::core::AnalyzerConfig;

/// Rewrites every configured emoji glyph to `" " + word + " "`.
///
/// The padding keeps the word from fusing with its neighbours ("great😂" ->
/// "great laughing "). Once no glyph remains the text is a fixed point, so
/// normalizing twice changes nothing.
pub fn normalize(text: &str, config: &AnalyzerConfig) -> String {
    let mut normalized = text.to_string();
    for (glyph, word) in &config.emoji_map {
        if normalized.contains(glyph.as_str()) {
            normalized = normalized.replace(glyph.as_str(), &format!(" {word} "));
        }
    }
    normalized
}
