use crate::config::TokenizerConfig;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Same character class as `char::is_alphanumeric`.
    static ref RE: Regex = Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("valid regex");
}

/// Split text into alphanumeric runs. Punctuation and whitespace only separate
/// tokens; they never become tokens themselves.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<String> {
    let mut normalized: Cow<'_, str> = Cow::Borrowed(text);
    if config.normalize_unicode {
        normalized = Cow::Owned(normalized.nfkc().collect());
    }
    if !config.case_sensitive {
        normalized = Cow::Owned(normalized.to_lowercase());
    }
    RE.find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| config.min_token_len <= 1 || token.chars().count() >= config.min_token_len)
        .map(str::to_owned)
        .collect()
}
