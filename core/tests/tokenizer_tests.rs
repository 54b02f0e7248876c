use simcore::tokenizer::tokenize;
use simcore::TokenizerConfig;

#[test]
fn it_drops_punctuation_and_whitespace() {
    let toks = tokenize("Text with special chars: @#$%\nLine two\t42", &TokenizerConfig::default());
    assert_eq!(toks, vec!["Text", "with", "special", "chars", "Line", "two", "42"]);
}

#[test]
fn it_keeps_unicode_letters() {
    let toks = tokenize("café 東京 naïve", &TokenizerConfig::default());
    assert_eq!(toks, vec!["café", "東京", "naïve"]);
}

#[test]
fn it_is_case_sensitive_by_default() {
    let toks = tokenize("Cat cat", &TokenizerConfig::default());
    assert_eq!(toks, vec!["Cat", "cat"]);
}

#[test]
fn it_filters_short_tokens() {
    let cfg = TokenizerConfig { min_token_len: 2, ..Default::default() };
    assert_eq!(tokenize("a bb c dd", &cfg), vec!["bb", "dd"]);
}

#[test]
fn it_normalizes_compatibility_forms() {
    let cfg = TokenizerConfig { normalize_unicode: true, ..Default::default() };
    // Fullwidth letters fold to ASCII under NFKC.
    assert_eq!(tokenize("ＡＢＣ abc", &cfg), vec!["ABC", "abc"]);
}

#[test]
fn it_yields_nothing_without_alphanumerics() {
    assert!(tokenize("", &TokenizerConfig::default()).is_empty());
    assert!(tokenize(" ,.;!? \n", &TokenizerConfig::default()).is_empty());
}
