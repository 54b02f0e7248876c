use serde::{Deserialize, Serialize};

/// How raw text is cut into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// When false, text is lowercased before tokens are extracted.
    pub case_sensitive: bool,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_len: usize,
    /// Apply NFKC normalization before tokenizing.
    pub normalize_unicode: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { case_sensitive: true, min_token_len: 1, normalize_unicode: false }
    }
}

/// Rule used to assign vocabulary indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyOrder {
    /// Ascending byte order of the token string; independent of input order.
    #[default]
    Lexicographic,
    /// Order of first occurrence, scanning documents in input order.
    FirstSeen,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Keep the reference document in the result (it scores 1.0 unless empty).
    pub include_self: bool,
    /// Score candidates on the rayon pool.
    pub parallel: bool,
}

/// Everything that shapes a single comparison run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub tokenizer: TokenizerConfig,
    pub order: VocabularyOrder,
    pub scoring: ScoringConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let raw = r#"{ "tokenizer": { "case_sensitive": false }, "order": "first-seen" }"#;
        let cfg: SimilarityConfig = serde_json::from_str(raw).unwrap();
        assert!(!cfg.tokenizer.case_sensitive);
        assert_eq!(cfg.tokenizer.min_token_len, 1);
        assert_eq!(cfg.order, VocabularyOrder::FirstSeen);
        assert_eq!(cfg.scoring, ScoringConfig::default());
    }
}
