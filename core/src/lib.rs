//! Lexical similarity between a reference document and a set of candidates:
//! term-frequency vectors over a shared vocabulary, compared by cosine.

pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod tokenizer;
pub mod vector;
pub mod vectorizer;
pub mod vocabulary;

pub use config::{ScoringConfig, SimilarityConfig, TokenizerConfig, VocabularyOrder};
pub use document::{Document, DocumentSource};
pub use error::{Error, Result};
pub use pipeline::{compare, Reference, SimilarityChecker, SimilarityEntry, SimilarityResult};
pub use scorer::{cosine_similarity, Score, SimilarityScorer};
pub use vector::TermVector;
pub use vectorizer::Vectorizer;
pub use vocabulary::{TermId, Vocabulary};
