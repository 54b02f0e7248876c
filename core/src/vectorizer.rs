use crate::config::{TokenizerConfig, VocabularyOrder};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::tokenizer::tokenize;
use crate::vector::TermVector;
use crate::vocabulary::{TermId, Vocabulary};
use std::collections::{HashMap, HashSet};

/// Turns a document set into a shared vocabulary and one term-frequency
/// vector per document, in input order.
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    tokenizer: TokenizerConfig,
    order: VocabularyOrder,
}

impl Vectorizer {
    pub fn new(tokenizer: TokenizerConfig, order: VocabularyOrder) -> Self {
        Self { tokenizer, order }
    }

    /// Build the vocabulary and the aligned vectors.
    ///
    /// Fails with [`Error::InvalidInput`] when `documents` is empty or two
    /// documents share an id. An empty text yields an all-zero vector.
    pub fn build(&self, documents: &[Document]) -> Result<(Vocabulary, Vec<TermVector>)> {
        if documents.is_empty() {
            return Err(Error::invalid_input("document set is empty"));
        }
        let mut ids: HashSet<&str> = HashSet::with_capacity(documents.len());
        for doc in documents {
            if !ids.insert(doc.id.as_str()) {
                return Err(Error::invalid_input(format!("duplicate document id {:?}", doc.id)));
            }
        }

        let streams: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&doc.text, &self.tokenizer))
            .collect();
        let vocabulary = Vocabulary::build(&streams, self.order);
        tracing::debug!(
            num_docs = documents.len(),
            num_terms = vocabulary.len(),
            order = ?self.order,
            "built vocabulary"
        );

        let vectors = streams
            .iter()
            .map(|tokens| count_terms(&vocabulary, tokens))
            .collect();
        Ok((vocabulary, vectors))
    }
}

fn count_terms(vocabulary: &Vocabulary, tokens: &[String]) -> TermVector {
    let mut tf_counts: HashMap<TermId, u32> = HashMap::new();
    for token in tokens {
        // Every token is in the vocabulary by construction.
        if let Some(tid) = vocabulary.get(token) {
            *tf_counts.entry(tid).or_insert(0) += 1;
        }
    }
    let mut entries: Vec<(TermId, u32)> = tf_counts.into_iter().collect();
    entries.sort_unstable_by_key(|&(tid, _)| tid);
    TermVector::from_sorted(vocabulary.len(), entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_align_with_vocabulary() {
        let docs = vec![Document::new("a", "b a b"), Document::new("b", "c, a!")];
        let (vocab, vectors) = Vectorizer::default().build(&docs).unwrap();
        assert_eq!(vocab.terms(), ["a", "b", "c"]);
        assert_eq!(vectors[0].to_dense(), vec![1, 2, 0]);
        assert_eq!(vectors[1].to_dense(), vec![1, 0, 1]);
        assert!(vectors.iter().all(|v| v.dim() == 3));
    }

    #[test]
    fn texts_without_tokens_give_empty_vocabulary() {
        let docs = vec![Document::new("a", ""), Document::new("b", "?!, ...")];
        let (vocab, vectors) = Vectorizer::default().build(&docs).unwrap();
        assert!(vocab.is_empty());
        assert!(vectors.iter().all(|v| v.dim() == 0 && v.total() == 0));
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = Vectorizer::default().build(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let docs = vec![Document::new("a", "x"), Document::new("a", "y")];
        assert!(matches!(Vectorizer::default().build(&docs), Err(Error::InvalidInput { .. })));
    }
}
