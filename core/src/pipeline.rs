use crate::config::SimilarityConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::scorer::SimilarityScorer;
use crate::vectorizer::Vectorizer;
use serde::Serialize;

/// Which document the others are compared against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reference {
    /// The first document in source order.
    #[default]
    First,
    Index(usize),
    Id(String),
}

impl Reference {
    fn resolve(&self, documents: &[Document]) -> Result<usize> {
        match self {
            Reference::First => Ok(0),
            Reference::Index(i) if *i < documents.len() => Ok(*i),
            Reference::Index(i) => Err(Error::invalid_reference(format!(
                "index {i} out of range for {} documents",
                documents.len()
            ))),
            Reference::Id(id) => documents
                .iter()
                .position(|d| &d.id == id)
                .ok_or_else(|| Error::invalid_reference(format!("no document with id {id:?}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityEntry {
    pub id: String,
    pub score: f64,
}

impl SimilarityEntry {
    pub fn percent(&self) -> f64 { self.score * 100.0 }
}

/// Scores of one run, in document input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub reference: String,
    pub vocabulary_size: usize,
    pub entries: Vec<SimilarityEntry>,
}

impl SimilarityResult {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, SimilarityEntry> { self.entries.iter() }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.score)
    }
}

impl<'a> IntoIterator for &'a SimilarityResult {
    type Item = &'a SimilarityEntry;
    type IntoIter = std::slice::Iter<'a, SimilarityEntry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Vectorizer followed by scorer, mapping scores back to document ids.
#[derive(Debug, Clone, Default)]
pub struct SimilarityChecker {
    vectorizer: Vectorizer,
    scorer: SimilarityScorer,
}

impl SimilarityChecker {
    pub fn new(config: &SimilarityConfig) -> Self {
        Self {
            vectorizer: Vectorizer::new(config.tokenizer.clone(), config.order),
            scorer: SimilarityScorer::new(config.scoring.clone()),
        }
    }

    pub fn compare(
        &self,
        documents: &[Document],
        reference: &Reference,
    ) -> Result<SimilarityResult> {
        let (vocabulary, vectors) = self.vectorizer.build(documents)?;
        let reference = reference.resolve(documents)?;
        let scores = self.scorer.score(&vectors, reference)?;
        let entries = scores
            .into_iter()
            .map(|s| SimilarityEntry { id: documents[s.index].id.clone(), score: s.similarity })
            .collect();
        Ok(SimilarityResult {
            reference: documents[reference].id.clone(),
            vocabulary_size: vocabulary.len(),
            entries,
        })
    }
}

/// Compare every document with the first one using the default configuration.
pub fn compare(documents: &[Document]) -> Result<SimilarityResult> {
    SimilarityChecker::default().compare(documents, &Reference::First)
}
