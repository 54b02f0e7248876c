use crate::config::ScoringConfig;
use crate::error::{Error, Result};
use crate::vector::TermVector;
use rayon::prelude::*;
use serde::Serialize;

/// Similarity of the vector at `index` to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub index: usize,
    pub similarity: f64,
}

/// Cosine similarity of two term vectors.
///
/// Returns exactly `0.0` when either vector is all-zero. Fails with
/// [`Error::DimensionMismatch`] when the lengths differ.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch { expected: a.dim(), found: b.dim(), position: 1 });
    }
    Ok(cosine(a, a.norm(), b))
}

fn cosine(reference: &TermVector, reference_norm: f64, other: &TermVector) -> f64 {
    let other_norm = other.norm();
    if reference_norm == 0.0 || other_norm == 0.0 {
        return 0.0;
    }
    // Counts are non-negative so only rounding can push a self match past 1.
    (reference.dot(other) / (reference_norm * other_norm)).clamp(0.0, 1.0)
}

/// Scores every vector of a run against one designated reference.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: ScoringConfig,
}

impl SimilarityScorer {
    pub fn new(config: ScoringConfig) -> Self { Self { config } }

    /// Compare `vectors[reference]` with the other vectors, in input order.
    ///
    /// The reference itself is left out unless `include_self` is set.
    pub fn score(&self, vectors: &[TermVector], reference: usize) -> Result<Vec<Score>> {
        let Some(r) = vectors.get(reference) else {
            return Err(Error::invalid_reference(format!(
                "index {reference} out of range for {} vectors",
                vectors.len()
            )));
        };
        if let Some((position, v)) = vectors.iter().enumerate().find(|(_, v)| v.dim() != r.dim()) {
            return Err(Error::DimensionMismatch { expected: r.dim(), found: v.dim(), position });
        }

        let r_norm = r.norm();
        let include_self = self.config.include_self;
        let score_at = |(index, v): (usize, &TermVector)| {
            (include_self || index != reference)
                .then(|| Score { index, similarity: cosine(r, r_norm, v) })
        };
        let scores: Vec<Score> = if self.config.parallel {
            vectors.par_iter().enumerate().filter_map(score_at).collect()
        } else {
            vectors.iter().enumerate().filter_map(score_at).collect()
        };
        tracing::debug!(
            reference,
            candidates = scores.len(),
            parallel = self.config.parallel,
            "scored vectors"
        );
        Ok(scores)
    }
}
