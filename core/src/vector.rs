use crate::error::{Error, Result};
use crate::vocabulary::TermId;
use serde::Serialize;
use std::cmp::Ordering;

/// Sparse term-frequency vector over a vocabulary of `dim` terms.
///
/// Only non-zero counts are stored, sorted by term id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermVector {
    dim: usize,
    entries: Vec<(TermId, u32)>,
}

impl TermVector {
    /// All-zero vector, as produced by an empty document.
    pub fn zeros(dim: usize) -> Self {
        Self { dim, entries: Vec::new() }
    }

    /// Build from arbitrary `(term id, count)` pairs. Repeated ids are summed and
    /// zero counts are dropped; an id outside `0..dim` is rejected.
    pub fn from_counts<I>(dim: usize, counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TermId, u32)>,
    {
        let mut entries: Vec<(TermId, u32)> = Vec::new();
        for (id, count) in counts {
            if id as usize >= dim {
                return Err(Error::invalid_input(format!(
                    "term id {id} outside vector dimension {dim}"
                )));
            }
            if count > 0 {
                entries.push((id, count));
            }
        }
        entries.sort_unstable_by_key(|&(id, _)| id);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 = kept.1.saturating_add(next.1);
                true
            } else {
                false
            }
        });
        Ok(Self { dim, entries })
    }

    /// Caller guarantees ids are unique, ascending, `< dim` and counts non-zero.
    pub(crate) fn from_sorted(dim: usize, entries: Vec<(TermId, u32)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(entries.iter().all(|&(id, c)| (id as usize) < dim && c > 0));
        Self { dim, entries }
    }

    /// Logical length, i.e. the vocabulary size.
    pub fn dim(&self) -> usize { self.dim }

    pub fn get(&self, id: TermId) -> u32 {
        self.entries
            .binary_search_by_key(&id, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Total token count of the document.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c as u64).sum()
    }

    pub fn to_dense(&self) -> Vec<u32> {
        let mut dense = vec![0; self.dim];
        for &(id, c) in &self.entries {
            dense[id as usize] = c;
        }
        dense
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, c)| {
                let c = c as f64;
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product over the shared index space. Dimensions are not checked here.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f64;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a[i].1 as f64 * b[j].1 as f64;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
