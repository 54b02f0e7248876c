use crate::config::VocabularyOrder;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

pub type TermId = u32;

/// Ordered, deduplicated token set shared by every vector of a run.
///
/// `term(id)` and `get(term)` are inverses of each other for the lifetime of
/// the vocabulary; ids are dense in `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    #[serde(skip)]
    dictionary: HashMap<String, TermId>,
}

impl Vocabulary {
    /// Collect the distinct tokens of every stream and number them according to `order`.
    pub fn build<S: AsRef<str>>(streams: &[Vec<S>], order: VocabularyOrder) -> Self {
        let terms: Vec<String> = match order {
            VocabularyOrder::Lexicographic => {
                let set: BTreeSet<&str> = streams.iter().flatten().map(AsRef::as_ref).collect();
                set.into_iter().map(str::to_owned).collect()
            }
            VocabularyOrder::FirstSeen => {
                let mut seen: HashSet<&str> = HashSet::new();
                let mut terms = Vec::new();
                for token in streams.iter().flatten().map(AsRef::as_ref) {
                    if seen.insert(token) {
                        terms.push(token.to_owned());
                    }
                }
                terms
            }
        };
        Self::from_terms(terms)
    }

    fn from_terms(terms: Vec<String>) -> Self {
        let dictionary = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id as TermId))
            .collect();
        Self { terms, dictionary }
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn get(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> {
        self.terms.iter().enumerate().map(|(id, t)| (id as TermId, t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streams() -> Vec<Vec<&'static str>> {
        vec![vec!["pear", "apple", "pear"], vec!["fig", "apple"]]
    }

    #[test]
    fn lexicographic_ignores_scan_order() {
        let vocab = Vocabulary::build(&streams(), VocabularyOrder::Lexicographic);
        assert_eq!(vocab.terms(), ["apple", "fig", "pear"]);

        let mut reversed = streams();
        reversed.reverse();
        assert_eq!(Vocabulary::build(&reversed, VocabularyOrder::Lexicographic), vocab);
    }

    #[test]
    fn first_seen_follows_input() {
        let vocab = Vocabulary::build(&streams(), VocabularyOrder::FirstSeen);
        assert_eq!(vocab.terms(), ["pear", "apple", "fig"]);
    }

    #[test]
    fn ids_round_trip() {
        let vocab = Vocabulary::build(&streams(), VocabularyOrder::Lexicographic);
        for (id, term) in vocab.iter() {
            assert_eq!(vocab.get(term), Some(id));
            assert_eq!(vocab.term(id), Some(term));
        }
        assert_eq!(vocab.get("kiwi"), None);
        assert_eq!(vocab.term(3), None);
    }
}
