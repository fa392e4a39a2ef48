use crate::index::types::{Record, RecordId};
use crate::utils::extract_tokens;
use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;

/// Inverted index from lowercase token to the set of records containing it.
///
/// Membership only: no frequencies, no positions.
#[derive(Debug, Default)]
pub struct TermIndex {
    postings: FxHashMap<String, RoaringBitmap>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize subject and body and add the record to each token's set.
    ///
    /// Returns the number of distinct tokens the record contributed.
    pub fn index(&mut self, record: &Record) -> usize {
        let tokens = extract_tokens(&record.searchable_text());
        let count = tokens.len();
        for token in tokens {
            self.postings.entry(token).or_default().insert(record.id);
        }
        count
    }

    /// Identifiers of the records containing `term`, ascending.
    ///
    /// `term` must already be normalized (see [`crate::utils::normalize_term`]);
    /// only whole-token matches are found.
    pub fn lookup(&self, term: &str) -> Vec<RecordId> {
        self.postings
            .get(term)
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// Records containing every one of `terms`. Empty when `terms` is empty.
    pub fn lookup_all<S: AsRef<str>>(&self, terms: &[S]) -> Vec<RecordId> {
        let mut sets = Vec::with_capacity(terms.len());
        for term in terms {
            match self.postings.get(term.as_ref()) {
                Some(ids) => sets.push(ids),
                None => return Vec::new(),
            }
        }

        // Intersect smallest first
        sets.sort_by_key(|ids| ids.len());
        let Some((first, rest)) = sets.split_first() else {
            return Vec::new();
        };

        let mut acc = (*first).clone();
        for ids in rest {
            acc &= *ids;
            if acc.is_empty() {
                break;
            }
        }
        acc.iter().collect()
    }

    pub fn contains(&self, term: &str, id: RecordId) -> bool {
        self.postings
            .get(term)
            .is_some_and(|ids| ids.contains(id))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
