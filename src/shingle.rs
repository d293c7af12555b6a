//! Shingle (n-gram) construction.
//!
//! A shingle is a contiguous window of n tokens, the atomic unit of
//! comparison. Comparing shingles instead of single words tolerates minor
//! wording differences while still penalizing structural mismatches.
//!
//! Two collection representations exist and are *not* interchangeable:
//!
//! - [`OverlapStrategy::Set`]: distinct shingles only; a repeated n-gram
//!   counts once.
//! - [`OverlapStrategy::Multiset`]: shingle → occurrence count; repeated
//!   n-grams are penalized/rewarded once per occurrence.
//!
//! Scores produced under different strategies are not comparable. Multiset
//! is the default: it generalizes the set comparison, which is the special
//! case of clamping every count to 1.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single shingle: up to n consecutive tokens.
///
/// Shorter than n only for documents with fewer than n tokens (the
/// truncated-tuple policy, see [`Shingles::build`]).
pub type Shingle = Vec<String>;

/// Which shingle collection representation the scorer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapStrategy {
    /// Distinct shingles; repeats collapse.
    Set,
    /// Count-preserving; repeats score per occurrence.
    Multiset,
}

/// A shingle collection in one of the two representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shingles {
    /// Presence-only representation.
    Set(HashSet<Shingle>),
    /// Frequency-aware representation.
    Multiset(HashMap<Shingle, usize>),
}

impl Shingles {
    /// Build the shingle collection for a token sequence.
    ///
    /// For a sequence of length L ≥ n this produces the L − n + 1
    /// overlapping windows (all of them for the multiset, the distinct ones
    /// for the set). A non-empty sequence shorter than n yields a single
    /// truncated shingle of all available tokens, so very short documents
    /// still contribute a comparable unit instead of vanishing from
    /// scoring. An empty sequence yields an empty collection.
    #[must_use]
    pub fn build(tokens: &[String], n: usize, strategy: OverlapStrategy) -> Self {
        let n = n.max(1);
        match strategy {
            OverlapStrategy::Set => {
                let mut set = HashSet::new();
                for window in windows(tokens, n) {
                    set.insert(window);
                }
                Shingles::Set(set)
            }
            OverlapStrategy::Multiset => {
                let mut counts = HashMap::new();
                for window in windows(tokens, n) {
                    *counts.entry(window).or_insert(0) += 1;
                }
                Shingles::Multiset(counts)
            }
        }
    }

    /// The strategy this collection was built under.
    #[must_use]
    pub fn strategy(&self) -> OverlapStrategy {
        match self {
            Shingles::Set(_) => OverlapStrategy::Set,
            Shingles::Multiset(_) => OverlapStrategy::Multiset,
        }
    }

    /// Whether the collection holds no shingles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Shingles::Set(set) => set.is_empty(),
            Shingles::Multiset(counts) => counts.is_empty(),
        }
    }

    /// Total shingle count in this representation: distinct shingles for the
    /// set, occurrence sum for the multiset.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Shingles::Set(set) => set.len(),
            Shingles::Multiset(counts) => counts.values().sum(),
        }
    }

    /// Occurrence count of one shingle (0 or 1 for the set representation).
    #[must_use]
    pub fn count(&self, shingle: &[String]) -> usize {
        match self {
            Shingles::Set(set) => usize::from(set.contains(shingle)),
            Shingles::Multiset(counts) => counts.get(shingle).copied().unwrap_or(0),
        }
    }

    /// Iterate the distinct shingles in the collection.
    pub fn keys(&self) -> Box<dyn Iterator<Item = &Shingle> + '_> {
        match self {
            Shingles::Set(set) => Box::new(set.iter()),
            Shingles::Multiset(counts) => Box::new(counts.keys()),
        }
    }
}

/// Overlapping n-token windows with the truncated-tuple short-input policy.
fn windows(tokens: &[String], n: usize) -> Vec<Shingle> {
    if tokens.is_empty() {
        return Vec::new();
    }
    if tokens.len() < n {
        return vec![tokens.to_vec()];
    }
    tokens.windows(n).map(<[String]>::to_vec).collect()
}
