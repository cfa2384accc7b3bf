//! `StateV1`: an immutable set of true facts.
//!
//! # Layout
//!
//! A fixed-width bitset with one bit per fact of the problem's fact table,
//! packed into `u64` words (bit `i % 64` of word `i / 64`). Bits past
//! `fact_count` are always zero, so derived equality and hashing compare
//! fact-set content.
//!
//! # Copy-on-write
//!
//! There are no in-place mutators on the public surface. Every transition
//! ([`StateV1::with_delta`]) clones the word vector, so a derived state never
//! aliases its ancestor.

use crate::carrier::fact::FactId;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_STATE_FINGERPRINT};

const WORD_BITS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateV1 {
    fact_count: usize,
    words: Vec<u64>,
}

impl StateV1 {
    /// Create a state over `fact_count` facts with every fact false.
    #[must_use]
    pub fn empty(fact_count: usize) -> Self {
        Self {
            fact_count,
            words: vec![0; fact_count.div_ceil(WORD_BITS)],
        }
    }

    /// Create a state in which exactly `facts` are true.
    ///
    /// Ids outside `0..fact_count` are ignored; problem construction rejects
    /// them before a state is ever built from user input.
    #[must_use]
    pub fn from_facts(fact_count: usize, facts: impl IntoIterator<Item = FactId>) -> Self {
        let mut state = Self::empty(fact_count);
        for fact in facts {
            state.set(fact, true);
        }
        state
    }

    /// Number of facts in the universe this state ranges over.
    #[must_use]
    pub const fn fact_count(&self) -> usize {
        self.fact_count
    }

    /// Whether `fact` is true. Out-of-range ids are false.
    #[must_use]
    pub fn holds(&self, fact: FactId) -> bool {
        let i = fact.index();
        i < self.fact_count && self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0
    }

    /// Number of true facts.
    #[must_use]
    pub fn true_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the true facts in ascending id order.
    pub fn facts(&self) -> impl Iterator<Item = FactId> + '_ {
        (0..self.fact_count)
            .filter(|&i| self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0)
            .map(|i| FactId::new(u32::try_from(i).unwrap_or(u32::MAX)))
    }

    /// Derive a new state: `self` minus `delete`, plus `add`.
    ///
    /// Adds are applied after deletes, so a fact present in both lists ends
    /// up true.
    #[must_use]
    pub fn with_delta(&self, delete: &[FactId], add: &[FactId]) -> Self {
        let mut next = self.clone();
        for &fact in delete {
            next.set(fact, false);
        }
        for &fact in add {
            next.set(fact, true);
        }
        next
    }

    /// Serialize the bitset (fact count then words, little-endian).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.words.len() * 8);
        out.extend_from_slice(&(self.fact_count as u64).to_le_bytes());
        for word in &self.words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Content fingerprint of this state.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_STATE_FINGERPRINT, &self.to_bytes())
    }

    fn set(&mut self, fact: FactId, value: bool) {
        let i = fact.index();
        if i >= self.fact_count {
            return;
        }
        let mask = 1u64 << (i % WORD_BITS);
        if value {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }
}
