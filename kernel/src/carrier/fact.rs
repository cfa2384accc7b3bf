//! Ground facts and the problem-wide fact table.

use std::collections::HashMap;
use std::fmt;

/// Stable index of a ground proposition within a problem's fact table.
///
/// Facts are never created or destroyed after grounding. Only their truth
/// value varies between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactId(u32);

impl FactId {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index as `usize`, for bitset addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Bidirectional mapping between fact names and [`FactId`]s.
///
/// Ids are assigned densely in interning order, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTableV1 {
    names: Vec<String>,
    by_name: HashMap<String, FactId>,
}

impl FactTableV1 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, assigning the next free id if unseen.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` facts are interned.
    pub fn intern(&mut self, name: &str) -> FactId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = FactId::new(u32::try_from(self.names.len()).expect("fact table overflow"));
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up an already interned fact.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FactId> {
        self.by_name.get(name).copied()
    }

    /// Name of a fact, if the id is in range.
    #[must_use]
    pub fn name(&self, id: FactId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Fact names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Number of facts in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `id` addresses a fact of this table.
    #[must_use]
    pub fn contains(&self, id: FactId) -> bool {
        id.index() < self.names.len()
    }
}
