// crates/canopen-od/src/dict.rs
//! Index resolution: the lookup contract the device profile supplies, and
//! the canonical table-driven implementation of it.

use crate::entry::IndexTable;

/// Maps a 16-bit index to its table of sub-index entries.
///
/// Implementations come out of device-profile compilation; the access
/// engine performs no lookup logic of its own beyond this single call.
pub trait IndexResolver {
    /// Returns the table for `index`, or `None` if the dictionary does not
    /// contain that index.
    fn resolve(&self, index: u16) -> Option<&IndexTable<'_>>;
}

impl<T: IndexResolver> IndexResolver for &T {
    fn resolve(&self, index: u16) -> Option<&IndexTable<'_>> {
        (**self).resolve(index)
    }
}

/// A complete Object Dictionary backed by a table set sorted by index.
///
/// This is the shape device profiles compile into: one static, ordered
/// sequence of index tables, resolved by binary search. Profile generation
/// itself lives outside this crate; anything that can hand out tables for
/// indices can stand in through [`IndexResolver`].
#[derive(Debug)]
pub struct ObjectDictionary<'a> {
    tables: &'a [IndexTable<'a>],
}

impl<'a> ObjectDictionary<'a> {
    /// Wraps a compiled table set. `tables` must be strictly ascending by
    /// index.
    pub fn new(tables: &'a [IndexTable<'a>]) -> Self {
        debug_assert!(tables.windows(2).all(|pair| pair[0].index < pair[1].index));
        Self { tables }
    }

    /// Number of indices in the dictionary.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl IndexResolver for ObjectDictionary<'_> {
    fn resolve(&self, index: u16) -> Option<&IndexTable<'_>> {
        self.tables
            .binary_search_by_key(&index, |table| table.index)
            .ok()
            .map(|position| &self.tables[position])
    }
}
