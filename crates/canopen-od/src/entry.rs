// crates/canopen-od/src/entry.rs

use crate::error::AbortCode;
use crate::types::DataType;
use core::cell::Cell;
use core::ops::BitOr;

/// Access attributes of one dictionary entry as a type-safe bitmask.
/// (Reference: CiA 301, Section 7.4.3, attribute column of the object
/// description format)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Access(pub u8);

impl Access {
    // --- Flag Constants ---
    /// Entry may be read by dictionary clients.
    pub const READ: Self = Self(1 << 0);
    /// Entry may be written by dictionary clients.
    pub const WRITE: Self = Self(1 << 1);
    /// Entry must be handed to the persistence backend after every write.
    pub const PERSIST: Self = Self(1 << 2);

    // --- Common Combinations ---
    pub const RO: Self = Self::READ;
    pub const WO: Self = Self::WRITE;
    pub const RW: Self = Self(Self::READ.0 | Self::WRITE.0);

    /// Returns an empty set of flags.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Checks if all of the specified flags are set.
    pub fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Inserts the specified flags.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Removes the specified flags.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub fn is_readable(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn is_writable(&self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn persists(&self) -> bool {
        self.contains(Self::PERSIST)
    }
}

impl BitOr for Access {
    type Output = Self;

    /// Implements the `|` operator for combining flags.
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Static description of one sub-index: semantic type, access rights and the
/// live storage window.
///
/// The storage window is owned by whoever built the table (static storage
/// duration on a running device) and the engine only ever copies bytes
/// inside it; its length is the declared size of the entry. Byte cells make
/// the window writable behind the shared references the tables are handed
/// out through.
#[derive(Debug)]
pub struct SubEntry<'a> {
    pub data_type: DataType,
    pub access: Access,
    pub storage: &'a [Cell<u8>],
}

impl<'a> SubEntry<'a> {
    pub fn new(data_type: DataType, access: Access, storage: &'a [Cell<u8>]) -> Self {
        Self {
            data_type,
            access,
            storage,
        }
    }

    /// Declared byte length of the entry. For `VisibleString` entries this
    /// is the maximum capacity, not the logical length.
    pub fn size(&self) -> usize {
        self.storage.len()
    }
}

/// Post-write hook bound to one sub-index of one index.
///
/// Runs synchronously on the writer's execution context after the copy and
/// before persistence notification; when invoked from an interrupt-like
/// context it must not perform unbounded-latency work. A returned abort
/// code becomes the overall result of the write.
pub type OdCallback = fn(&IndexTable<'_>, u8) -> Result<(), AbortCode>;

/// All sub-index entries of one dictionary index, plus one optional
/// callback slot per sub-index.
///
/// Tables are built once by the device profile and never change shape. The
/// callback slots and the storage bytes of the entries are the only mutable
/// cells; everything else stays read-only for the life of the device.
#[derive(Debug)]
pub struct IndexTable<'a> {
    pub index: u16,
    pub entries: &'a [SubEntry<'a>],
    pub callbacks: Option<&'a [Cell<Option<OdCallback>>]>,
}

impl<'a> IndexTable<'a> {
    /// Table without dynamic callback support. Callback registration on
    /// such an index is accepted but has no effect.
    pub fn new(index: u16, entries: &'a [SubEntry<'a>]) -> Self {
        Self {
            index,
            entries,
            callbacks: None,
        }
    }

    /// Table with one callback slot per sub-index. `slots` must parallel
    /// `entries`.
    pub fn with_callbacks(
        index: u16,
        entries: &'a [SubEntry<'a>],
        slots: &'a [Cell<Option<OdCallback>>],
    ) -> Self {
        debug_assert!(slots.len() == entries.len());
        Self {
            index,
            entries,
            callbacks: Some(slots),
        }
    }

    /// Number of sub-index entries in the table.
    pub fn sub_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, subindex: u8) -> Option<&SubEntry<'a>> {
        self.entries.get(usize::from(subindex))
    }

    /// The callback currently bound to a sub-index, if any.
    pub fn callback(&self, subindex: u8) -> Option<OdCallback> {
        self.callbacks
            .and_then(|slots| slots.get(usize::from(subindex)))
            .and_then(|slot| slot.get())
    }
}
