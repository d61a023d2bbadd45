// crates/canopen-od/src/engine.rs
//! The typed entry access engine: resolve, check rights and size, convert
//! byte order, copy, then run the post-write hooks.

use crate::dict::IndexResolver;
use crate::entry::{Access, IndexTable, OdCallback, SubEntry};
use crate::error::{AbortCode, AccessError};
use crate::hooks::{NoRangeCheck, NoStore, RangeValidator, StoreNotifier};
use crate::types::DataType;
use core::cell::Cell;
use log::{trace, warn};

/// Diagnostic report for a refused access. Size fields are zero when the
/// failure happened before they were known.
fn report(index: u16, subindex: u8, declared: usize, given: usize, code: AbortCode) {
    warn!(
        "[OD] access to {:#06X}/{} refused: declared={} given={} abort={:#010X}",
        index,
        subindex,
        declared,
        given,
        code.code()
    );
}

/// Copies the zero-truncated run out of a string entry and returns the
/// logical length. The destination is zero-terminated when the run is
/// shorter than the declared capacity; it must be at least as large as the
/// storage window.
fn copy_string_out(storage: &[Cell<u8>], dest: &mut [u8]) -> usize {
    let mut copied = 0;
    while copied < storage.len() {
        let byte = storage[copied].get();
        if byte == 0 {
            break;
        }
        dest[copied] = byte;
        copied += 1;
    }
    if copied < storage.len() {
        dest[copied] = 0;
    }
    copied
}

macro_rules! typed_accessors {
    ($(($read_fn:ident, $write_fn:ident, $ty:ty)),+ $(,)?) => {
        $(
            /// Reads the entry as a native value through the endianized path.
            /// Fails with `SizeMismatch` when the entry does not have the
            /// width of the requested type.
            pub fn $read_fn(&self, index: u16, subindex: u8) -> Result<$ty, AccessError> {
                let mut buf = [0u8; size_of::<$ty>()];
                let produced = self.read(index, subindex, &mut buf, false, true)?;
                if produced != buf.len() {
                    return Err(AccessError::SizeMismatch { declared: produced });
                }
                Ok(<$ty>::from_ne_bytes(buf))
            }

            /// Writes a native value through the endianized path.
            pub fn $write_fn(
                &self,
                index: u16,
                subindex: u8,
                value: $ty,
            ) -> Result<(), AccessError> {
                let mut buf = value.to_ne_bytes();
                self.write(index, subindex, &mut buf, false, true)?;
                Ok(())
            }
        )+
    };
}

/// Dictionary access engine.
///
/// Generic over the three capabilities a device profile injects: the index
/// resolver, the value-range validator and the persistence notifier.
/// Scalars live in storage in the canonical big-endian wire layout; the
/// endianized entry points convert from and to the machine-native layout,
/// the raw entry points move bytes verbatim.
///
/// Every method takes `&self`, holds no lock and completes in time
/// proportional to the entry size. The engine is deliberately not `Sync`:
/// callers that invoke it from more than one execution context (main loop
/// plus interrupt, for instance) must serialize at the call boundary.
pub struct AccessEngine<R, V = NoRangeCheck, S = NoStore> {
    resolver: R,
    validator: V,
    store: S,
}

impl<R: IndexResolver> AccessEngine<R> {
    /// Engine with the no-op validator and persistence notifier.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            validator: NoRangeCheck,
            store: NoStore,
        }
    }
}

impl<R, V, S> AccessEngine<R, V, S>
where
    R: IndexResolver,
    V: RangeValidator,
    S: StoreNotifier,
{
    /// Engine with device-profile validation and persistence policies.
    pub fn with_hooks(resolver: R, validator: V, store: S) -> Self {
        Self {
            resolver,
            validator,
            store,
        }
    }

    /// The injected resolver; for table-driven setups, the dictionary
    /// itself.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn find(
        &self,
        index: u16,
        subindex: u8,
        given: usize,
    ) -> Result<(&IndexTable<'_>, &SubEntry<'_>), AccessError> {
        let Some(table) = self.resolver.resolve(index) else {
            report(index, subindex, 0, given, AbortCode::NoSuchObject);
            return Err(AccessError::NoSuchObject);
        };
        let Some(entry) = table.entry(subindex) else {
            report(index, subindex, 0, given, AbortCode::NoSuchSubindex);
            return Err(AccessError::NoSuchSubindex);
        };
        Ok((table, entry))
    }

    /// Reads entry `(index, subindex)` into `dest` and returns the number
    /// of bytes produced.
    ///
    /// `dest.len()` is the caller's capacity. If the declared entry size
    /// exceeds it the call fails with `BufferTooSmall` carrying the size a
    /// retry needs, so callers can discover entry sizes without a separate
    /// lookup. With `endianize`, scalars are converted from the canonical
    /// big-endian storage layout to the machine-native layout; without it,
    /// bytes are copied verbatim.
    ///
    /// `VisibleString` entries produce the logical (zero-truncated) run and
    /// report its length; the destination is zero-terminated when the run
    /// is shorter than the declared capacity.
    pub fn read(
        &self,
        index: u16,
        subindex: u8,
        dest: &mut [u8],
        check_access: bool,
        endianize: bool,
    ) -> Result<usize, AccessError> {
        let (_, entry) = self.find(index, subindex, 0)?;

        if check_access && !entry.access.is_readable() {
            report(index, subindex, 0, 0, AbortCode::ReadNotAllowed);
            return Err(AccessError::ReadNotAllowed);
        }

        let declared = entry.size();
        if declared > dest.len() {
            report(index, subindex, declared, dest.len(), AbortCode::OutOfMemory);
            return Err(AccessError::BufferTooSmall { needed: declared });
        }

        if entry.data_type == DataType::VisibleString {
            return Ok(copy_string_out(entry.storage, dest));
        }

        if endianize && entry.data_type.is_endian_sensitive() && cfg!(target_endian = "little") {
            for (byte, cell) in dest.iter_mut().zip(entry.storage.iter().rev()) {
                *byte = cell.get();
            }
        } else {
            for (byte, cell) in dest.iter_mut().zip(entry.storage.iter()) {
                *byte = cell.get();
            }
        }
        Ok(declared)
    }

    /// Writes `src` into entry `(index, subindex)` and returns the entry's
    /// declared size.
    ///
    /// `src.len()` is the given size. An entry accepts exactly its declared
    /// size, a shorter run for `VisibleString`, or an empty slice (the
    /// "use declared size" convention: the size rule passes and the
    /// post-write hooks run, but nothing is copied). Any other size fails
    /// with `SizeMismatch` carrying the declared size.
    ///
    /// With `endianize`, multi-byte scalars are reversed *in place* into
    /// the canonical big-endian layout before validation, so the range
    /// check needs no scratch buffer. The source slice stays reordered even
    /// when a later step fails; callers must tolerate that.
    ///
    /// A registered callback runs after the copy and may still refuse the
    /// write; storage then already holds the new value and the persistence
    /// notifier is not invoked.
    pub fn write(
        &self,
        index: u16,
        subindex: u8,
        src: &mut [u8],
        check_access: bool,
        endianize: bool,
    ) -> Result<usize, AccessError> {
        let (table, entry) = self.find(index, subindex, src.len())?;

        if check_access && !entry.access.is_writable() {
            report(index, subindex, 0, src.len(), AbortCode::WriteNotAllowed);
            return Err(AccessError::WriteNotAllowed);
        }

        let declared = entry.size();
        let given = src.len();
        let size_ok = given == 0
            || given == declared
            || (entry.data_type == DataType::VisibleString && given < declared);
        if !size_ok {
            report(index, subindex, declared, given, AbortCode::LengthDataInvalid);
            return Err(AccessError::SizeMismatch { declared });
        }

        if endianize && entry.data_type.is_endian_sensitive() && cfg!(target_endian = "little") {
            src.reverse();
        }

        if let Err(code) = self.validator.validate(entry.data_type, src) {
            report(index, subindex, declared, given, code);
            return Err(AccessError::Rejected(code));
        }

        for (cell, byte) in entry.storage.iter().zip(src.iter()) {
            cell.set(*byte);
        }
        if entry.data_type == DataType::VisibleString && given < declared {
            entry.storage[given].set(0);
        }

        if let Some(callback) = table.callback(subindex) {
            if let Err(code) = callback(table, subindex) {
                report(index, subindex, declared, given, code);
                return Err(AccessError::CallbackFailed(code));
            }
        }

        if entry.access.persists() {
            self.store.entry_changed(index, subindex);
        }

        Ok(declared)
    }

    /// Binds `callback` as the post-write hook of `(index, subindex)`,
    /// replacing any previous binding.
    ///
    /// Only resolver failures are reported. An index built without callback
    /// slots, or a sub-index beyond the slot array, accepts the
    /// registration silently without binding anything. Callers that depend
    /// on the hook must make sure the profile reserves slots for that
    /// index.
    pub fn register_callback(
        &self,
        index: u16,
        subindex: u8,
        callback: OdCallback,
    ) -> Result<(), AccessError> {
        let Some(table) = self.resolver.resolve(index) else {
            report(index, subindex, 0, 0, AbortCode::NoSuchObject);
            return Err(AccessError::NoSuchObject);
        };
        match table.callbacks.and_then(|slots| slots.get(usize::from(subindex))) {
            Some(slot) => {
                slot.set(Some(callback));
                trace!("[OD] callback bound for {:#06X}/{}", index, subindex);
            }
            None => {
                trace!(
                    "[OD] no callback slot for {:#06X}/{}; registration had no effect",
                    index,
                    subindex
                );
            }
        }
        Ok(())
    }

    /// Entry metadata: data type, access flags and declared size.
    ///
    /// Protocol servers need the type and size of an entry to encode a
    /// response before performing the transfer itself.
    pub fn describe(
        &self,
        index: u16,
        subindex: u8,
    ) -> Result<(DataType, Access, usize), AccessError> {
        let (_, entry) = self.find(index, subindex, 0)?;
        Ok((entry.data_type, entry.access, entry.size()))
    }

    // --- Typed Accessors (application-side convenience) ---
    typed_accessors! {
        (read_u8, write_u8, u8),
        (read_i8, write_i8, i8),
        (read_u16, write_u16, u16),
        (read_i16, write_i16, i16),
        (read_u32, write_u32, u32),
        (read_i32, write_i32, i32),
        (read_u64, write_u64, u64),
        (read_i64, write_i64, i64),
        (read_f32, write_f32, f32),
        (read_f64, write_f64, f64),
    }
}
