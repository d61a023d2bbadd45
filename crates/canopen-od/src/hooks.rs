//! Injected device-profile policies: value-range validation and persistence
//! notification. Both default to no-ops so a bare engine works out of the
//! box.

use crate::error::AbortCode;
use crate::types::DataType;

/// Semantic validation of values about to be written.
///
/// Device profiles constrain entries beyond their declared type (numeric
/// limits, enumerations, device-state rules). The engine hands the
/// validator the bytes about to be stored, already in the dictionary's
/// canonical big-endian layout, before any copy happens; returning an abort
/// code vetoes the write and is relayed to the requesting peer.
pub trait RangeValidator {
    fn validate(&self, data_type: DataType, value: &[u8]) -> Result<(), AbortCode>;
}

impl<T: RangeValidator> RangeValidator for &T {
    fn validate(&self, data_type: DataType, value: &[u8]) -> Result<(), AbortCode> {
        (**self).validate(data_type, value)
    }
}

/// Accepts every value. The default policy for profiles without range
/// constraints.
#[derive(Debug, Default)]
pub struct NoRangeCheck;

impl RangeValidator for NoRangeCheck {
    fn validate(&self, _data_type: DataType, _value: &[u8]) -> Result<(), AbortCode> {
        Ok(())
    }
}

/// Receiver of persist-on-write notifications.
///
/// Fired after a successful write to an entry carrying the persist flag.
/// The notification is fire-and-forget: durability and ordering are the
/// backend's concern, and the engine neither checks a result nor waits.
pub trait StoreNotifier {
    fn entry_changed(&self, index: u16, subindex: u8);
}

impl<T: StoreNotifier> StoreNotifier for &T {
    fn entry_changed(&self, index: u16, subindex: u8) {
        (**self).entry_changed(index, subindex)
    }
}

/// Discards every notification. The default for devices without
/// non-volatile parameter storage.
#[derive(Debug, Default)]
pub struct NoStore;

impl StoreNotifier for NoStore {
    fn entry_changed(&self, _index: u16, _subindex: u8) {}
}
