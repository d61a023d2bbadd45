use core::fmt;

/// Protocol abort codes shared with the surrounding request/response service.
///
/// Dictionary access failures are relayed to remote peers using this fixed
/// code space, so the discriminants are the standard 32-bit values.
/// (Reference: CiA 301, Section 7.2.4.3.17)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AbortCode {
    /// Out of memory; on reads, the destination cannot hold the entry.
    OutOfMemory = 0x0504_0005,
    /// Unsupported access to an object.
    UnsupportedAccess = 0x0601_0000,
    /// Attempt to read a write-only object.
    ReadNotAllowed = 0x0601_0001,
    /// Attempt to write a read-only object.
    WriteNotAllowed = 0x0601_0002,
    /// Object does not exist in the object dictionary.
    NoSuchObject = 0x0602_0000,
    /// Data type or length of service parameter does not match.
    LengthDataInvalid = 0x0607_0010,
    /// Sub-index does not exist.
    NoSuchSubindex = 0x0609_0011,
    /// Value range of parameter exceeded.
    ValueRangeExceeded = 0x0609_0030,
    /// Value of parameter written too high.
    ValueTooHigh = 0x0609_0031,
    /// Value of parameter written too low.
    ValueTooLow = 0x0609_0032,
    /// General error.
    GeneralError = 0x0800_0000,
}

impl AbortCode {
    /// The raw 32-bit code as transmitted to a remote peer.
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for AbortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.code())
    }
}

/// Failure modes of dictionary access operations.
///
/// Every variant maps onto the protocol abort-code space via
/// [`AccessError::abort_code`]; the payload-carrying variants additionally
/// report the size information a caller needs to correct and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The requested index does not exist in the dictionary.
    NoSuchObject,
    /// The requested sub-index is out of range for an existing index.
    NoSuchSubindex,
    /// Rights-checking was requested and the entry is not readable.
    ReadNotAllowed,
    /// Rights-checking was requested and the entry is not writable.
    WriteNotAllowed,
    /// The given size violates the entry's size rule; carries the declared
    /// size so the caller can retry with a corrected buffer.
    SizeMismatch { declared: usize },
    /// The destination buffer cannot hold the entry; carries the size a
    /// retry needs.
    BufferTooSmall { needed: usize },
    /// The value-range validator vetoed the write before any copy.
    Rejected(AbortCode),
    /// A registered post-write callback refused the write. The copy has
    /// already happened when this is returned.
    CallbackFailed(AbortCode),
}

impl AccessError {
    /// Maps the failure onto the shared protocol abort-code space.
    pub fn abort_code(&self) -> AbortCode {
        match self {
            Self::NoSuchObject => AbortCode::NoSuchObject,
            Self::NoSuchSubindex => AbortCode::NoSuchSubindex,
            Self::ReadNotAllowed => AbortCode::ReadNotAllowed,
            Self::WriteNotAllowed => AbortCode::WriteNotAllowed,
            Self::SizeMismatch { .. } => AbortCode::LengthDataInvalid,
            Self::BufferTooSmall { .. } => AbortCode::OutOfMemory,
            Self::Rejected(code) => *code,
            Self::CallbackFailed(code) => *code,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchObject => write!(f, "The requested index was not found in the dictionary"),
            Self::NoSuchSubindex => write!(f, "The requested sub-index was not found for this index"),
            Self::ReadNotAllowed => write!(f, "The entry is not readable"),
            Self::WriteNotAllowed => write!(f, "The entry is not writable"),
            Self::SizeMismatch { declared } => {
                write!(f, "Given size does not match the declared size of {declared} bytes")
            }
            Self::BufferTooSmall { needed } => {
                write!(f, "Destination buffer too small; {needed} bytes required")
            }
            Self::Rejected(code) => write!(f, "Value rejected by range validation: {code}"),
            Self::CallbackFailed(code) => write!(f, "Post-write callback refused the write: {code}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}
