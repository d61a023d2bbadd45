use core::convert::TryFrom;
use core::fmt;

/// Object Dictionary data types with their standard type codes.
///
/// The code is what device descriptions and the data-type area of the
/// dictionary itself (0x0001 - 0x025F) call the type; the variant decides
/// how the access engine copies and byte-swaps the entry.
/// (Reference: CiA 301, Section 7.4.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    Boolean = 0x01,
    Integer8 = 0x02,
    Integer16 = 0x03,
    Integer32 = 0x04,
    Unsigned8 = 0x05,
    Unsigned16 = 0x06,
    Unsigned32 = 0x07,
    Real32 = 0x08,
    VisibleString = 0x09,
    OctetString = 0x0A,
    UnicodeString = 0x0B,
    TimeOfDay = 0x0C,
    TimeDifference = 0x0D,
    Domain = 0x0F,
    Integer24 = 0x10,
    Real64 = 0x11,
    Integer40 = 0x12,
    Integer48 = 0x13,
    Integer56 = 0x14,
    Integer64 = 0x15,
    Unsigned24 = 0x16,
    Unsigned40 = 0x18,
    Unsigned48 = 0x19,
    Unsigned56 = 0x1A,
    Unsigned64 = 0x1B,
}

impl DataType {
    /// Whether endianized accesses byte-swap values of this type.
    ///
    /// Numeric scalars travel most significant byte first on the wire.
    /// Booleans and the string/time/domain family keep their storage layout.
    pub fn is_endian_sensitive(self) -> bool {
        !matches!(
            self,
            DataType::Boolean
                | DataType::VisibleString
                | DataType::OctetString
                | DataType::UnicodeString
                | DataType::TimeOfDay
                | DataType::TimeDifference
                | DataType::Domain
        )
    }
}

/// Error type for unknown or reserved data-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDataTypeError(pub u8);

impl fmt::Display for InvalidDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data type code: {:#04X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidDataTypeError {}

impl TryFrom<u8> for DataType {
    type Error = InvalidDataTypeError;

    /// Decodes a standard type code, rejecting reserved values.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(DataType::Boolean),
            0x02 => Ok(DataType::Integer8),
            0x03 => Ok(DataType::Integer16),
            0x04 => Ok(DataType::Integer32),
            0x05 => Ok(DataType::Unsigned8),
            0x06 => Ok(DataType::Unsigned16),
            0x07 => Ok(DataType::Unsigned32),
            0x08 => Ok(DataType::Real32),
            0x09 => Ok(DataType::VisibleString),
            0x0A => Ok(DataType::OctetString),
            0x0B => Ok(DataType::UnicodeString),
            0x0C => Ok(DataType::TimeOfDay),
            0x0D => Ok(DataType::TimeDifference),
            0x0F => Ok(DataType::Domain),
            0x10 => Ok(DataType::Integer24),
            0x11 => Ok(DataType::Real64),
            0x12 => Ok(DataType::Integer40),
            0x13 => Ok(DataType::Integer48),
            0x14 => Ok(DataType::Integer56),
            0x15 => Ok(DataType::Integer64),
            0x16 => Ok(DataType::Unsigned24),
            0x18 => Ok(DataType::Unsigned40),
            0x19 => Ok(DataType::Unsigned48),
            0x1A => Ok(DataType::Unsigned56),
            0x1B => Ok(DataType::Unsigned64),
            _ => Err(InvalidDataTypeError(value)),
        }
    }
}

impl From<DataType> for u8 {
    /// The standard type code. This conversion is infallible.
    fn from(data_type: DataType) -> Self {
        data_type as u8
    }
}
