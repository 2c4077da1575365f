use crate::io::wkb::common::Endianness;

/// Options for writing WKB.
///
/// Every node of an encoded geometry is written with the same byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WKBWriteOptions {
    /// The byte order of the output. Defaults to little endian.
    pub endianness: Endianness,
}

impl WKBWriteOptions {
    pub fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }

    pub fn big_endian() -> Self {
        Self::new(Endianness::BigEndian)
    }
}
