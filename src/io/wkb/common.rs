use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{WKBError, WKBResult};
pub use crate::geometry::WKBType;

/// EWKB flag bit: an SRID follows the type word.
pub const SRID_FLAG: u32 = 0x2000_0000;

/// EWKB flag bit: coordinates carry an M value.
pub const M_FLAG: u32 = 0x4000_0000;

/// EWKB flag bit: coordinates carry a Z value.
pub const Z_FLAG: u32 = 0x8000_0000;

/// All EWKB extension bits of the type word.
pub const FLAG_MASK: u32 = SRID_FLAG | M_FLAG | Z_FLAG;

/// Byte order of one WKB node, as recorded in its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = WKBError;

    fn try_from(value: u8) -> WKBResult<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(WKBError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// Split a raw type word into its base type and SRID flag.
///
/// Z and M flags are rejected because only XY coordinates are modeled.
pub fn parse_type_word(type_word: u32) -> WKBResult<(WKBType, bool)> {
    if type_word & (Z_FLAG | M_FLAG) != 0 {
        return Err(WKBError::UnsupportedDimension(type_word));
    }
    let tag = type_word & !FLAG_MASK;
    let wkb_type = WKBType::try_from(tag).map_err(|_| WKBError::UnknownTypeTag(tag))?;
    Ok((wkb_type, type_word & SRID_FLAG != 0))
}

/// Build the type word for a node, setting the SRID flag when an SRID will follow.
pub fn type_word(wkb_type: WKBType, has_srid: bool) -> u32 {
    let tag: u32 = wkb_type.into();
    if has_srid {
        tag | SRID_FLAG
    } else {
        tag
    }
}

impl WKBType {
    /// Construct from a byte slice representing a WKB or EWKB geometry
    pub fn from_buffer(buf: &[u8]) -> WKBResult<Self> {
        if buf.len() < 5 {
            return Err(WKBError::TruncatedInput {
                offset: 0,
                needed: 5,
                available: buf.len(),
            });
        }
        let mut reader = Cursor::new(buf);
        let byte_order = Endianness::try_from(reader.read_u8()?)?;
        let geometry_type = match byte_order {
            Endianness::BigEndian => reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => reader.read_u32::<LittleEndian>()?,
        };
        parse_type_word(geometry_type).map(|(wkb_type, _)| wkb_type)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn masks_srid_flag() {
        assert_eq!(
            parse_type_word(0x2000_0001).unwrap(),
            (WKBType::Point, true)
        );
        assert_eq!(
            parse_type_word(7).unwrap(),
            (WKBType::GeometryCollection, false)
        );
        assert_eq!(type_word(WKBType::Point, true), 0x2000_0001);
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!(matches!(
            parse_type_word(0),
            Err(WKBError::UnknownTypeTag(0))
        ));
        assert!(matches!(
            parse_type_word(0x2000_0008),
            Err(WKBError::UnknownTypeTag(8))
        ));
        // ISO style PointZ
        assert!(matches!(
            parse_type_word(1001),
            Err(WKBError::UnknownTypeTag(1001))
        ));
    }

    #[test]
    fn rejects_z_and_m() {
        assert!(matches!(
            parse_type_word(0x8000_0001),
            Err(WKBError::UnsupportedDimension(_))
        ));
        assert!(matches!(
            parse_type_word(0x4000_0002),
            Err(WKBError::UnsupportedDimension(_))
        ));
    }

    #[test]
    fn from_buffer() {
        let buf = [0x00, 0x00, 0x00, 0x00, 0x03, 0xff];
        assert_eq!(WKBType::from_buffer(&buf).unwrap(), WKBType::Polygon);
        assert!(matches!(
            WKBType::from_buffer(&[0x02, 0, 0, 0, 1]),
            Err(WKBError::InvalidByteOrder(2))
        ));
        assert!(matches!(
            WKBType::from_buffer(&[0x01, 1]),
            Err(WKBError::TruncatedInput { .. })
        ));
    }
}
