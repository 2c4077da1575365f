//! Decode WKB and PostGIS EWKB into owned geometries.
//!
//! Every node records its own byte order, so a buffer may mix big and little endian nodes.
//! Declared counts are checked against the remaining input before anything is allocated.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub(crate) use geometry::read_geometry;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{WKBError, WKBResult};
use crate::geometry::{Coord, WKBType, COORD_SIZE};
use crate::io::wkb::common::{parse_type_word, Endianness};

/// How many levels of geometry collections may be nested inside each other.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A bounds-checked cursor over a WKB buffer.
pub(crate) struct WKBReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WKBReader<'a> {
    pub(crate) fn new(buf: &'a [u8], offset: usize) -> Self {
        let mut cursor = Cursor::new(buf);
        cursor.set_position(offset as u64);
        Self { cursor }
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub(crate) fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    fn ensure(&self, needed: usize) -> WKBResult<()> {
        let available = self.remaining();
        if available < needed {
            return Err(WKBError::TruncatedInput {
                offset: self.position(),
                needed,
                available,
            });
        }
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> WKBResult<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub(crate) fn read_u32(&mut self, endianness: Endianness) -> WKBResult<u32> {
        self.ensure(4)?;
        let value = match endianness {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_coord(&mut self, endianness: Endianness) -> WKBResult<Coord> {
        self.ensure(COORD_SIZE)?;
        let (x, y) = match endianness {
            Endianness::BigEndian => (
                self.cursor.read_f64::<BigEndian>()?,
                self.cursor.read_f64::<BigEndian>()?,
            ),
            Endianness::LittleEndian => (
                self.cursor.read_f64::<LittleEndian>()?,
                self.cursor.read_f64::<LittleEndian>()?,
            ),
        };
        Ok(Coord::new(x, y))
    }

    /// Read an element count and check that the input can hold that many elements of at
    /// least `min_element_size` bytes each.
    pub(crate) fn read_count(
        &mut self,
        endianness: Endianness,
        min_element_size: usize,
    ) -> WKBResult<usize> {
        let count = self.read_u32(endianness)? as usize;
        self.ensure(count.saturating_mul(min_element_size))?;
        Ok(count)
    }

    /// Read a count followed by that many flat coordinates.
    pub(crate) fn read_coords(&mut self, endianness: Endianness) -> WKBResult<Vec<Coord>> {
        let count = self.read_count(endianness, COORD_SIZE)?;
        (0..count).map(|_| self.read_coord(endianness)).collect()
    }
}

/// The decoded header of one WKB node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Header {
    pub endianness: Endianness,
    pub wkb_type: WKBType,
    /// 0 when the node carries no SRID field.
    pub srid: u32,
}

pub(crate) fn read_header(reader: &mut WKBReader) -> WKBResult<Header> {
    let endianness = Endianness::try_from(reader.read_u8()?)?;
    let (wkb_type, has_srid) = parse_type_word(reader.read_u32(endianness)?)?;
    let srid = if has_srid {
        reader.read_u32(endianness)?
    } else {
        0
    };
    Ok(Header {
        endianness,
        wkb_type,
        srid,
    })
}

/// Read the header of a member of a multi geometry and check that it has the member type.
pub(crate) fn read_member_header(
    reader: &mut WKBReader,
    parent: WKBType,
    expected: WKBType,
) -> WKBResult<Header> {
    let header = read_header(reader)?;
    if header.wkb_type != expected {
        return Err(WKBError::UnexpectedChildType {
            parent: parent.name(),
            found: header.wkb_type.into(),
        });
    }
    Ok(header)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_with_srid() {
        let buf = [0x01, 0x01, 0x00, 0x00, 0x20, 0xE6, 0x10, 0x00, 0x00];
        let mut reader = WKBReader::new(&buf, 0);
        let header = read_header(&mut reader).unwrap();
        assert_eq!(
            header,
            Header {
                endianness: Endianness::LittleEndian,
                wkb_type: WKBType::Point,
                srid: 4326,
            }
        );
        assert_eq!(reader.position(), 9);
    }

    #[test]
    fn truncated_header() {
        let buf = [0x00, 0x20, 0x00, 0x00, 0x01, 0x00];
        let mut reader = WKBReader::new(&buf, 0);
        assert!(matches!(
            read_header(&mut reader),
            Err(WKBError::TruncatedInput {
                offset: 5,
                needed: 4,
                available: 1
            })
        ));
    }

    #[test]
    fn count_larger_than_input() {
        let buf = [0xff, 0xff, 0xff, 0xff, 0x00];
        let mut reader = WKBReader::new(&buf, 0);
        assert!(matches!(
            reader.read_count(Endianness::LittleEndian, COORD_SIZE),
            Err(WKBError::TruncatedInput { available: 1, .. })
        ));
    }

    #[test]
    fn offset_past_end() {
        let buf = [0x01];
        let mut reader = WKBReader::new(&buf, 4);
        assert_eq!(reader.remaining(), 0);
        assert!(reader.read_u8().is_err());
    }
}
