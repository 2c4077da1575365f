//! Encode geometries as WKB, with the PostGIS SRID extension on the outermost node.
//!
//! Every public `write_*_as_wkb` function writes its geometry as a top-level value: the SRID
//! field is present iff the geometry's SRID is non-zero. Members of multi geometries and
//! collections are always written as plain WKB nodes without SRID.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::write_geometry_as_wkb;
pub use geometrycollection::write_geometry_collection_as_wkb;
pub use linestring::write_line_string_as_wkb;
pub use multilinestring::write_multi_line_string_as_wkb;
pub use multipoint::write_multi_point_as_wkb;
pub use multipolygon::write_multi_polygon_as_wkb;
pub use point::write_point_as_wkb;
pub use polygon::write_polygon_as_wkb;

pub(crate) use geometry::write_geometry;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::error::{WKBError, WKBResult};
use crate::geometry::{Coord, WKBType};
use crate::io::wkb::common::{type_word, Endianness};

/// The SRID to write for a top-level geometry, if any.
pub(crate) fn top_level_srid(srid: u32) -> Option<u32> {
    (srid != 0).then_some(srid)
}

/// Write the byte order marker, the type word and, if given, the SRID of one node.
pub(crate) fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    wkb_type: WKBType,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    writer.write_u8(endianness.into())?;
    write_u32(writer, type_word(wkb_type, srid.is_some()), endianness)?;
    if let Some(srid) = srid {
        write_u32(writer, srid, endianness)?;
    }
    Ok(())
}

pub(crate) fn write_u32<W: Write + ?Sized>(
    writer: &mut W,
    value: u32,
    endianness: Endianness,
) -> WKBResult<()> {
    match endianness {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

/// Write an element count, which the format limits to 32 bits.
pub(crate) fn write_count<W: Write + ?Sized>(
    writer: &mut W,
    count: usize,
    endianness: Endianness,
) -> WKBResult<()> {
    let count: u32 = count.try_into().map_err(|_| WKBError::Overflow)?;
    write_u32(writer, count, endianness)
}

pub(crate) fn write_coord<W: Write + ?Sized>(
    writer: &mut W,
    coord: &Coord,
    endianness: Endianness,
) -> WKBResult<()> {
    match endianness {
        Endianness::BigEndian => {
            writer.write_f64::<BigEndian>(coord.x())?;
            writer.write_f64::<BigEndian>(coord.y())?;
        }
        Endianness::LittleEndian => {
            writer.write_f64::<LittleEndian>(coord.x())?;
            writer.write_f64::<LittleEndian>(coord.y())?;
        }
    }
    Ok(())
}

/// Write a count followed by that many flat coordinates.
pub(crate) fn write_coords<W: Write + ?Sized>(
    writer: &mut W,
    coords: &[Coord],
    endianness: Endianness,
) -> WKBResult<()> {
    write_count(writer, coords.len(), endianness)?;
    for coord in coords {
        write_coord(writer, coord, endianness)?;
    }
    Ok(())
}
