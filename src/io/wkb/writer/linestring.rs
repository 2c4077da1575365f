use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{LineString, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::{top_level_srid, write_coords, write_header};

/// Write a LineString geometry to a Writer encoded as EWKB
pub fn write_line_string_as_wkb<W: Write>(
    mut writer: W,
    geom: &LineString,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_line_string(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_line_string<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::LineString, srid, endianness)?;

    // numPoints, then flat XY pairs
    write_coords(writer, geom.coords(), endianness)
}
