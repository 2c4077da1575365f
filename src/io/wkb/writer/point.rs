use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{Point, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::{top_level_srid, write_coord, write_header};

/// Write a Point geometry to a Writer encoded as EWKB
pub fn write_point_as_wkb<W: Write>(
    mut writer: W,
    geom: &Point,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_point(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_point<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Point,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::Point, srid, endianness)?;
    write_coord(writer, &geom.coord(), endianness)
}
