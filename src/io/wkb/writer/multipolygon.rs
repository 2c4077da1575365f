use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{MultiPolygon, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::polygon::write_polygon;
use crate::io::wkb::writer::{top_level_srid, write_count, write_header};

/// Write a MultiPolygon geometry to a Writer encoded as EWKB
pub fn write_multi_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &MultiPolygon,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_multi_polygon(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_multi_polygon<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPolygon,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::MultiPolygon, srid, endianness)?;

    // numPolygons
    write_count(writer, geom.num_polygons(), endianness)?;

    for polygon in geom.polygons() {
        write_polygon(writer, polygon, None, endianness)?;
    }

    Ok(())
}
