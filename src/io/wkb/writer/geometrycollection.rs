use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{GeometryCollection, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::geometry::write_geometry;
use crate::io::wkb::writer::{top_level_srid, write_count, write_header};

/// Write a GeometryCollection geometry to a Writer encoded as EWKB
pub fn write_geometry_collection_as_wkb<W: Write>(
    mut writer: W,
    geom: &GeometryCollection,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_geometry_collection(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_geometry_collection<W: Write + ?Sized>(
    writer: &mut W,
    geom: &GeometryCollection,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::GeometryCollection, srid, endianness)?;

    // numGeometries
    write_count(writer, geom.num_geometries(), endianness)?;

    for inner_geom in geom.geometries() {
        write_geometry(writer, inner_geom, None, endianness)?;
    }

    Ok(())
}
