use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::Geometry;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::geometrycollection::write_geometry_collection;
use crate::io::wkb::writer::linestring::write_line_string;
use crate::io::wkb::writer::multilinestring::write_multi_line_string;
use crate::io::wkb::writer::multipoint::write_multi_point;
use crate::io::wkb::writer::multipolygon::write_multi_polygon;
use crate::io::wkb::writer::point::write_point;
use crate::io::wkb::writer::polygon::write_polygon;
use crate::io::wkb::writer::top_level_srid;

/// Write a Geometry to a Writer encoded as EWKB
pub fn write_geometry_as_wkb<W: Write>(
    mut writer: W,
    geom: &Geometry,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_geometry(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_geometry<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Geometry,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    use Geometry::*;
    match geom {
        Point(p) => write_point(writer, p, srid, endianness),
        LineString(ls) => write_line_string(writer, ls, srid, endianness),
        Polygon(p) => write_polygon(writer, p, srid, endianness),
        MultiPoint(mp) => write_multi_point(writer, mp, srid, endianness),
        MultiLineString(ml) => write_multi_line_string(writer, ml, srid, endianness),
        MultiPolygon(mp) => write_multi_polygon(writer, mp, srid, endianness),
        GeometryCollection(gc) => write_geometry_collection(writer, gc, srid, endianness),
    }
}
