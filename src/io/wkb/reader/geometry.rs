use log::trace;

use crate::error::{WKBError, WKBResult};
use crate::geometry::{Geometry, WKBType};
use crate::io::wkb::reader::geometrycollection::read_geometry_collection_body;
use crate::io::wkb::reader::linestring::read_line_string_body;
use crate::io::wkb::reader::multilinestring::read_multi_line_string_body;
use crate::io::wkb::reader::multipoint::read_multi_point_body;
use crate::io::wkb::reader::multipolygon::read_multi_polygon_body;
use crate::io::wkb::reader::point::read_point_body;
use crate::io::wkb::reader::polygon::read_polygon_body;
use crate::io::wkb::reader::{read_header, WKBReader, MAX_NESTING_DEPTH};

/// Read one complete node, header and body, at the reader's position.
///
/// `depth` counts the geometry collections enclosing this node.
pub(crate) fn read_geometry(reader: &mut WKBReader, depth: usize) -> WKBResult<Geometry> {
    if depth > MAX_NESTING_DEPTH {
        return Err(WKBError::NestingTooDeep(MAX_NESTING_DEPTH));
    }

    let offset = reader.position();
    let header = read_header(reader)?;
    trace!(
        "reading {} at offset {offset} ({:?}, srid {})",
        header.wkb_type.name(),
        header.endianness,
        header.srid
    );

    let endianness = header.endianness;
    let geom: Geometry = match header.wkb_type {
        WKBType::Point => read_point_body(reader, endianness)?.into(),
        WKBType::LineString => read_line_string_body(reader, endianness)?.into(),
        WKBType::Polygon => read_polygon_body(reader, endianness)?.into(),
        WKBType::MultiPoint => read_multi_point_body(reader, endianness)?.into(),
        WKBType::MultiLineString => read_multi_line_string_body(reader, endianness)?.into(),
        WKBType::MultiPolygon => read_multi_polygon_body(reader, endianness)?.into(),
        WKBType::GeometryCollection => {
            read_geometry_collection_body(reader, endianness, depth)?.into()
        }
    };

    Ok(geom.with_srid(header.srid))
}
