use crate::error::WKBResult;
use crate::geometry::{MultiPolygon, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::polygon::read_polygon_body;
use crate::io::wkb::reader::{read_member_header, WKBReader};

/// Read the body of a WKB MultiPolygon: numPolygons, then complete Polygon nodes
pub(crate) fn read_multi_polygon_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<MultiPolygon> {
    let num_polygons = reader.read_count(endianness, HEADER_SIZE + COUNT_SIZE)?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        let header = read_member_header(reader, WKBType::MultiPolygon, WKBType::Polygon)?;
        let polygon = read_polygon_body(reader, header.endianness)?;
        polygons.push(polygon.with_srid(header.srid));
    }
    Ok(MultiPolygon::new(polygons))
}
