use crate::error::WKBResult;
use crate::geometry::{GeometryCollection, COUNT_SIZE, HEADER_SIZE};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::{read_geometry, WKBReader};

/// Read the body of a WKB GeometryCollection: numGeometries, then nodes of any type
pub(crate) fn read_geometry_collection_body(
    reader: &mut WKBReader,
    endianness: Endianness,
    depth: usize,
) -> WKBResult<GeometryCollection> {
    let num_geometries = reader.read_count(endianness, HEADER_SIZE + COUNT_SIZE)?;
    let geometries = (0..num_geometries)
        .map(|_| read_geometry(reader, depth + 1))
        .collect::<WKBResult<Vec<_>>>()?;
    Ok(GeometryCollection::new(geometries))
}
