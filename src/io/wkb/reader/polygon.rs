use crate::error::WKBResult;
use crate::geometry::{Polygon, COUNT_SIZE};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBReader;

/// Read the body of a WKB Polygon: numRings, then for each ring numPoints and XY pairs
pub(crate) fn read_polygon_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<Polygon> {
    let num_rings = reader.read_count(endianness, COUNT_SIZE)?;
    let rings = (0..num_rings)
        .map(|_| reader.read_coords(endianness))
        .collect::<WKBResult<Vec<_>>>()?;
    Ok(Polygon::new(rings))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WKBError;
    use crate::io::wkb::reader::read_header;
    use crate::test::polygon::{p1, p1_geo};
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn polygon_round_trip() {
        let buf = geo::Geometry::Polygon(p1_geo())
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        let mut reader = WKBReader::new(&buf, 0);
        let header = read_header(&mut reader).unwrap();
        let geom = read_polygon_body(&mut reader, header.endianness).unwrap();

        assert_eq!(geom, p1());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_ring() {
        let mut buf = 1u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&[0u8; 3 * 16 + 8]);
        let mut reader = WKBReader::new(&buf, 0);
        assert!(matches!(
            read_polygon_body(&mut reader, Endianness::LittleEndian),
            Err(WKBError::TruncatedInput { needed: 64, .. })
        ));
    }
}
