use crate::error::WKBResult;
use crate::geometry::{MultiPoint, WKBType, POINT_SIZE};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::point::read_point_body;
use crate::io::wkb::reader::{read_member_header, WKBReader};

/// Read the body of a WKB MultiPoint: numPoints, then that many complete Point nodes
pub(crate) fn read_multi_point_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<MultiPoint> {
    let num_points = reader.read_count(endianness, POINT_SIZE)?;
    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let header = read_member_header(reader, WKBType::MultiPoint, WKBType::Point)?;
        coords.push(read_point_body(reader, header.endianness)?.coord());
    }
    Ok(MultiPoint::new(coords))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WKBError;
    use crate::geometry::Coord;
    use crate::io::wkb::reader::read_header;
    use crate::test::multipoint::{mp0, mp0_geo};
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn multi_point_round_trip() {
        let buf = geo::Geometry::MultiPoint(mp0_geo())
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        let mut reader = WKBReader::new(&buf, 0);
        let header = read_header(&mut reader).unwrap();
        let geom = read_multi_point_body(&mut reader, header.endianness).unwrap();

        assert_eq!(geom, mp0());
        assert_eq!(geom.byte_length(), buf.len());
    }

    #[test]
    fn rejects_non_point_member() {
        let mut buf = 1u32.to_le_bytes().to_vec();
        // an empty LineString node, padded to the size of a Point
        buf.extend_from_slice(&[0x01, 0x02, 0, 0, 0, 0, 0, 0, 0]);
        buf.extend_from_slice(&[0u8; 12]);
        let mut reader = WKBReader::new(&buf, 0);
        assert!(matches!(
            read_multi_point_body(&mut reader, Endianness::LittleEndian),
            Err(WKBError::UnexpectedChildType {
                parent: "MultiPoint",
                found: 2
            })
        ));
    }

    #[test]
    fn members_keep_their_own_byte_order() {
        let mut buf = 2u32.to_be_bytes().to_vec();
        buf.extend_from_slice(&[0x01, 0x01, 0, 0, 0]);
        buf.extend_from_slice(&1f64.to_le_bytes());
        buf.extend_from_slice(&2f64.to_le_bytes());
        buf.extend_from_slice(&[0x00, 0, 0, 0, 0x01]);
        buf.extend_from_slice(&3f64.to_be_bytes());
        buf.extend_from_slice(&4f64.to_be_bytes());

        let mut reader = WKBReader::new(&buf, 0);
        let geom = read_multi_point_body(&mut reader, Endianness::BigEndian).unwrap();
        let expected = MultiPoint::new(vec![Coord::new(1., 2.), Coord::new(3., 4.)]);
        assert_eq!(geom, expected);
    }
}
