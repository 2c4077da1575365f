use crate::error::WKBResult;
use crate::geometry::Point;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBReader;

/// Read the body of a WKB Point: X and Y
pub(crate) fn read_point_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<Point> {
    reader.read_coord(endianness).map(Point::from_coord)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::reader::read_header;
    use crate::test::point::p0_geo;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn point_round_trip() {
        let buf = geo::Geometry::Point(p0_geo())
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        let mut reader = WKBReader::new(&buf, 0);
        let header = read_header(&mut reader).unwrap();
        let point = read_point_body(&mut reader, header.endianness).unwrap();

        assert_eq!(point, Point::new(0., 1.));
        assert_eq!(reader.position(), buf.len());
    }

    #[test]
    fn big_endian_body() {
        let mut buf = 1.5f64.to_be_bytes().to_vec();
        buf.extend_from_slice(&(-2.25f64).to_be_bytes());
        let mut reader = WKBReader::new(&buf, 0);
        let point = read_point_body(&mut reader, Endianness::BigEndian).unwrap();
        approx::assert_relative_eq!(point.x(), 1.5);
        approx::assert_relative_eq!(point.y(), -2.25);
    }
}
