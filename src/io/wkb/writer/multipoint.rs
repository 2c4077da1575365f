use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{MultiPoint, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::point::write_point;
use crate::io::wkb::writer::{top_level_srid, write_count, write_header};

/// Write a MultiPoint geometry to a Writer encoded as EWKB
pub fn write_multi_point_as_wkb<W: Write>(
    mut writer: W,
    geom: &MultiPoint,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_multi_point(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_multi_point<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPoint,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::MultiPoint, srid, endianness)?;

    // numPoints
    write_count(writer, geom.num_points(), endianness)?;

    // Each member is a complete Point node
    for point in geom.points() {
        write_point(writer, &point, None, endianness)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipoint::{mp0, mp0_geo, mp1};
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn matches_geozero() {
        let mut buf = vec![];
        write_multi_point_as_wkb(&mut buf, &mp0(), &Default::default()).unwrap();

        let expected = geo::Geometry::MultiPoint(mp0_geo())
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        assert_eq!(buf, expected);
    }

    #[test]
    fn nested_points_have_no_srid() {
        let mut buf = vec![];
        let geom = mp1().with_srid(4326);
        write_multi_point_as_wkb(&mut buf, &geom, &Default::default()).unwrap();

        assert_eq!(buf.len(), 5 + 4 + 4 + 3 * 21);
        // first nested point header follows the count
        assert_eq!(&buf[13..18], &[0x01, 0x01, 0x00, 0x00, 0x00]);
    }
}
