use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{Polygon, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::{top_level_srid, write_coords, write_count, write_header};

/// Write a Polygon geometry to a Writer encoded as EWKB
pub fn write_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &Polygon,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_polygon(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_polygon<W: Write + ?Sized>(
    writer: &mut W,
    geom: &Polygon,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::Polygon, srid, endianness)?;

    // numRings
    write_count(writer, geom.num_rings(), endianness)?;

    for ring in geom.rings() {
        write_coords(writer, ring, endianness)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p1, p1_geo};
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn matches_geozero() {
        let mut buf = vec![];
        write_polygon_as_wkb(&mut buf, &p1(), &Default::default()).unwrap();

        let expected = geo::Geometry::Polygon(p1_geo())
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), p1().byte_length());
    }

    #[test]
    fn empty_polygon() {
        let mut buf = vec![];
        write_polygon_as_wkb(&mut buf, &Polygon::default(), &Default::default()).unwrap();
        assert_eq!(buf, vec![0x01, 0x03, 0, 0, 0, 0, 0, 0, 0]);
    }
}
