use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Convert a [`geo::Coord`] to a coordinate.
pub fn coord_from_geo(coord: &geo::Coord) -> Coord {
    Coord::new(coord.x, coord.y)
}

fn coords_from_geo(line_string: &geo::LineString) -> Vec<Coord> {
    line_string.coords().map(coord_from_geo).collect()
}

/// Convert any [`geo::Geometry`] to a geometry.
///
/// `Line` becomes a two point LineString, `Rect` and `Triangle` become Polygons.
pub fn geometry_from_geo(geom: &geo::Geometry) -> Geometry {
    match geom {
        geo::Geometry::Point(g) => Point::from(g).into(),
        geo::Geometry::Line(g) => {
            LineString::new(vec![coord_from_geo(&g.start), coord_from_geo(&g.end)]).into()
        }
        geo::Geometry::LineString(g) => LineString::from(g).into(),
        geo::Geometry::Polygon(g) => Polygon::from(g).into(),
        geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
        geo::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
        geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
        geo::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
        geo::Geometry::Rect(g) => Polygon::from(&g.to_polygon()).into(),
        geo::Geometry::Triangle(g) => Polygon::from(&g.to_polygon()).into(),
    }
}

impl From<&geo::Point> for Point {
    fn from(value: &geo::Point) -> Self {
        Point::from_coord(coord_from_geo(&value.0))
    }
}

impl From<&geo::LineString> for LineString {
    fn from(value: &geo::LineString) -> Self {
        LineString::new(coords_from_geo(value))
    }
}

/// The exterior is always kept as the first ring, even when it is empty.
impl From<&geo::Polygon> for Polygon {
    fn from(value: &geo::Polygon) -> Self {
        std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(coords_from_geo)
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<&geo::MultiPoint> for MultiPoint {
    fn from(value: &geo::MultiPoint) -> Self {
        value.iter().map(|point| coord_from_geo(&point.0)).collect()
    }
}

impl From<&geo::MultiLineString> for MultiLineString {
    fn from(value: &geo::MultiLineString) -> Self {
        value.iter().map(LineString::from).collect()
    }
}

impl From<&geo::MultiPolygon> for MultiPolygon {
    fn from(value: &geo::MultiPolygon) -> Self {
        value.iter().map(Polygon::from).collect()
    }
}

impl From<&geo::GeometryCollection> for GeometryCollection {
    fn from(value: &geo::GeometryCollection) -> Self {
        value.iter().map(geometry_from_geo).collect()
    }
}

impl From<&geo::Geometry> for Geometry {
    fn from(value: &geo::Geometry) -> Self {
        geometry_from_geo(value)
    }
}

impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        geometry_from_geo(&value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geo::geometry_to_geo;
    use crate::test::geometrycollection::gc0;
    use crate::test::linestring::{ls0, ls0_geo};
    use crate::test::multilinestring::{ml0, ml0_geo};
    use crate::test::multipoint::{mp0, mp0_geo};
    use crate::test::point::{p0, p0_geo};
    use crate::test::polygon::{p1, p1_geo};
    use geo::{coord, Rect};

    #[test]
    fn from_geo() {
        assert_eq!(Point::from(&p0_geo()), p0());
        assert_eq!(LineString::from(&ls0_geo()), ls0());
        assert_eq!(Polygon::from(&p1_geo()), p1());
        assert_eq!(MultiPoint::from(&mp0_geo()), mp0());
        assert_eq!(MultiLineString::from(&ml0_geo()), ml0());
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = Rect::new(coord! { x: 0., y: 0. }, coord! { x: 1., y: 2. });
        let geom = Geometry::from(geo::Geometry::Rect(rect));
        let polygon = geom.as_polygon().unwrap();
        assert_eq!(polygon.num_rings(), 1);
        assert_eq!(polygon.exterior().unwrap().len(), 5);
    }

    #[test]
    fn line_becomes_line_string() {
        let line = geo::Line::new(coord! { x: 0., y: 1. }, coord! { x: 1., y: 2. });
        assert_eq!(
            Geometry::from(geo::Geometry::Line(line)),
            Geometry::from(ls0())
        );
    }

    #[test]
    fn collection_round_trip() {
        let gc: Geometry = gc0().into();
        assert_eq!(Geometry::from(geometry_to_geo(&gc)), gc);
    }
}
