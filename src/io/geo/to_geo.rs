use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Convert a coordinate to a [`geo::Coord`].
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

fn coords_to_geo(coords: &[Coord]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(coord_to_geo).collect())
}

/// Convert any geometry to a [`geo::Geometry`].
pub fn geometry_to_geo(geom: &Geometry) -> geo::Geometry {
    match geom {
        Geometry::Point(g) => geo::Geometry::Point(g.into()),
        Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
        Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.into()),
        Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
        Geometry::GeometryCollection(g) => geo::Geometry::GeometryCollection(g.into()),
    }
}

impl From<&Point> for geo::Point {
    fn from(value: &Point) -> Self {
        geo::Point(coord_to_geo(&value.coord()))
    }
}

impl From<&LineString> for geo::LineString {
    fn from(value: &LineString) -> Self {
        coords_to_geo(value.coords())
    }
}

/// A polygon without rings becomes a geo polygon with an empty exterior.
impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        let exterior = value
            .exterior()
            .map(coords_to_geo)
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = value.interiors().map(coords_to_geo).collect();
        geo::Polygon::new(exterior, interiors)
    }
}

impl From<&MultiPoint> for geo::MultiPoint {
    fn from(value: &MultiPoint) -> Self {
        geo::MultiPoint::new(
            value
                .coords()
                .iter()
                .map(|coord| geo::Point(coord_to_geo(coord)))
                .collect(),
        )
    }
}

impl From<&MultiLineString> for geo::MultiLineString {
    fn from(value: &MultiLineString) -> Self {
        geo::MultiLineString::new(
            value
                .line_strings()
                .iter()
                .map(geo::LineString::from)
                .collect(),
        )
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon {
    fn from(value: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(value.polygons().iter().map(geo::Polygon::from).collect())
    }
}

impl From<&GeometryCollection> for geo::GeometryCollection {
    fn from(value: &GeometryCollection) -> Self {
        geo::GeometryCollection(value.geometries().iter().map(geometry_to_geo).collect())
    }
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geo(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::{ls0, ls0_geo};
    use crate::test::multilinestring::{ml0, ml0_geo};
    use crate::test::multipoint::{mp0, mp0_geo};
    use crate::test::point::{p0, p0_geo};
    use crate::test::polygon::{p1, p1_geo};

    #[test]
    fn to_geo() {
        assert_eq!(geo::Point::from(&p0()), p0_geo());
        assert_eq!(geo::LineString::from(&ls0()), ls0_geo());
        assert_eq!(geo::Polygon::from(&p1()), p1_geo());
        assert_eq!(geo::MultiPoint::from(&mp0()), mp0_geo());
        assert_eq!(geo::MultiLineString::from(&ml0()), ml0_geo());
    }

    #[test]
    fn empty_polygon() {
        let polygon = geo::Polygon::from(&Polygon::default());
        assert!(polygon.exterior().0.is_empty());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn collection() {
        let gc = GeometryCollection::new(vec![p0().into(), ls0().into()]);
        let geo_gc = geo::GeometryCollection::from(&gc);
        assert_eq!(geo_gc.0.len(), 2);
        assert_eq!(geo_gc.0[0], geo::Geometry::Point(p0_geo()));
    }
}
