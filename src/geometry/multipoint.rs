use crate::error::WKBResult;
use crate::geometry::hash::{hash_sequence, HashCode};
use crate::geometry::macros::{impl_from_sequence, impl_geometry_base};
use crate::geometry::{get_checked, Coord, Point, WKBType, COUNT_SIZE, POINT_SIZE};

/// An ordered sequence of points.
///
/// On the wire every member is a complete nested WKB Point with its own 5 byte header, so
/// each one accounts for 21 bytes rather than the 16 of a bare coordinate.
#[derive(Debug, Clone, Default)]
pub struct MultiPoint {
    coords: Vec<Coord>,
    srid: u32,
}

impl MultiPoint {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords, srid: 0 }
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// An iterator over the members as standalone points.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.coords.iter().copied().map(Point::from_coord)
    }

    /// Access the coordinate of point `i`.
    pub fn coord(&self, i: usize) -> WKBResult<&Coord> {
        get_checked(&self.coords, i)
    }

    /// Access point `i`.
    pub fn point(&self, i: usize) -> WKBResult<Point> {
        self.coord(i).copied().map(Point::from_coord)
    }

    pub(crate) fn body_length(&self) -> usize {
        COUNT_SIZE + self.coords.len() * POINT_SIZE
    }
}

impl_geometry_base!(MultiPoint, WKBType::MultiPoint);
impl_from_sequence!(MultiPoint, coords, Coord);

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        value.into_iter().map(|point| point.coord()).collect()
    }
}

impl HashCode for MultiPoint {
    fn hash_code(&self) -> u32 {
        hash_sequence(WKBType::MultiPoint, &self.coords)
    }
}
