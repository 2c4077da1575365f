use crate::geometry::hash::{combine, HashCode, HASH_SEED};
use crate::geometry::macros::impl_geometry_base;
use crate::geometry::{Coord, WKBType, COORD_SIZE};

/// A single position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    coord: Coord,
    srid: u32,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_coord(Coord::new(x, y))
    }

    pub fn from_coord(coord: Coord) -> Self {
        Self { coord, srid: 0 }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    pub(crate) fn body_length(&self) -> usize {
        COORD_SIZE
    }
}

impl_geometry_base!(Point, WKBType::Point);

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::from_coord(value)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl HashCode for Point {
    fn hash_code(&self) -> u32 {
        combine(
            combine(HASH_SEED, WKBType::Point.into()),
            self.coord.hash_code(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_length() {
        let point = Point::new(1.5, -2.25);
        assert_eq!(point.byte_length(), 21);
        assert_eq!(point.with_srid(4326).byte_length(), 25);
    }

    #[test]
    fn srid_does_not_affect_equality() {
        let a = Point::new(1.0, 2.0);
        let mut b = a;
        b.set_srid(3857);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(b.srid(), 3857);
        assert_eq!(b.identifier(), WKBType::Point);
    }
}
