use crate::error::WKBResult;
use crate::geometry::hash::{hash_sequence, HashCode};
use crate::geometry::macros::{impl_from_sequence, impl_geometry_base};
use crate::geometry::{get_checked, Coord, WKBType, COORD_SIZE, COUNT_SIZE};

/// An ordered sequence of coordinates.
///
/// Any number of coordinates is accepted, including zero or one.
#[derive(Debug, Clone, Default)]
pub struct LineString {
    coords: Vec<Coord>,
    srid: u32,
}

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords, srid: 0 }
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Access the coordinate at index `i`.
    pub fn coord(&self, i: usize) -> WKBResult<&Coord> {
        get_checked(&self.coords, i)
    }

    pub(crate) fn body_length(&self) -> usize {
        COUNT_SIZE + self.coords.len() * COORD_SIZE
    }
}

impl_geometry_base!(LineString, WKBType::LineString);
impl_from_sequence!(LineString, coords, Coord);

impl HashCode for LineString {
    fn hash_code(&self) -> u32 {
        hash_sequence(WKBType::LineString, &self.coords)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WKBError;
    use crate::test::linestring::{ls0, ls1};

    #[test]
    fn byte_length() {
        assert_eq!(ls0().byte_length(), 5 + 4 + 2 * 16);
        assert_eq!(LineString::default().byte_length(), 9);
    }

    #[test]
    fn reversed_is_not_equal() {
        let ls = ls1();
        let reversed: LineString = ls.coords().iter().rev().copied().collect();
        assert_ne!(ls, reversed);
        assert_ne!(ls.hash_code(), reversed.hash_code());
    }

    #[test]
    fn constructed_copies_input() {
        let mut input = vec![Coord::new(0., 1.), Coord::new(1., 2.)];
        let ls = LineString::from(input.as_slice());
        input[0] = Coord::new(9., 9.);
        assert_eq!(ls, ls0());
    }

    #[test]
    fn out_of_range() {
        let ls = ls0();
        assert_eq!(*ls.coord(1).unwrap(), Coord::new(1., 2.));
        assert!(matches!(
            ls.coord(2),
            Err(WKBError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }
}
