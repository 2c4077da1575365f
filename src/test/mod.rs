pub(crate) mod multilinestring;
pub(crate) mod polygon;

use crate::geometry::Coord;

pub(crate) fn coords(xy: &[(f64, f64)]) -> Vec<Coord> {
    xy.iter().copied().map(Coord::from).collect()
}
