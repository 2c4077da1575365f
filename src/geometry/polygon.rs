use crate::error::WKBResult;
use crate::geometry::hash::{combine, HashCode, HASH_SEED};
use crate::geometry::macros::impl_geometry_base;
use crate::geometry::{get_checked, Coord, WKBType, COORD_SIZE, COUNT_SIZE};

/// A polygon made of rings. The first ring, if any, is the exterior and the rest are holes.
///
/// Ring closure and orientation are not checked.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    rings: Vec<Vec<Coord>>,
    srid: u32,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Coord>>) -> Self {
        Self { rings, srid: 0 }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(
        &self,
    ) -> impl DoubleEndedIterator<Item = &[Coord]> + ExactSizeIterator + '_ {
        self.rings.iter().map(Vec::as_slice)
    }

    /// Access the ring at index `i`.
    pub fn ring(&self, i: usize) -> WKBResult<&[Coord]> {
        get_checked(&self.rings, i).map(Vec::as_slice)
    }

    /// Access coordinate `coord_idx` of ring `ring_idx`.
    pub fn coord(&self, ring_idx: usize, coord_idx: usize) -> WKBResult<&Coord> {
        get_checked(self.ring(ring_idx)?, coord_idx)
    }

    pub fn exterior(&self) -> Option<&[Coord]> {
        self.rings.first().map(Vec::as_slice)
    }

    pub fn interiors(&self) -> impl Iterator<Item = &[Coord]> + '_ {
        self.rings.iter().skip(1).map(Vec::as_slice)
    }

    pub(crate) fn body_length(&self) -> usize {
        self.rings.iter().fold(COUNT_SIZE, |sum, ring| {
            sum + COUNT_SIZE + ring.len() * COORD_SIZE
        })
    }
}

impl_geometry_base!(Polygon, WKBType::Polygon);

impl From<Vec<Vec<Coord>>> for Polygon {
    fn from(value: Vec<Vec<Coord>>) -> Self {
        Self::new(value)
    }
}

impl From<&[Vec<Coord>]> for Polygon {
    fn from(value: &[Vec<Coord>]) -> Self {
        Self::new(value.to_vec())
    }
}

impl<R: IntoIterator<Item = Coord>> FromIterator<R> for Polygon {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|ring| ring.into_iter().collect())
                .collect(),
        )
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.rings == other.rings
    }
}

impl HashCode for Polygon {
    fn hash_code(&self) -> u32 {
        self.rings
            .iter()
            .fold(combine(HASH_SEED, WKBType::Polygon.into()), |acc, ring| {
                let ring_hash = ring
                    .iter()
                    .fold(HASH_SEED, |acc, coord| combine(acc, coord.hash_code()));
                combine(acc, ring_hash)
            })
    }
}
