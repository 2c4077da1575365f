use crate::error::WKBResult;
use crate::geometry::hash::{hash_sequence, HashCode};
use crate::geometry::macros::{impl_from_sequence, impl_geometry_base};
use crate::geometry::{get_checked, Polygon, WKBType, COUNT_SIZE};

/// An ordered sequence of polygons.
#[derive(Debug, Clone, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    srid: u32,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons, srid: 0 }
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Access polygon `i`.
    pub fn polygon(&self, i: usize) -> WKBResult<&Polygon> {
        get_checked(&self.polygons, i)
    }

    pub(crate) fn body_length(&self) -> usize {
        self.polygons
            .iter()
            .fold(COUNT_SIZE, |sum, polygon| sum + polygon.nested_length())
    }
}

impl_geometry_base!(MultiPolygon, WKBType::MultiPolygon);
impl_from_sequence!(MultiPolygon, polygons, Polygon);

impl HashCode for MultiPolygon {
    fn hash_code(&self) -> u32 {
        hash_sequence(WKBType::MultiPolygon, &self.polygons)
    }
}
