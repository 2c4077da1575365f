use crate::error::WKBResult;
use crate::geometry::hash::{hash_sequence, HashCode};
use crate::geometry::macros::{impl_from_sequence, impl_geometry_base};
use crate::geometry::{get_checked, Geometry, WKBType, COUNT_SIZE};

/// An ordered, heterogeneous sequence of geometries, possibly including other collections.
#[derive(Debug, Clone, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    srid: u32,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            srid: 0,
        }
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Access member `i`.
    pub fn geometry(&self, i: usize) -> WKBResult<&Geometry> {
        get_checked(&self.geometries, i)
    }

    pub(crate) fn body_length(&self) -> usize {
        self.geometries
            .iter()
            .fold(COUNT_SIZE, |sum, geom| sum + geom.nested_length())
    }
}

impl_geometry_base!(GeometryCollection, WKBType::GeometryCollection);
impl_from_sequence!(GeometryCollection, geometries, Geometry);

impl HashCode for GeometryCollection {
    fn hash_code(&self) -> u32 {
        hash_sequence(WKBType::GeometryCollection, &self.geometries)
    }
}
