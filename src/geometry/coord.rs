use crate::geometry::hash::{combine, f64_hash, HashCode, HASH_SEED};

/// An XY coordinate.
///
/// Equality is exact field-wise comparison of the two f64 values. NaN and infinite values
/// are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    x: f64,
    y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl HashCode for Coord {
    fn hash_code(&self) -> u32 {
        combine(combine(HASH_SEED, f64_hash(self.x)), f64_hash(self.y))
    }
}

impl std::hash::Hash for Coord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
