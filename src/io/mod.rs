//! Binary encodings of geometries, plus interoperability with the `geo` crate.

pub mod geo;
pub mod wkb;
