//! Convert between this crate's geometries and [`geo`] geometries.
//!
//! geo has no notion of an SRID, so it is dropped when converting to geo and is 0 after
//! converting from geo.

mod from_geo;
mod to_geo;

pub use from_geo::{coord_from_geo, geometry_from_geo};
pub use to_geo::{coord_to_geo, geometry_to_geo};
