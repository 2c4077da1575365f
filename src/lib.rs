//! Owned geometry values with byte-exact [WKB](https://portal.ogc.org/files/?artifact_id=25355)
//! and PostGIS EWKB encoding.
//!
//! Geometries are built bottom-up from [`Coord`]s and are immutable apart from their SRID.
//! [`Geometry::byte_length`] tells how many bytes [`encode`] will write, so callers can size
//! their buffers before encoding.
//!
//! ```
//! use postgis_ewkb::{decode, encode, Geometry, Point};
//!
//! let geom: Geometry = Point::new(1.5, -2.25).with_srid(4326).into();
//! let mut buf = vec![0; geom.byte_length()];
//! let written = encode(&geom, &mut buf, 0).unwrap();
//! assert_eq!(written, 25);
//!
//! let (decoded, consumed) = decode(&buf, 0).unwrap();
//! assert_eq!(decoded, geom);
//! assert_eq!(decoded.srid(), 4326);
//! assert_eq!(consumed, written);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;

pub use error::{WKBError, WKBResult};
pub use geometry::{
    Coord, Geometry, GeometryCollection, HashCode, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, WKBType,
};
pub use io::wkb::{decode, encode, from_ewkb, to_ewkb, Endianness, WKBWriteOptions};
