//! Owned, immutable geometry values.
//!
//! Each of the seven WKB geometry kinds is its own struct, and [`Geometry`] is the closed sum
//! over them. Every value knows its WKB type tag, its encoded byte length and a reproducible
//! structural hash.

mod coord;
mod geometrycollection;
mod hash;
mod linestring;
mod macros;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod wkb_type;

pub use coord::Coord;
pub use geometrycollection::GeometryCollection;
pub use hash::{combine, f64_hash, HashCode, HASH_SEED};
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use wkb_type::{
    header_size, WKBType, COORD_SIZE, COUNT_SIZE, HEADER_SIZE, POINT_SIZE, SRID_SIZE,
};

use crate::error::{WKBError, WKBResult};

pub(crate) fn get_checked<T>(items: &[T], index: usize) -> WKBResult<&T> {
    items.get(index).ok_or(WKBError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

/// Any of the seven geometry kinds.
///
/// Values of different kinds never compare equal, even when they hold the same coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
    ($self:expr, $geom:ident => $body:expr) => {
        match $self {
            Geometry::Point($geom) => $body,
            Geometry::LineString($geom) => $body,
            Geometry::Polygon($geom) => $body,
            Geometry::MultiPoint($geom) => $body,
            Geometry::MultiLineString($geom) => $body,
            Geometry::MultiPolygon($geom) => $body,
            Geometry::GeometryCollection($geom) => $body,
        }
    };
}

impl Geometry {
    /// The WKB type tag of this geometry.
    pub fn identifier(&self) -> WKBType {
        dispatch!(self, g => g.identifier())
    }

    /// The spatial reference id. 0 means unspecified.
    pub fn srid(&self) -> u32 {
        dispatch!(self, g => g.srid())
    }

    pub fn set_srid(&mut self, srid: u32) {
        dispatch!(self, g => g.set_srid(srid))
    }

    pub fn with_srid(mut self, srid: u32) -> Self {
        self.set_srid(srid);
        self
    }

    /// The number of bytes [`encode`](crate::io::wkb::encode) writes for this geometry,
    /// including its header, the SRID field if the SRID is non-zero, and every nested member.
    pub fn byte_length(&self) -> usize {
        dispatch!(self, g => g.byte_length())
    }

    pub(crate) fn nested_length(&self) -> usize {
        dispatch!(self, g => g.nested_length())
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Geometry::MultiLineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self {
            Geometry::GeometryCollection(g) => Some(g),
            _ => None,
        }
    }
}

impl HashCode for Geometry {
    fn hash_code(&self) -> u32 {
        dispatch!(self, g => g.hash_code())
    }
}

impl std::hash::Hash for Geometry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
