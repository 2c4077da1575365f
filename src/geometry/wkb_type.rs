use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Size of the byte order marker plus the type word that start every WKB node.
pub const HEADER_SIZE: usize = 1 + 4;

/// Size of the optional EWKB SRID field following the type word.
pub const SRID_SIZE: usize = 4;

/// Size of a `u32` element count.
pub const COUNT_SIZE: usize = 4;

/// Size of one XY coordinate: two f64s.
pub const COORD_SIZE: usize = 2 * 8;

/// Size of a standalone, SRID-less WKB Point.
pub const POINT_SIZE: usize = HEADER_SIZE + COORD_SIZE;

/// The header size of a top-level geometry with the given SRID.
///
/// An SRID of 0 means "unspecified" and is not written.
pub fn header_size(srid: u32) -> usize {
    if srid == 0 {
        HEADER_SIZE
    } else {
        HEADER_SIZE + SRID_SIZE
    }
}

/// The base WKB type tags.
///
/// The discriminants are the values written to the wire, before any EWKB flag bits are OR'd
/// in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    pub fn name(&self) -> &'static str {
        use WKBType::*;
        match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
        }
    }
}
