//! Reading and writing WKB and PostGIS EWKB.
//!
//! Only XY geometries are supported. The outermost geometry may carry an SRID, which is written
//! after the type word with the `0x20000000` flag set; nested members never do.

mod api;
pub mod common;
mod options;
pub(crate) mod reader;
pub mod writer;

pub use api::{
    decode, encode, encode_with_options, from_ewkb, from_hex_ewkb, to_ewkb,
    to_ewkb_with_options, to_hex_ewkb,
};
pub use common::{Endianness, WKBType};
pub use options::WKBWriteOptions;
pub use reader::MAX_NESTING_DEPTH;
