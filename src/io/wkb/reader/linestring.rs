use crate::error::WKBResult;
use crate::geometry::LineString;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBReader;

/// Read the body of a WKB LineString: numPoints, then flat XY pairs
pub(crate) fn read_line_string_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<LineString> {
    reader.read_coords(endianness).map(LineString::new)
}
