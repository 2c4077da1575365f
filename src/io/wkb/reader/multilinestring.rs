use crate::error::WKBResult;
use crate::geometry::{MultiLineString, WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::linestring::read_line_string_body;
use crate::io::wkb::reader::{read_member_header, WKBReader};

/// Read the body of a WKB MultiLineString: numLineStrings, then complete LineString nodes
pub(crate) fn read_multi_line_string_body(
    reader: &mut WKBReader,
    endianness: Endianness,
) -> WKBResult<MultiLineString> {
    let num_line_strings = reader.read_count(endianness, HEADER_SIZE + COUNT_SIZE)?;
    let mut line_strings = Vec::with_capacity(num_line_strings);
    for _ in 0..num_line_strings {
        let header = read_member_header(reader, WKBType::MultiLineString, WKBType::LineString)?;
        let line_string = read_line_string_body(reader, header.endianness)?;
        line_strings.push(line_string.with_srid(header.srid));
    }
    Ok(MultiLineString::new(line_strings))
}
