use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::{MultiLineString, WKBType};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::writer::linestring::write_line_string;
use crate::io::wkb::writer::{top_level_srid, write_count, write_header};

/// Write a MultiLineString geometry to a Writer encoded as EWKB
pub fn write_multi_line_string_as_wkb<W: Write>(
    mut writer: W,
    geom: &MultiLineString,
    options: &WKBWriteOptions,
) -> WKBResult<()> {
    write_multi_line_string(
        &mut writer,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )
}

pub(crate) fn write_multi_line_string<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiLineString,
    srid: Option<u32>,
    endianness: Endianness,
) -> WKBResult<()> {
    write_header(writer, WKBType::MultiLineString, srid, endianness)?;

    // numLineStrings
    write_count(writer, geom.num_line_strings(), endianness)?;

    for line_string in geom.line_strings() {
        write_line_string(writer, line_string, None, endianness)?;
    }

    Ok(())
}
