use log::debug;

use crate::error::{WKBError, WKBResult};
use crate::geometry::Geometry;
use crate::io::wkb::options::WKBWriteOptions;
use crate::io::wkb::reader::{read_geometry, WKBReader};
use crate::io::wkb::writer::{top_level_srid, write_geometry};

/// Encode a geometry as little-endian EWKB into `buf`, starting at `offset`.
///
/// Returns the number of bytes written, which always equals [`Geometry::byte_length`]. The
/// buffer is never grown: if fewer than `byte_length()` bytes are available after `offset`,
/// nothing is written and [`WKBError::BufferTooSmall`] is returned.
pub fn encode(geom: &Geometry, buf: &mut [u8], offset: usize) -> WKBResult<usize> {
    encode_with_options(geom, buf, offset, &Default::default())
}

/// Encode a geometry as EWKB into `buf`, starting at `offset`, with the given options.
pub fn encode_with_options(
    geom: &Geometry,
    buf: &mut [u8],
    offset: usize,
    options: &WKBWriteOptions,
) -> WKBResult<usize> {
    let required = geom.byte_length();
    let available = buf.len().saturating_sub(offset);
    if available < required {
        return Err(WKBError::BufferTooSmall {
            offset,
            required,
            available,
        });
    }

    let mut dest = &mut buf[offset..offset + required];
    write_geometry(
        &mut dest,
        geom,
        top_level_srid(geom.srid()),
        options.endianness,
    )?;
    debug_assert!(dest.is_empty(), "byte_length disagrees with the writer");

    debug!(
        "encoded {} (srid {}) into {required} bytes at offset {offset}",
        geom.identifier().name(),
        geom.srid()
    );
    Ok(required)
}

/// Decode one EWKB or WKB geometry from `buf`, starting at `offset`.
///
/// Returns the geometry and the number of bytes it occupied. Bytes after the geometry are
/// left untouched, so several geometries can be read from one buffer back to back.
pub fn decode(buf: &[u8], offset: usize) -> WKBResult<(Geometry, usize)> {
    let mut reader = WKBReader::new(buf, offset);
    let geom = read_geometry(&mut reader, 0)?;
    let consumed = reader.position() - offset;

    debug!(
        "decoded {} (srid {}) from {consumed} bytes at offset {offset}",
        geom.identifier().name(),
        geom.srid()
    );
    Ok((geom, consumed))
}

/// Encode a geometry as little-endian EWKB into a new, exactly sized buffer.
pub fn to_ewkb(geom: &Geometry) -> WKBResult<Vec<u8>> {
    to_ewkb_with_options(geom, &Default::default())
}

/// Encode a geometry as EWKB into a new, exactly sized buffer, with the given options.
pub fn to_ewkb_with_options(geom: &Geometry, options: &WKBWriteOptions) -> WKBResult<Vec<u8>> {
    let mut buf = vec![0; geom.byte_length()];
    encode_with_options(geom, &mut buf, 0, options)?;
    Ok(buf)
}

/// Decode a buffer that holds exactly one EWKB or WKB geometry.
pub fn from_ewkb(buf: &[u8]) -> WKBResult<Geometry> {
    let (geom, consumed) = decode(buf, 0)?;
    if consumed != buf.len() {
        return Err(WKBError::TrailingBytes(buf.len() - consumed));
    }
    Ok(geom)
}

/// Encode a geometry as upper-case hex EWKB, the text form PostGIS prints geometries in.
pub fn to_hex_ewkb(geom: &Geometry) -> WKBResult<String> {
    let buf = to_ewkb(geom)?;
    Ok(buf.iter().map(|b| format!("{b:02X}")).collect())
}

/// Decode hex EWKB, in either case.
pub fn from_hex_ewkb(hex: &str) -> WKBResult<Geometry> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 {
        return Err(WKBError::InvalidHex(format!("odd length {}", hex.len())));
    }
    let buf = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| {
                    WKBError::InvalidHex(String::from_utf8_lossy(pair).into_owned())
                })
        })
        .collect::<WKBResult<Vec<u8>>>()?;
    from_ewkb(&buf)
}
