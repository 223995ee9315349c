//! EBML primitives: variable-length integers and leaf value codecs.
//!
//! EBML frames every element as `ID, size, payload`. Both the ID and the size
//! are variable-length integers whose byte count is self-describing: the
//! number of leading zero bits in the first byte, plus one, is the total
//! width.
//!
//! - 1 byte:  `1xxx xxxx`            (7 data bits)
//! - 2 bytes: `01xx xxxx xxxx xxxx`  (14 data bits)
//! - ... up to 8 bytes for sizes, 4 bytes for IDs.
//!
//! The two fields differ in how the marker bit is treated. Size fields strip
//! it, so the remaining bits are the literal length. Element IDs keep it: the
//! raw encoded bytes *are* the ID, which is why the constants in
//! [`crate::elements`] carry the marker bits baked in (`Segment` is
//! `0x18538067`, not `0x08538067`).
//!
//! All multi-byte values in EBML are big-endian, including float payloads,
//! regardless of host endianness.

use crate::error::{Result, WebmError};

/// Number of bytes a varint occupies, derived from its leading byte.
///
/// Errors if the byte is `0x00`, which has no marker bit and would imply a
/// width beyond 8 bytes.
fn vint_width(first: u8, offset: usize) -> Result<usize> {
    if first == 0 {
        return Err(WebmError::InvalidVint { offset });
    }
    Ok(first.leading_zeros() as usize + 1)
}

/// Read an element ID at `*pos`, advancing the cursor.
///
/// The marker bits are retained, so the returned value matches the catalog
/// constants in [`crate::elements`] byte for byte.
pub fn read_id(buf: &[u8], pos: &mut usize) -> Result<u32> {
    let start = *pos;
    let first = *buf
        .get(start)
        .ok_or(WebmError::TruncatedHeader { offset: start })?;
    let width = vint_width(first, start)?;
    if width > 4 {
        return Err(WebmError::InvalidElementId { offset: start });
    }
    if start + width > buf.len() {
        return Err(WebmError::TruncatedHeader { offset: start });
    }

    let mut id = 0u32;
    for &b in &buf[start..start + width] {
        id = (id << 8) | u32::from(b);
    }
    *pos = start + width;
    Ok(id)
}

/// Read an element size at `*pos`, advancing the cursor.
///
/// The marker bit is stripped from the value.
pub fn read_size(buf: &[u8], pos: &mut usize) -> Result<u64> {
    let start = *pos;
    let first = *buf
        .get(start)
        .ok_or(WebmError::TruncatedHeader { offset: start })?;
    let width = vint_width(first, start)?;
    if start + width > buf.len() {
        return Err(WebmError::TruncatedHeader { offset: start });
    }

    let mut value = u64::from(first) & (0xFF >> width);
    for &b in &buf[start + 1..start + width] {
        value = (value << 8) | u64::from(b);
    }
    *pos = start + width;
    Ok(value)
}

/// Encoded byte width of an element ID (marker bits already embedded).
pub fn id_len(id: u32) -> usize {
    match id {
        0..=0xFF => 1,
        0x100..=0xFFFF => 2,
        0x1_0000..=0xFF_FFFF => 3,
        _ => 4,
    }
}

/// Minimal varint byte width for a size value: smallest `n` in 1..=8 such
/// that the value fits under the n-byte marker.
pub fn size_len(value: u64) -> usize {
    let mut width = 1;
    let mut flag = 0x80u64;
    while value >= flag && width < 8 {
        flag <<= 7;
        width += 1;
    }
    width
}

/// Append an element ID in its self-describing encoding.
pub fn write_id(out: &mut Vec<u8>, id: u32) {
    let width = id_len(id);
    for i in (0..width).rev() {
        out.push((id >> (8 * i)) as u8);
    }
}

/// Append a size varint: marker bit plus value, big-endian, minimal width.
pub fn write_size(out: &mut Vec<u8>, value: u64) {
    let width = size_len(value);
    let marked = (1u64 << (7 * width)) | value;
    for i in (0..width).rev() {
        out.push((marked >> (8 * i)) as u8);
    }
}

// ============================================================================
// Leaf codecs
// ============================================================================

/// Decode an unsigned-integer payload: big-endian, 0 to 8 bytes.
///
/// The empty payload decodes to 0, which is the format's zero-width encoding
/// of zero. Payloads longer than 8 bytes fold with wraparound; the catalog
/// never yields them for the elements this crate interprets.
pub fn decode_uint(payload: &[u8]) -> u64 {
    payload
        .iter()
        .fold(0u64, |acc, &b| acc.wrapping_mul(256).wrapping_add(u64::from(b)))
}

/// Encode an unsigned integer at its minimal big-endian width.
///
/// Zero encodes as the empty payload.
pub fn encode_uint(value: u64) -> Vec<u8> {
    let width = 8 - value.leading_zeros() as usize / 8;
    let mut out = Vec::with_capacity(width);
    for i in (0..width).rev() {
        out.push((value >> (8 * i)) as u8);
    }
    out
}

/// Decode a float payload: 4 bytes as f32 (widened), 8 bytes as f64.
///
/// Any other width is unreadable and yields `None`.
pub fn decode_float(payload: &[u8]) -> Option<f64> {
    match payload.len() {
        4 => Some(f64::from(f32::from_be_bytes(payload.try_into().ok()?))),
        8 => Some(f64::from_be_bytes(payload.try_into().ok()?)),
        _ => None,
    }
}

/// Encode a 32-bit float payload, big-endian.
pub fn encode_float32(value: f32) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Encode a 64-bit float payload, big-endian.
pub fn encode_float64(value: f64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_id_keeps_marker() {
        let buf = [0x1A, 0x45, 0xDF, 0xA3];
        let mut pos = 0;
        assert_eq!(read_id(&buf, &mut pos).unwrap(), 0x1A45DFA3);
        assert_eq!(pos, 4);

        let buf = [0x42, 0x86];
        let mut pos = 0;
        assert_eq!(read_id(&buf, &mut pos).unwrap(), 0x4286);

        let buf = [0xEC];
        let mut pos = 0;
        assert_eq!(read_id(&buf, &mut pos).unwrap(), 0xEC);
    }

    #[test]
    fn test_read_size_strips_marker() {
        let buf = [0x81];
        let mut pos = 0;
        assert_eq!(read_size(&buf, &mut pos).unwrap(), 1);

        // 2-byte size: 0x4000 | 300
        let buf = [0x41, 0x2C];
        let mut pos = 0;
        assert_eq!(read_size(&buf, &mut pos).unwrap(), 300);

        // 8-byte size
        let buf = [0x01, 0, 0, 0, 0, 0, 0x12, 0x34];
        let mut pos = 0;
        assert_eq!(read_size(&buf, &mut pos).unwrap(), 0x1234);
    }

    #[test]
    fn test_size_width_boundary_at_127() {
        assert_eq!(size_len(126), 1);
        assert_eq!(size_len(127), 1);
        assert_eq!(size_len(128), 2);
        assert_eq!(size_len(16383), 2);
        assert_eq!(size_len(16384), 3);
    }

    #[test]
    fn test_write_size_boundary_bytes() {
        let mut out = Vec::new();
        write_size(&mut out, 127);
        assert_eq!(out, [0xFF]);

        let mut out = Vec::new();
        write_size(&mut out, 128);
        assert_eq!(out, [0x40, 0x80]);
    }

    #[test]
    fn test_size_roundtrip_large() {
        for value in [0u64, 1, 127, 128, 16383, 16384, 1 << 35, (1 << 56) - 2] {
            let mut out = Vec::new();
            write_size(&mut out, value);
            let mut pos = 0;
            assert_eq!(read_size(&out, &mut pos).unwrap(), value);
            assert_eq!(pos, out.len());
        }
    }

    #[test]
    fn test_id_roundtrip() {
        for id in [0x80u32, 0xEC, 0xA3, 0x4286, 0x2AD7B1, 0x18538067, 0x1A45DFA3] {
            let mut out = Vec::new();
            write_id(&mut out, id);
            assert_eq!(out.len(), id_len(id));
            let mut pos = 0;
            assert_eq!(read_id(&out, &mut pos).unwrap(), id);
        }
    }

    #[test]
    fn test_zero_leading_byte_is_invalid() {
        let buf = [0x00, 0x01];
        let mut pos = 0;
        assert!(matches!(
            read_size(&buf, &mut pos),
            Err(WebmError::InvalidVint { offset: 0 })
        ));
    }

    #[test]
    fn test_truncated_header() {
        // 2-byte varint with only one byte present
        let buf = [0x41];
        let mut pos = 0;
        assert!(matches!(
            read_size(&buf, &mut pos),
            Err(WebmError::TruncatedHeader { offset: 0 })
        ));

        let buf: [u8; 0] = [];
        let mut pos = 0;
        assert!(read_id(&buf, &mut pos).is_err());
    }

    #[test]
    fn test_five_byte_id_rejected() {
        let buf = [0x08, 0, 0, 0, 0];
        let mut pos = 0;
        assert!(matches!(
            read_id(&buf, &mut pos),
            Err(WebmError::InvalidElementId { offset: 0 })
        ));
    }

    #[test]
    fn test_uint_codec() {
        assert_eq!(decode_uint(&[]), 0);
        assert_eq!(decode_uint(&[0x01]), 1);
        assert_eq!(decode_uint(&[0x0F, 0x42, 0x40]), 1_000_000);
        assert_eq!(decode_uint(&[0x00, 0x00, 0x01]), 1);

        assert_eq!(encode_uint(0), Vec::<u8>::new());
        assert_eq!(encode_uint(1), [0x01]);
        assert_eq!(encode_uint(255), [0xFF]);
        assert_eq!(encode_uint(256), [0x01, 0x00]);
        assert_eq!(encode_uint(1_000_000), [0x0F, 0x42, 0x40]);
        assert_eq!(encode_uint(u64::MAX).len(), 8);
    }

    #[test]
    fn test_uint_preserves_width_only_on_reencode_of_value() {
        // A 3-byte encoding of 1 decodes fine; re-encoding the value
        // normalizes to minimal width. Width preservation for untouched
        // nodes happens at the tree layer, which never re-encodes them.
        let wide = [0x00, 0x00, 0x01];
        assert_eq!(encode_uint(decode_uint(&wide)), [0x01]);
    }

    #[test]
    fn test_float_codec() {
        assert_eq!(decode_float(&encode_float64(2500.0)), Some(2500.0));
        assert_eq!(decode_float(&encode_float32(1.5)), Some(1.5));
        assert_eq!(decode_float(&[]), None);
        assert_eq!(decode_float(&[0x00; 3]), None);
        assert_eq!(decode_float(&[0x00; 7]), None);
    }

    #[test]
    fn test_float_is_big_endian() {
        // 1.0f64 = 0x3FF0000000000000 stored MSB first
        assert_eq!(
            encode_float64(1.0),
            [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(encode_float32(1.0), [0x3F, 0x80, 0x00, 0x00]);
    }
}
