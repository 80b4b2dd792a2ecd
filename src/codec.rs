//! Binary/ASCII wire encoding (spec.md §4.3, §9).
//!
//! `Encoding` is implemented by two zero-sized marker types selected at the
//! call site from the session's [`CommType`](crate::types::CommType) — the
//! same one-trait-many-implementors shape the corpus uses for `FromBytes`,
//! so every operation in `ops.rs` is written once against the trait instead
//! of branching on comm type at every call.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::FrameError;

pub(crate) trait Encoding {
    fn put_u8(buf: &mut BytesMut, v: u8);
    fn put_u16(buf: &mut BytesMut, v: u16);
    fn put_u32(buf: &mut BytesMut, v: u32);
    fn put_i16(buf: &mut BytesMut, v: i16);
    fn put_i32(buf: &mut BytesMut, v: i32);

    /// Device reference: binary orders `number` before `code`, ASCII orders
    /// `code` before `number` — spec.md §4.4's "wire quirk, not a bug".
    fn put_device_ref(buf: &mut BytesMut, extended: bool, binary_code: u8, ascii_code: &str, number: u32);

    /// Packed bit array for batch bit read/write bodies (spec.md §4.3).
    fn put_bits(buf: &mut BytesMut, bits: &[bool]);

    fn get_u8(buf: &mut Bytes) -> Result<u8, FrameError>;
    fn get_u16(buf: &mut Bytes) -> Result<u16, FrameError>;
    fn get_i16(buf: &mut Bytes) -> Result<i16, FrameError>;
    fn get_i32(buf: &mut Bytes) -> Result<i32, FrameError>;
    fn get_bits(buf: &mut Bytes, count: usize) -> Result<Vec<bool>, FrameError>;

    /// Bytes (binary) or characters (ASCII) used to encode one 16-bit word.
    fn word_unit_size() -> usize;
}

fn need(buf: &Bytes, what: &'static str, bytes: usize) -> Result<(), FrameError> {
    if buf.remaining() < bytes {
        Err(FrameError::Truncated {
            what,
            needed: bytes - buf.remaining(),
        })
    } else {
        Ok(())
    }
}

/// Binary framing: fixed-width little-endian integers (spec.md §3, §4.3).
pub(crate) struct BinaryEncoding;

impl Encoding for BinaryEncoding {
    fn put_u8(buf: &mut BytesMut, v: u8) {
        buf.put_u8(v);
    }

    fn put_u16(buf: &mut BytesMut, v: u16) {
        buf.put_u16_le(v);
    }

    /// A dword is the low word then the high word on the wire (spec.md §9);
    /// writing a plain little-endian `u32` already produces that byte order
    /// for free, since its first two bytes are exactly the low 16 bits.
    fn put_u32(buf: &mut BytesMut, v: u32) {
        buf.put_u32_le(v);
    }

    fn put_i16(buf: &mut BytesMut, v: i16) {
        buf.put_i16_le(v);
    }

    fn put_i32(buf: &mut BytesMut, v: i32) {
        buf.put_i32_le(v);
    }

    fn put_device_ref(buf: &mut BytesMut, extended: bool, binary_code: u8, _ascii_code: &str, number: u32) {
        let width = if extended { 4 } else { 3 };
        buf.put_slice(&number.to_le_bytes()[..width]);
        buf.put_u8(binary_code);
        if extended {
            buf.put_u8(0x00);
        }
    }

    fn put_bits(buf: &mut BytesMut, bits: &[bool]) {
        for pair in bits.chunks(2) {
            let hi = pair[0] as u8;
            let lo = pair.get(1).copied().unwrap_or(false) as u8;
            buf.put_u8((hi << 4) | lo);
        }
    }

    fn get_u8(buf: &mut Bytes) -> Result<u8, FrameError> {
        need(buf, "u8", 1)?;
        Ok(buf.get_u8())
    }

    fn get_u16(buf: &mut Bytes) -> Result<u16, FrameError> {
        need(buf, "u16", 2)?;
        Ok(buf.get_u16_le())
    }

    fn get_i16(buf: &mut Bytes) -> Result<i16, FrameError> {
        need(buf, "i16", 2)?;
        Ok(buf.get_i16_le())
    }

    fn get_i32(buf: &mut Bytes) -> Result<i32, FrameError> {
        need(buf, "i32", 4)?;
        Ok(buf.get_i32_le())
    }

    fn get_bits(buf: &mut Bytes, count: usize) -> Result<Vec<bool>, FrameError> {
        let packed_len = (count + 1) / 2;
        need(buf, "packed bits", packed_len)?;
        let mut bits = Vec::with_capacity(count);
        for _ in 0..packed_len {
            let byte = buf.get_u8();
            bits.push(byte & 0xF0 != 0);
            bits.push(byte & 0x0F != 0);
        }
        bits.truncate(count);
        Ok(bits)
    }

    fn word_unit_size() -> usize {
        2
    }
}

/// ASCII framing: uppercase zero-padded hex digits, doubling every field
/// width relative to binary (spec.md §3, §4.3).
pub(crate) struct AsciiEncoding;

fn put_hex(buf: &mut BytesMut, value: u32, digits: usize) {
    buf.put_slice(format!("{value:0width$X}", width = digits).as_bytes());
}

fn get_hex_digits(buf: &mut Bytes, what: &'static str, digits: usize) -> Result<u32, FrameError> {
    need(buf, what, digits)?;
    let raw = buf.copy_to_bytes(digits);
    let text = std::str::from_utf8(&raw).map_err(|_| FrameError::NotUtf8)?;
    u32::from_str_radix(text, 16).map_err(|_| FrameError::InvalidHex {
        what,
        text: text.to_string(),
    })
}

impl Encoding for AsciiEncoding {
    fn put_u8(buf: &mut BytesMut, v: u8) {
        put_hex(buf, v as u32, 2);
    }

    fn put_u16(buf: &mut BytesMut, v: u16) {
        put_hex(buf, v as u32, 4);
    }

    /// A dword is the low word then the high word on the wire (spec.md §9).
    /// Unlike binary, the two 4-char hex groups are NOT the same as one
    /// 8-digit hex expansion of the value: that would print the high word
    /// first, which is the wrong wire order.
    fn put_u32(buf: &mut BytesMut, v: u32) {
        put_hex(buf, v & 0xFFFF, 4);
        put_hex(buf, v >> 16, 4);
    }

    fn put_i16(buf: &mut BytesMut, v: i16) {
        put_hex(buf, v as u16 as u32, 4);
    }

    fn put_i32(buf: &mut BytesMut, v: i32) {
        AsciiEncoding::put_u32(buf, v as u32);
    }

    fn put_device_ref(buf: &mut BytesMut, extended: bool, _binary_code: u8, ascii_code: &str, number: u32) {
        buf.put_slice(ascii_code.as_bytes());
        let digits = if extended { 8 } else { 6 };
        put_hex(buf, number, digits);
    }

    fn put_bits(buf: &mut BytesMut, bits: &[bool]) {
        for &bit in bits {
            buf.put_u8(if bit { b'1' } else { b'0' });
        }
    }

    fn get_u8(buf: &mut Bytes) -> Result<u8, FrameError> {
        get_hex_digits(buf, "u8", 2).map(|v| v as u8)
    }

    fn get_u16(buf: &mut Bytes) -> Result<u16, FrameError> {
        get_hex_digits(buf, "u16", 4).map(|v| v as u16)
    }

    fn get_i16(buf: &mut Bytes) -> Result<i16, FrameError> {
        get_hex_digits(buf, "i16", 4).map(|v| v as u16 as i16)
    }

    fn get_i32(buf: &mut Bytes) -> Result<i32, FrameError> {
        let low = get_hex_digits(buf, "i32", 4)?;
        let high = get_hex_digits(buf, "i32", 4)?;
        Ok(((high << 16) | low) as i32)
    }

    fn get_bits(buf: &mut Bytes, count: usize) -> Result<Vec<bool>, FrameError> {
        need(buf, "ascii bits", count)?;
        let raw = buf.copy_to_bytes(count);
        Ok(raw.iter().map(|&b| b == b'1').collect())
    }

    fn word_unit_size() -> usize {
        4
    }
}
