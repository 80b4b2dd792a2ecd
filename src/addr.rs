//! Device address parsing (spec.md §4.2).
//!
//! A device reference like `D100`, `X1A`, or `ZR0x1F4` is a mnemonic
//! followed by a number in the mnemonic's declared base, with an optional
//! `0x`/`0X` prefix overriding that base for one address. Parsing splits
//! the leading alphabetic run off first, the same two-pass shape the
//! corpus uses for text fields that mix a fixed tag with a variable tail.

use crate::device::{self, Base};
use crate::error::DeviceError;
use crate::types::PlcFamily;

/// Split `s` into its leading mnemonic and the address text that follows.
///
/// Matched against the known mnemonic table rather than split at the first
/// non-alphabetic character: hex-addressed devices can carry `A`-`F` right
/// after the mnemonic (`"XFF"`, `"BA"`), which a character-class split would
/// swallow into the mnemonic itself.
fn split_mnemonic(s: &str) -> Result<(&str, &str), DeviceError> {
    let upper = s.to_ascii_uppercase();
    let split_at = device::mnemonics_longest_first()
        .find(|m| upper.starts_with(m))
        .map(|m| m.len());
    match split_at {
        Some(split_at) if split_at > 0 => Ok((&s[..split_at], &s[split_at..])),
        _ => Err(DeviceError::UnparsableAddress(s.to_string())),
    }
}

fn parse_number(text: &str, base: Base) -> Result<u32, DeviceError> {
    let err = || DeviceError::UnparsableAddress(text.to_string());
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).map_err(|_| err());
    }
    let radix = match base {
        Base::Decimal => 10,
        Base::Hex => 16,
    };
    u32::from_str_radix(text, radix).map_err(|_| err())
}

/// Parse a device reference such as `"D100"` into its mnemonic and numeric
/// address, honoring the mnemonic's declared base unless an explicit `0x`
/// prefix overrides it.
pub(crate) fn parse_device(family: PlcFamily, s: &str) -> Result<(String, u32), DeviceError> {
    let (mnemonic, number_text) = split_mnemonic(s)?;
    let mnemonic = mnemonic.to_ascii_uppercase();
    if number_text.is_empty() {
        return Err(DeviceError::UnparsableAddress(s.to_string()));
    }
    let (_, base) = device::binary_code(family, &mnemonic)?;
    let number = parse_number(number_text, base)?;
    Ok((mnemonic, number))
}
