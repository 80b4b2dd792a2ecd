//! The device table (spec.md §4.1).
//!
//! A static, flat table keyed by mnemonic, each row carrying a bitset of
//! permitted PLC families — the data-driven form spec.md §9 asks for in
//! place of per-family subclassing. The table plays the same role here
//! that `LinkType::from_u16`'s big match plays in the corpus: a fixed,
//! append-only lookup that's easy to audit against the reference manual,
//! one mnemonic per line.

use crate::error::DeviceError;
use crate::types::{AccessKind, PlcFamily};

/// Numeric base used to parse/emit a device's address.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Base {
    Decimal,
    Hex,
}

/// Bitset of [`PlcFamily`] variants a device mnemonic is valid on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct FamilySet(u8);

impl FamilySet {
    const fn bit(family: PlcFamily) -> u8 {
        match family {
            PlcFamily::Q => 1 << 0,
            PlcFamily::L => 1 << 1,
            PlcFamily::QnA => 1 << 2,
            PlcFamily::IqL => 1 << 3,
            PlcFamily::IqR => 1 << 4,
        }
    }

    const fn of(families: &[PlcFamily]) -> FamilySet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < families.len() {
            bits |= Self::bit(families[i]);
            i += 1;
        }
        FamilySet(bits)
    }

    const ALL: FamilySet = FamilySet::of(&[
        PlcFamily::Q,
        PlcFamily::L,
        PlcFamily::QnA,
        PlcFamily::IqL,
        PlcFamily::IqR,
    ]);

    const IQ_R_ONLY: FamilySet = FamilySet::of(&[PlcFamily::IqR]);

    fn contains(self, family: PlcFamily) -> bool {
        self.0 & Self::bit(family) != 0
    }
}

/// One row of the device table.
struct DeviceEntry {
    mnemonic: &'static str,
    binary_code: u8,
    /// Two-character ASCII code, already left-padded with `*`.
    ascii_code: &'static str,
    base: Base,
    access: AccessKind,
    families: FamilySet,
}

/// Set A: available on every PLC family (spec.md §4.1).
macro_rules! set_a {
    ($mnemonic:expr, $binary_code:expr, $ascii_code:expr, $base:expr, $access:expr) => {
        DeviceEntry {
            mnemonic: $mnemonic,
            binary_code: $binary_code,
            ascii_code: $ascii_code,
            base: $base,
            access: $access,
            families: FamilySet::ALL,
        }
    };
}

/// Set B: `iQ-R` only (spec.md §4.1).
macro_rules! set_b {
    ($mnemonic:expr, $binary_code:expr, $ascii_code:expr, $base:expr, $access:expr) => {
        DeviceEntry {
            mnemonic: $mnemonic,
            binary_code: $binary_code,
            ascii_code: $ascii_code,
            base: $base,
            access: $access,
            families: FamilySet::IQ_R_ONLY,
        }
    };
}

use AccessKind::{Bit, DWord, Word};
use Base::{Decimal, Hex};

const TABLE: &[DeviceEntry] = &[
    set_a!("SM", 0x91, "SM", Decimal, Bit),
    set_a!("SD", 0xA9, "SD", Decimal, Word),
    set_a!("X", 0x9C, "X*", Hex, Bit),
    set_a!("Y", 0x9D, "Y*", Hex, Bit),
    set_a!("M", 0x90, "M*", Decimal, Bit),
    set_a!("L", 0x92, "L*", Decimal, Bit),
    set_a!("F", 0x93, "F*", Decimal, Bit),
    set_a!("V", 0x94, "V*", Decimal, Bit),
    set_a!("B", 0xA0, "B*", Hex, Bit),
    set_a!("D", 0xA8, "D*", Decimal, Word),
    set_a!("W", 0xB4, "W*", Hex, Word),
    set_a!("TS", 0xC1, "TS", Decimal, Bit),
    set_a!("TC", 0xC0, "TC", Decimal, Bit),
    set_a!("TN", 0xC2, "TN", Decimal, Word),
    set_a!("SS", 0xC7, "SS", Decimal, Bit),
    set_a!("SC", 0xC6, "SC", Decimal, Bit),
    set_a!("SN", 0xC8, "SN", Decimal, Word),
    set_a!("CS", 0xC4, "CS", Decimal, Bit),
    set_a!("CC", 0xC3, "CC", Decimal, Bit),
    set_a!("CN", 0xC5, "CN", Decimal, Word),
    set_a!("SB", 0xA1, "SB", Hex, Bit),
    set_a!("SW", 0xB5, "SW", Hex, Word),
    set_a!("DX", 0xA2, "DX", Hex, Bit),
    set_a!("DY", 0xA3, "DY", Hex, Bit),
    set_a!("R", 0xAF, "R*", Decimal, Word),
    set_a!("ZR", 0xB0, "ZR", Hex, Word),
    set_b!("LTS", 0x51, "LTS", Decimal, DWord),
    set_b!("LTC", 0x50, "LTC", Decimal, DWord),
    set_b!("LTN", 0x52, "LTN", Decimal, DWord),
    set_b!("LSTS", 0x59, "LSTS", Decimal, DWord),
    set_b!("LSTC", 0x58, "LSTC", Decimal, DWord),
    set_b!("LSTN", 0x5A, "LSTN", Decimal, DWord),
    set_b!("LCS", 0x55, "LCS", Decimal, DWord),
    set_b!("LCC", 0x54, "LCC", Decimal, DWord),
    set_b!("LCN", 0x56, "LCN", Decimal, DWord),
    set_b!("LZ", 0x62, "LZ", Decimal, DWord),
    set_b!("RD", 0x2C, "RD", Decimal, Word),
];

fn lookup(mnemonic: &str) -> Option<&'static DeviceEntry> {
    TABLE.iter().find(|e| e.mnemonic == mnemonic)
}

fn require_entry(mnemonic: &str) -> Result<&'static DeviceEntry, DeviceError> {
    lookup(mnemonic).ok_or_else(|| DeviceError::UnknownMnemonic(mnemonic.to_string()))
}

fn require_family(entry: &'static DeviceEntry, family: PlcFamily) -> Result<(), DeviceError> {
    if entry.families.contains(family) {
        Ok(())
    } else {
        Err(DeviceError::NotAllowedForFamily {
            mnemonic: entry.mnemonic,
            family: family_name(family),
        })
    }
}

fn family_name(family: PlcFamily) -> &'static str {
    match family {
        PlcFamily::Q => "Q",
        PlcFamily::L => "L",
        PlcFamily::QnA => "QnA",
        PlcFamily::IqL => "iQ-L",
        PlcFamily::IqR => "iQ-R",
    }
}

/// `binary_code()` (spec.md §4.1): the wire byte plus numeric base for a
/// `(family, mnemonic)` pair.
pub(crate) fn binary_code(
    family: PlcFamily,
    mnemonic: &str,
) -> Result<(u8, Base), DeviceError> {
    let entry = require_entry(mnemonic)?;
    require_family(entry, family)?;
    Ok((entry.binary_code, entry.base))
}

/// `ascii_code()` (spec.md §4.1): the two-character device code string plus
/// numeric base.
pub(crate) fn ascii_code(
    family: PlcFamily,
    mnemonic: &str,
) -> Result<(&'static str, Base), DeviceError> {
    let entry = require_entry(mnemonic)?;
    require_family(entry, family)?;
    Ok((entry.ascii_code, entry.base))
}

/// `access_kind()` (spec.md §4.1): which request path an operation should
/// take for this mnemonic.
pub(crate) fn access_kind(family: PlcFamily, mnemonic: &str) -> Result<AccessKind, DeviceError> {
    let entry = require_entry(mnemonic)?;
    require_family(entry, family)?;
    Ok(entry.access)
}

/// All known mnemonics, longest first — used by the address parser to find
/// where a mnemonic ends and its numeric literal begins without guessing
/// from character class alone (hex-addressed devices can carry `A`-`F` in
/// the address itself, e.g. `"XFF"`).
pub(crate) fn mnemonics_longest_first() -> impl Iterator<Item = &'static str> {
    let mut names: Vec<&'static str> = TABLE.iter().map(|e| e.mnemonic).collect();
    names.sort_unstable_by_key(|m| std::cmp::Reverse(m.len()));
    names.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FAMILIES: [PlcFamily; 5] = [
        PlcFamily::Q,
        PlcFamily::L,
        PlcFamily::QnA,
        PlcFamily::IqL,
        PlcFamily::IqR,
    ];

    const SET_B: &[&str] = &[
        "LTS", "LTC", "LTN", "LSTS", "LSTC", "LSTN", "LCS", "LCC", "LCN", "LZ", "RD",
    ];

    #[test]
    fn unknown_mnemonic_is_rejected() {
        assert!(binary_code(PlcFamily::Q, "QQ").is_err());
    }

    #[test]
    fn d_is_decimal_word_on_every_family() {
        for family in ALL_FAMILIES {
            let (code, base) = binary_code(family, "D").unwrap();
            assert_eq!(code, 0xA8);
            assert_eq!(base, Base::Decimal);
            assert_eq!(access_kind(family, "D").unwrap(), AccessKind::Word);
        }
    }

    #[test]
    fn x_and_zr_use_hex_base() {
        assert_eq!(binary_code(PlcFamily::Q, "X").unwrap().1, Base::Hex);
        assert_eq!(binary_code(PlcFamily::Q, "ZR").unwrap().1, Base::Hex);
    }

    #[test]
    fn rd_is_decimal_despite_being_set_b() {
        assert_eq!(binary_code(PlcFamily::IqR, "RD").unwrap().1, Base::Decimal);
    }

    /// Property 4 (spec.md §8): every Set B mnemonic is rejected on every
    /// family except `iQ-R`.
    #[test]
    fn set_b_mnemonics_are_gated_to_iq_r() {
        for mnemonic in SET_B {
            for family in ALL_FAMILIES {
                let result = binary_code(family, mnemonic);
                if family == PlcFamily::IqR {
                    assert!(result.is_ok(), "{mnemonic} should be allowed on iQ-R");
                } else {
                    assert!(
                        result.is_err(),
                        "{mnemonic} should be rejected on {family:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn ascii_code_is_always_two_characters() {
        for entry in TABLE {
            assert_eq!(entry.ascii_code.len(), 2, "{}", entry.mnemonic);
        }
    }

    #[test]
    fn bit_word_dword_partition_matches_spec() {
        let bit = [
            "SM", "X", "Y", "M", "L", "F", "V", "B", "TS", "TC", "SS", "SC", "CS", "CC", "SB",
            "DX", "DY",
        ];
        let word = [
            "SD", "D", "W", "TN", "SN", "CN", "SW", "R", "ZR", "RD",
        ];
        let dword = [
            "LTS", "LTC", "LTN", "LSTS", "LSTC", "LSTN", "LCS", "LCC", "LCN", "LZ",
        ];
        for m in bit {
            let family = if SET_B.contains(&m) {
                PlcFamily::IqR
            } else {
                PlcFamily::Q
            };
            assert_eq!(access_kind(family, m).unwrap(), AccessKind::Bit, "{m}");
        }
        for m in word {
            let family = if SET_B.contains(&m) {
                PlcFamily::IqR
            } else {
                PlcFamily::Q
            };
            assert_eq!(access_kind(family, m).unwrap(), AccessKind::Word, "{m}");
        }
        for m in dword {
            assert_eq!(access_kind(PlcFamily::IqR, m).unwrap(), AccessKind::DWord, "{m}");
        }
    }
}
