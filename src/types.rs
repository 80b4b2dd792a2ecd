//! Small enumerated tags shared across the crate.
//!
//! These are closed, exhaustively-matched enums rather than strings — see
//! the design note in `SPEC_FULL.md` §9: validation collapses to
//! construction instead of being re-checked at every call site.

use std::fmt;
use std::str::FromStr;

use crate::error::DeviceError;

/// Which PLC family a [`Session`](crate::Session) is talking to.
///
/// Governs which device mnemonics are valid (§4.1), the response frame
/// layout (`iQ-R`/`iQ-L` carry a longer header), and the width of device
/// numbers on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PlcFamily {
    Q,
    L,
    QnA,
    IqL,
    IqR,
}

impl PlcFamily {
    /// `iQ-R`/`iQ-L` replies carry a 4-byte (binary) / 8-character (ASCII)
    /// longer header than the classic families (spec.md §3).
    pub(crate) fn has_extended_header(self) -> bool {
        matches!(self, PlcFamily::IqR | PlcFamily::IqL)
    }

    /// Whether device numbers use the 4-byte / 8-hex-char extended width
    /// (`iQ-R` only, spec.md §4.4).
    pub(crate) fn has_extended_device_width(self) -> bool {
        matches!(self, PlcFamily::IqR)
    }
}

impl fmt::Display for PlcFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlcFamily::Q => "Q",
            PlcFamily::L => "L",
            PlcFamily::QnA => "QnA",
            PlcFamily::IqL => "iQ-L",
            PlcFamily::IqR => "iQ-R",
        };
        f.write_str(s)
    }
}

impl FromStr for PlcFamily {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Q" | "q" => Ok(PlcFamily::Q),
            "L" | "l" => Ok(PlcFamily::L),
            "QnA" | "qna" => Ok(PlcFamily::QnA),
            "iQ-L" | "iql" => Ok(PlcFamily::IqL),
            "iQ-R" | "iqr" => Ok(PlcFamily::IqR),
            other => Err(DeviceError::InvalidPlcFamily(other.to_string())),
        }
    }
}

/// Binary or ASCII wire framing (spec.md §3).
///
/// Binary encodes each word as 2 bytes; ASCII encodes each word as 4
/// uppercase hex characters, doubling every subsequent field width.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CommType {
    Binary,
    Ascii,
}

impl CommType {
    /// Bytes (binary) or characters (ASCII) used to encode one 16-bit word.
    pub(crate) fn word_unit_size(self) -> usize {
        match self {
            CommType::Binary => 2,
            CommType::Ascii => 4,
        }
    }
}

impl fmt::Display for CommType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommType::Binary => "binary",
            CommType::Ascii => "ascii",
        };
        f.write_str(s)
    }
}

impl FromStr for CommType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(CommType::Binary),
            "ascii" => Ok(CommType::Ascii),
            other => Err(DeviceError::InvalidCommType(other.to_string())),
        }
    }
}

/// The access width of a device (spec.md §4.1): whether it's addressed bit
/// by bit, as 16-bit words, or as 32-bit double-words.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AccessKind {
    Bit,
    Word,
    DWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plc_family_round_trips_through_display_and_from_str() {
        for family in [
            PlcFamily::Q,
            PlcFamily::L,
            PlcFamily::QnA,
            PlcFamily::IqL,
            PlcFamily::IqR,
        ] {
            let s = family.to_string();
            let parsed: PlcFamily = s.parse().unwrap();
            assert_eq!(parsed, family);
        }
    }

    #[test]
    fn unknown_plc_family_is_an_error() {
        assert!("ZX-9".parse::<PlcFamily>().is_err());
    }

    #[test]
    fn unknown_comm_type_is_an_error() {
        assert!("hex".parse::<CommType>().is_err());
    }

    #[test]
    fn only_iq_r_and_iq_l_use_the_extended_header() {
        assert!(PlcFamily::IqR.has_extended_header());
        assert!(PlcFamily::IqL.has_extended_header());
        assert!(!PlcFamily::Q.has_extended_header());
        assert!(!PlcFamily::L.has_extended_header());
        assert!(!PlcFamily::QnA.has_extended_header());
    }

    #[test]
    fn only_iq_r_uses_the_extended_device_width() {
        assert!(PlcFamily::IqR.has_extended_device_width());
        assert!(!PlcFamily::IqL.has_extended_device_width());
    }
}
