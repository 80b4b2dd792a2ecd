//! Error taxonomy (spec.md §7).
//!
//! One top-level [`Error`] composes narrower per-layer error types, the way
//! the corpus composes `BlockError`/`FrameError` into its reader's top-level
//! error via `#[from]` — callers that care about the cause can match
//! through, callers that don't can just use `Display`/`?`.

use std::io;

/// Errors raised locally, before any I/O: bad device mnemonics, addresses
/// that don't fit the family, or inputs rejected before a frame is built.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("unknown device mnemonic {0:?}")]
    UnknownMnemonic(String),
    #[error("device {mnemonic} is not available on PLC family {family}")]
    NotAllowedForFamily {
        mnemonic: &'static str,
        family: &'static str,
    },
    #[error("couldn't parse device address in {0:?}")]
    UnparsableAddress(String),
    #[error("{0:?} is not a valid commtype (expected \"binary\" or \"ascii\")")]
    InvalidCommType(String),
    #[error("{0:?} is not a valid PLC family tag")]
    InvalidPlcFamily(String),
    #[error("echo_test payload must be ASCII")]
    NonAsciiEchoPayload,
    #[error("{what} count {got} exceeds the protocol maximum of {max}")]
    CountOutOfRange {
        what: &'static str,
        got: usize,
        max: usize,
    },
}

/// Errors raised while decoding bytes off the wire: truncated frames,
/// non-hex-digit ASCII fields, non-UTF8 ASCII frames.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame too short: needed {needed} more byte(s) to read {what}")]
    Truncated { what: &'static str, needed: usize },
    #[error("{what} is not valid ASCII hex: {text:?}")]
    InvalidHex { what: &'static str, text: String },
    #[error("ASCII frame is not valid UTF-8")]
    NotUtf8,
}

/// A completion code the PLC returned, paired with its looked-up meaning
/// (spec.md §7's table). `name`/`description` are empty when the code isn't
/// in the table — the raw code is always preserved either way.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolError {
    pub code: u16,
    pub name: &'static str,
    pub description: &'static str,
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "PLC returned completion code 0x{:04X}", self.code)
        } else {
            write!(
                f,
                "PLC returned completion code 0x{:04X} ({}: {})",
                self.code, self.name, self.description
            )
        }
    }
}

/// Crate-wide error type (spec.md §7).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("command rejected by this PLC family/module")]
    UnsupportedCommand,
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
    #[error("session is not connected")]
    NotConnected,
}

/// Completion-code → (name, description) table (spec.md §7).
///
/// Table-driven on purpose (spec.md §9): adding a code means adding a row,
/// not touching any call site that parses a response.
const COMPLETION_CODES: &[(u16, &str, &str)] = &[
    (0xC050, "ascii_bin_mismatch", "ASCII/BIN mismatch"),
    (0xC051, "count_out_of_range", "read/write count out of range"),
    (0xC052, "count_out_of_range", "read/write count out of range"),
    (0xC053, "count_out_of_range", "read/write count out of range"),
    (0xC054, "count_out_of_range", "read/write count out of range"),
    (0xC056, "device_out_of_range", "device out of range"),
    (0xC058, "point_count_mismatch", "point count mismatch"),
    (0xC059, "invalid_command", "invalid command"),
    (0xC05C, "subcommand_error", "subcommand error"),
    (0xC05F, "not_executable", "not executable on target"),
    (0xC060, "data_error", "data error"),
    (0xC061, "data_error", "data error"),
    (0xC06F, "mode_mismatch", "mode mismatch"),
    (
        0xC070,
        "device_memory_extension_unavailable",
        "device memory extension unavailable",
    ),
    (
        0xC0B5,
        "unsupported_data",
        "unsupported data specified",
    ),
    (0xC200, "remote_password_error", "remote password error"),
    (0xC201, "password_lock_error", "password lock/state error"),
    (0xC204, "password_lock_error", "password lock/state error"),
];

/// Classify a non-zero completion code into a [`ProtocolError`].
///
/// Codes outside the table still produce a `ProtocolError` — the raw value
/// is never swallowed — just without a name/description (spec.md §7:
/// "Completion-code-to-kind mapping is table-driven so new codes can be
/// added without touching call sites").
pub(crate) fn classify_completion_code(code: u16) -> ProtocolError {
    match COMPLETION_CODES.iter().find(|(c, _, _)| *c == code) {
        Some((_, name, description)) => ProtocolError {
            code,
            name,
            description,
        },
        None => ProtocolError {
            code,
            name: "",
            description: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tabled_code_classifies_with_a_nonempty_description() {
        for (code, _, _) in COMPLETION_CODES {
            let err = classify_completion_code(*code);
            assert_eq!(err.code, *code);
            assert!(!err.description.is_empty());
        }
    }

    #[test]
    fn an_unknown_code_still_carries_the_raw_value() {
        let err = classify_completion_code(0x1234);
        assert_eq!(err.code, 0x1234);
        assert_eq!(err.name, "");
    }

    #[test]
    fn device_out_of_range_is_c056() {
        let err = classify_completion_code(0xC056);
        assert_eq!(err.name, "device_out_of_range");
    }
}
