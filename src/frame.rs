//! Frame assembly and response parsing (spec.md §4.4, §4.5).

use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::Encoding;
use crate::error::{classify_completion_code, Error};
use crate::types::PlcFamily;

const SUBHEADER: u16 = 0x5000;

/// Per-session frame header defaults (spec.md §3), mutated through
/// [`crate::Session::set_access_options`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessOptions {
    pub network: u8,
    pub pc: u8,
    pub dest_moduleio: u16,
    pub dest_modulesta: u8,
    /// Wire-level timer in 250 ms units.
    pub timer: u16,
    pub socket_timeout: Duration,
}

impl Default for AccessOptions {
    fn default() -> Self {
        let timer = 4;
        AccessOptions {
            network: 0,
            pc: 0xFF,
            dest_moduleio: 0x03FF,
            dest_modulesta: 0x00,
            timer,
            socket_timeout: socket_timeout_for(timer),
        }
    }
}

pub(crate) fn socket_timeout_for(timer: u16) -> Duration {
    Duration::from_secs_f64(timer as f64 * 0.25 + 1.0)
}

/// Build a 3E request frame: header, placeholder length, timer/command/
/// subcommand, body, then back-patch the length (spec.md §4.4's five steps).
pub(crate) fn build_request<E: Encoding>(
    opts: &AccessOptions,
    command: u16,
    subcommand: u16,
    body: &[u8],
) -> BytesMut {
    let mut buf = BytesMut::new();
    E::put_u16(&mut buf, SUBHEADER);
    E::put_u8(&mut buf, opts.network);
    E::put_u8(&mut buf, opts.pc);
    E::put_u16(&mut buf, opts.dest_moduleio);
    E::put_u8(&mut buf, opts.dest_modulesta);

    let len_pos = buf.len();
    E::put_u16(&mut buf, 0); // back-patched below
    let len_field_width = buf.len() - len_pos;

    let body_start = buf.len();
    E::put_u16(&mut buf, opts.timer);
    E::put_u16(&mut buf, command);
    E::put_u16(&mut buf, subcommand);
    buf.put_slice(body);

    let len_value = (buf.len() - body_start) as u16;
    let mut len_buf = BytesMut::new();
    E::put_u16(&mut len_buf, len_value);
    buf[len_pos..len_pos + len_field_width].copy_from_slice(&len_buf);

    buf
}

/// Parse a reply frame: skip the header (longer for `iQ-R`/`iQ-L`), read the
/// completion status, and return the body on success (spec.md §4.5).
pub(crate) fn parse_response<E: Encoding>(family: PlcFamily, raw: Bytes) -> Result<Bytes, Error> {
    let mut buf = raw;
    let _subheader = E::get_u16(&mut buf)?;
    let _network = E::get_u8(&mut buf)?;
    let _pc = E::get_u8(&mut buf)?;
    let _moduleio = E::get_u16(&mut buf)?;
    let _modulesta = E::get_u8(&mut buf)?;
    let _len = E::get_u16(&mut buf)?;

    if family.has_extended_header() {
        let _ext_hi = E::get_u16(&mut buf)?;
        let _ext_lo = E::get_u16(&mut buf)?;
    }

    let status = E::get_u16(&mut buf)?;
    if status != 0 {
        let protocol_error = classify_completion_code(status);
        return Err(match protocol_error.name {
            "invalid_command" | "subcommand_error" => Error::UnsupportedCommand,
            _ => Error::Protocol(protocol_error),
        });
    }
    Ok(buf)
}
