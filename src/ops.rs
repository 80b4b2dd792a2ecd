//! The operation layer (spec.md §4.6): one method per PLC command, each
//! built as "encode a body, call `execute`, decode the result" — the same
//! division of labour the corpus gives its top-level reader delegating to
//! a block reader plus a section. Every operation is generic over
//! [`Encoding`] and dispatched once, at the top, on the session's
//! [`CommType`](crate::types::CommType).

use std::io::{Read, Write};

use bytes::{Buf, Bytes, BytesMut};

use crate::addr::parse_device;
use crate::codec::{AsciiEncoding, BinaryEncoding, Encoding};
use crate::device;
use crate::error::{DeviceError, Error, FrameError};
use crate::frame::{build_request, parse_response};
use crate::session::Session;
use crate::types::{CommType, PlcFamily};

const RANDOM_READ_MAX_COUNT: usize = 192;

fn device_ref<E: Encoding>(buf: &mut BytesMut, family: PlcFamily, head: &str) -> Result<(), DeviceError> {
    let (mnemonic, number) = parse_device(family, head)?;
    let (binary_code, _) = device::binary_code(family, &mnemonic)?;
    let (ascii_code, _) = device::ascii_code(family, &mnemonic)?;
    E::put_device_ref(buf, family.has_extended_device_width(), binary_code, ascii_code, number);
    Ok(())
}

fn execute<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    command: u16,
    subcommand: u16,
    body: &[u8],
) -> Result<Bytes, Error> {
    let frame = build_request::<E>(&session.access_options, command, subcommand, body);
    let family = session.family;
    let transport = session.transport_mut()?;
    transport.send_all(&frame)?;
    let raw = transport.recv_frame::<E>(family)?;
    parse_response::<E>(family, raw)
}

fn send_only<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    command: u16,
    subcommand: u16,
    body: &[u8],
) -> Result<(), Error> {
    let frame = build_request::<E>(&session.access_options, command, subcommand, body);
    let transport = session.transport_mut()?;
    transport.send_all(&frame)?;
    Ok(())
}

impl<S: Read + Write> Session<S> {
    /// `batchread_wordunits(head, n)` (0x0401/0x0000): read `n` consecutive
    /// word devices starting at `head` as signed 16-bit values.
    pub fn batchread_wordunits(&mut self, head: &str, count: u16) -> Result<Vec<i16>, Error> {
        match self.comm_type {
            CommType::Binary => batchread_wordunits_impl::<S, BinaryEncoding>(self, head, count),
            CommType::Ascii => batchread_wordunits_impl::<S, AsciiEncoding>(self, head, count),
        }
    }

    /// `batchread_bitunits(head, n)` (0x0401/0x0001).
    pub fn batchread_bitunits(&mut self, head: &str, count: u16) -> Result<Vec<bool>, Error> {
        match self.comm_type {
            CommType::Binary => batchread_bitunits_impl::<S, BinaryEncoding>(self, head, count),
            CommType::Ascii => batchread_bitunits_impl::<S, AsciiEncoding>(self, head, count),
        }
    }

    /// `batchwrite_wordunits(head, values)` (0x1401/0x0000).
    pub fn batchwrite_wordunits(&mut self, head: &str, values: &[i16]) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => batchwrite_wordunits_impl::<S, BinaryEncoding>(self, head, values),
            CommType::Ascii => batchwrite_wordunits_impl::<S, AsciiEncoding>(self, head, values),
        }
    }

    /// `batchwrite_bitunits(head, values)` (0x1401/0x0001).
    pub fn batchwrite_bitunits(&mut self, head: &str, values: &[bool]) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => batchwrite_bitunits_impl::<S, BinaryEncoding>(self, head, values),
            CommType::Ascii => batchwrite_bitunits_impl::<S, AsciiEncoding>(self, head, values),
        }
    }

    /// `randomread(words, dwords)` (0x0403/0x0000). Word/dword counts are
    /// each capped at 192 client-side, matching the protocol limit.
    pub fn randomread(&mut self, words: &[&str], dwords: &[&str]) -> Result<(Vec<i16>, Vec<i32>), Error> {
        match self.comm_type {
            CommType::Binary => randomread_impl::<S, BinaryEncoding>(self, words, dwords),
            CommType::Ascii => randomread_impl::<S, AsciiEncoding>(self, words, dwords),
        }
    }

    /// `randomwrite(words, dwords)` (0x1402/0x0000).
    pub fn randomwrite(&mut self, words: &[(&str, i16)], dwords: &[(&str, i32)]) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => randomwrite_impl::<S, BinaryEncoding>(self, words, dwords),
            CommType::Ascii => randomwrite_impl::<S, AsciiEncoding>(self, words, dwords),
        }
    }

    /// `randomwrite_bitunits(bits)` (0x1402/0x0001).
    pub fn randomwrite_bitunits(&mut self, bits: &[(&str, bool)]) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => randomwrite_bitunits_impl::<S, BinaryEncoding>(self, bits),
            CommType::Ascii => randomwrite_bitunits_impl::<S, AsciiEncoding>(self, bits),
        }
    }

    /// `remote_run(clear_mode, force)` (0x1001/0x0000).
    pub fn remote_run(&mut self, clear_mode: u16, force: bool) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => remote_run_impl::<S, BinaryEncoding>(self, clear_mode, force),
            CommType::Ascii => remote_run_impl::<S, AsciiEncoding>(self, clear_mode, force),
        }
    }

    /// `remote_stop()` (0x1002/0x0000).
    pub fn remote_stop(&mut self) -> Result<(), Error> {
        let mut body = BytesMut::new();
        match self.comm_type {
            CommType::Binary => {
                BinaryEncoding::put_u16(&mut body, 0x0001);
                execute::<S, BinaryEncoding>(self, 0x1002, 0x0000, &body).map(|_| ())
            }
            CommType::Ascii => {
                AsciiEncoding::put_u16(&mut body, 0x0001);
                execute::<S, AsciiEncoding>(self, 0x1002, 0x0000, &body).map(|_| ())
            }
        }
    }

    /// `remote_pause(force)` (0x1003/0x0000).
    pub fn remote_pause(&mut self, force: bool) -> Result<(), Error> {
        let mode_flag: u16 = if force { 0x0003 } else { 0x0001 };
        let mut body = BytesMut::new();
        match self.comm_type {
            CommType::Binary => {
                BinaryEncoding::put_u16(&mut body, mode_flag);
                execute::<S, BinaryEncoding>(self, 0x1003, 0x0000, &body).map(|_| ())
            }
            CommType::Ascii => {
                AsciiEncoding::put_u16(&mut body, mode_flag);
                execute::<S, AsciiEncoding>(self, 0x1003, 0x0000, &body).map(|_| ())
            }
        }
    }

    /// `remote_latchclear()` (0x1005/0x0000).
    pub fn remote_latchclear(&mut self) -> Result<(), Error> {
        let mut body = BytesMut::new();
        match self.comm_type {
            CommType::Binary => {
                BinaryEncoding::put_u16(&mut body, 0x0001);
                execute::<S, BinaryEncoding>(self, 0x1005, 0x0000, &body).map(|_| ())
            }
            CommType::Ascii => {
                AsciiEncoding::put_u16(&mut body, 0x0001);
                execute::<S, AsciiEncoding>(self, 0x1005, 0x0000, &body).map(|_| ())
            }
        }
    }

    /// `remote_reset()` (0x1006/0x0000). Sends the request and tears the
    /// transport down without waiting for a reply (spec.md §4.6, §9).
    pub fn remote_reset(&mut self) -> Result<(), Error> {
        let mut body = BytesMut::new();
        let result = match self.comm_type {
            CommType::Binary => {
                BinaryEncoding::put_u16(&mut body, 0x0001);
                send_only::<S, BinaryEncoding>(self, 0x1006, 0x0000, &body)
            }
            CommType::Ascii => {
                AsciiEncoding::put_u16(&mut body, 0x0001);
                send_only::<S, AsciiEncoding>(self, 0x1006, 0x0000, &body)
            }
        };
        self.disconnect_without_close();
        result
    }

    /// `read_cputype()` (0x0101/0x0000): returns `(name, code)`, name
    /// trimmed of its trailing space padding.
    pub fn read_cputype(&mut self) -> Result<(String, String), Error> {
        match self.comm_type {
            CommType::Binary => read_cputype_impl::<S, BinaryEncoding>(self),
            CommType::Ascii => read_cputype_impl::<S, AsciiEncoding>(self),
        }
    }

    /// `remote_unlock(password)` (0x1630/0x0000).
    pub fn remote_unlock(&mut self, password: &str) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => password_op_impl::<S, BinaryEncoding>(self, 0x1630, password),
            CommType::Ascii => password_op_impl::<S, AsciiEncoding>(self, 0x1630, password),
        }
    }

    /// `remote_lock(password)` (0x1631/0x0000).
    pub fn remote_lock(&mut self, password: &str) -> Result<(), Error> {
        match self.comm_type {
            CommType::Binary => password_op_impl::<S, BinaryEncoding>(self, 0x1631, password),
            CommType::Ascii => password_op_impl::<S, AsciiEncoding>(self, 0x1631, password),
        }
    }

    /// `echo_test(data)` (0x0619/0x0000): `data` must be ASCII; checked
    /// client-side before any I/O (spec.md §4.6).
    pub fn echo_test(&mut self, data: &str) -> Result<(u16, String), Error> {
        if !data.is_ascii() {
            return Err(DeviceError::NonAsciiEchoPayload.into());
        }
        match self.comm_type {
            CommType::Binary => echo_test_impl::<S, BinaryEncoding>(self, data),
            CommType::Ascii => echo_test_impl::<S, AsciiEncoding>(self, data),
        }
    }
}

fn batchread_wordunits_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    head: &str,
    count: u16,
) -> Result<Vec<i16>, Error> {
    let mut body = BytesMut::new();
    device_ref::<E>(&mut body, session.family, head)?;
    E::put_u16(&mut body, count);
    let mut reply = execute::<S, E>(session, 0x0401, 0x0000, &body)?;
    let mut values = Vec::with_capacity(count as usize);
    for _ in 0..count {
        values.push(E::get_i16(&mut reply)?);
    }
    Ok(values)
}

fn batchread_bitunits_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    head: &str,
    count: u16,
) -> Result<Vec<bool>, Error> {
    let mut body = BytesMut::new();
    device_ref::<E>(&mut body, session.family, head)?;
    E::put_u16(&mut body, count);
    let mut reply = execute::<S, E>(session, 0x0401, 0x0001, &body)?;
    Ok(E::get_bits(&mut reply, count as usize)?)
}

fn batchwrite_wordunits_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    head: &str,
    values: &[i16],
) -> Result<(), Error> {
    let mut body = BytesMut::new();
    device_ref::<E>(&mut body, session.family, head)?;
    E::put_u16(&mut body, values.len() as u16);
    for &v in values {
        E::put_i16(&mut body, v);
    }
    execute::<S, E>(session, 0x1401, 0x0000, &body).map(|_| ())
}

fn batchwrite_bitunits_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    head: &str,
    values: &[bool],
) -> Result<(), Error> {
    let mut body = BytesMut::new();
    device_ref::<E>(&mut body, session.family, head)?;
    E::put_u16(&mut body, values.len() as u16);
    E::put_bits(&mut body, values);
    execute::<S, E>(session, 0x1401, 0x0001, &body).map(|_| ())
}

fn randomread_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    words: &[&str],
    dwords: &[&str],
) -> Result<(Vec<i16>, Vec<i32>), Error> {
    if words.len() > RANDOM_READ_MAX_COUNT {
        return Err(DeviceError::CountOutOfRange {
            what: "word",
            got: words.len(),
            max: RANDOM_READ_MAX_COUNT,
        }
        .into());
    }
    if dwords.len() > RANDOM_READ_MAX_COUNT {
        return Err(DeviceError::CountOutOfRange {
            what: "dword",
            got: dwords.len(),
            max: RANDOM_READ_MAX_COUNT,
        }
        .into());
    }

    let mut body = BytesMut::new();
    E::put_u8(&mut body, words.len() as u8);
    E::put_u8(&mut body, dwords.len() as u8);
    for &head in words {
        device_ref::<E>(&mut body, session.family, head)?;
    }
    for &head in dwords {
        device_ref::<E>(&mut body, session.family, head)?;
    }

    let mut reply = execute::<S, E>(session, 0x0403, 0x0000, &body)?;
    let mut word_values = Vec::with_capacity(words.len());
    for _ in 0..words.len() {
        word_values.push(E::get_i16(&mut reply)?);
    }
    let mut dword_values = Vec::with_capacity(dwords.len());
    for _ in 0..dwords.len() {
        dword_values.push(E::get_i32(&mut reply)?);
    }
    Ok((word_values, dword_values))
}

fn randomwrite_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    words: &[(&str, i16)],
    dwords: &[(&str, i32)],
) -> Result<(), Error> {
    let mut body = BytesMut::new();
    E::put_u8(&mut body, words.len() as u8);
    E::put_u8(&mut body, dwords.len() as u8);
    for &(head, value) in words {
        device_ref::<E>(&mut body, session.family, head)?;
        E::put_i16(&mut body, value);
    }
    for &(head, value) in dwords {
        device_ref::<E>(&mut body, session.family, head)?;
        E::put_i32(&mut body, value);
    }
    execute::<S, E>(session, 0x1402, 0x0000, &body).map(|_| ())
}

fn randomwrite_bitunits_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    bits: &[(&str, bool)],
) -> Result<(), Error> {
    let mut body = BytesMut::new();
    E::put_u8(&mut body, bits.len() as u8);
    for &(head, value) in bits {
        device_ref::<E>(&mut body, session.family, head)?;
        E::put_u16(&mut body, value as u16);
    }
    execute::<S, E>(session, 0x1402, 0x0001, &body).map(|_| ())
}

fn remote_run_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    clear_mode: u16,
    force: bool,
) -> Result<(), Error> {
    let mode_flag: u16 = if force { 0x0003 } else { 0x0001 };
    let mut body = BytesMut::new();
    E::put_u16(&mut body, mode_flag);
    E::put_u16(&mut body, clear_mode);
    execute::<S, E>(session, 0x1001, 0x0000, &body).map(|_| ())
}

fn read_cputype_impl<S: Read + Write, E: Encoding>(session: &mut Session<S>) -> Result<(String, String), Error> {
    let mut body = execute::<S, E>(session, 0x0101, 0x0000, &[])?;
    let code_width = E::word_unit_size();
    let needed = 16 + code_width;
    if body.remaining() < needed {
        return Err(FrameError::Truncated {
            what: "cpu type reply",
            needed: needed - body.remaining(),
        }
        .into());
    }
    let name_bytes = body.copy_to_bytes(16);
    let name = String::from_utf8_lossy(&name_bytes).trim_end().to_string();
    let code_bytes = body.copy_to_bytes(code_width);
    let code = if code_width == 2 {
        format!("{:02X}{:02X}", code_bytes[0], code_bytes[1])
    } else {
        String::from_utf8_lossy(&code_bytes).to_uppercase()
    };
    Ok((name, code))
}

fn password_op_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    command: u16,
    password: &str,
) -> Result<(), Error> {
    let mut body = BytesMut::new();
    E::put_u16(&mut body, password.len() as u16);
    body.extend_from_slice(password.as_bytes());
    execute::<S, E>(session, command, 0x0000, &body).map(|_| ())
}

fn echo_test_impl<S: Read + Write, E: Encoding>(
    session: &mut Session<S>,
    data: &str,
) -> Result<(u16, String), Error> {
    let mut body = BytesMut::new();
    E::put_u16(&mut body, data.len() as u16);
    body.extend_from_slice(data.as_bytes());
    let mut reply = execute::<S, E>(session, 0x0619, 0x0000, &body)?;
    let echoed_len = E::get_u16(&mut reply)?;
    if reply.remaining() < echoed_len as usize {
        return Err(FrameError::Truncated {
            what: "echo test payload",
            needed: echoed_len as usize - reply.remaining(),
        }
        .into());
    }
    let echoed_bytes = reply.copy_to_bytes(echoed_len as usize);
    let echoed_data = String::from_utf8_lossy(&echoed_bytes).to_string();
    Ok((echoed_len, echoed_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::types::{CommType, PlcFamily};
    use std::io::{Cursor, Read as _, Write as _};

    struct MockStream {
        inbound: Cursor<Vec<u8>>,
        outbound: Vec<u8>,
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.inbound.read(buf)
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.outbound.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn reply_frame(body: &[u8], status: u16) -> Vec<u8> {
        let mut raw = BytesMut::new();
        BinaryEncoding::put_u16(&mut raw, 0x5000);
        BinaryEncoding::put_u8(&mut raw, 0);
        BinaryEncoding::put_u8(&mut raw, 0xFF);
        BinaryEncoding::put_u16(&mut raw, 0x03FF);
        BinaryEncoding::put_u8(&mut raw, 0);
        BinaryEncoding::put_u16(&mut raw, (2 + body.len()) as u16);
        BinaryEncoding::put_u16(&mut raw, status);
        raw.extend_from_slice(body);
        raw.to_vec()
    }

    /// Scenario S1 (spec.md §8).
    #[test]
    fn batchread_wordunits_decodes_signed_values() {
        let reply = reply_frame(&[0x39, 0x30, 0x4E, 0x61], 0);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        let values = session.batchread_wordunits("D1000", 2).unwrap();
        assert_eq!(values, vec![12345, 24910]);
    }

    /// Scenario S5 (spec.md §8).
    #[test]
    fn batchread_wordunits_surfaces_protocol_error() {
        let reply = reply_frame(&[], 0xC056);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        let err = session.batchread_wordunits("D1000", 2).unwrap_err();
        match err {
            Error::Protocol(p) => assert_eq!(p.code, 0xC056),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Scenario S2 (spec.md §8): command/subcommand `1401/0001`, device-ref
    /// `10 00 00 9C`, count `05 00`, packed body `10 10 00`.
    #[test]
    fn batchwrite_bitunits_sends_packed_body() {
        let reply = reply_frame(&[], 0);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        session
            .batchwrite_bitunits("X10", &[true, false, true, true, false])
            .unwrap();

        let sent = session.into_stream().unwrap().outbound;
        assert_eq!(
            sent,
            vec![
                0x50, 0x00, 0x00, 0xFF, 0xFF, 0x03, 0x00, 0x0F, 0x00, 0x04, 0x00, 0x01, 0x14,
                0x01, 0x00, 0x10, 0x00, 0x00, 0x9C, 0x05, 0x00, 0x10, 0x10, 0x00,
            ]
        );
    }

    /// Scenario S3 (spec.md §8): command `1001/0000`, body `03 00 01 00`.
    #[test]
    fn remote_run_sends_force_flag() {
        let reply = reply_frame(&[], 0);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        session.remote_run(1, true).unwrap();

        let sent = session.into_stream().unwrap().outbound;
        assert_eq!(
            sent,
            vec![
                0x50, 0x00, 0x00, 0xFF, 0xFF, 0x03, 0x00, 0x0A, 0x00, 0x04, 0x00, 0x01, 0x10,
                0x00, 0x00, 0x03, 0x00, 0x01, 0x00,
            ]
        );
    }

    /// Scenario S4 (spec.md §8).
    #[test]
    fn read_cputype_trims_name_padding() {
        let mut body = b"Q06UDV          ".to_vec(); // 16 bytes, space padded
        body.truncate(16);
        body.extend_from_slice(&[0x12, 0x34]);
        let reply = reply_frame(&body, 0);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        let (name, code) = session.read_cputype().unwrap();
        assert_eq!(name, "Q06UDV");
        assert_eq!(code, "1234");
    }

    /// A reply shorter than 16 name bytes + the CPU code width must be a
    /// `Truncated` error, not a slice-index panic.
    #[test]
    fn read_cputype_rejects_short_reply() {
        let reply = reply_frame(b"Q06UDV", 0); // 6 bytes, nowhere near 16+2
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        let err = session.read_cputype().unwrap_err();
        assert!(matches!(err, Error::Frame(FrameError::Truncated { .. })));
    }

    #[test]
    fn echo_test_rejects_non_ascii_before_sending() {
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(Vec::new()),
                outbound: Vec::new(),
            },
        );
        let err = session.echo_test("héllo").unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::NonAsciiEchoPayload)));
    }

    /// A reply that declares a longer echoed payload than it actually
    /// carries must be a `Truncated` error, not a slice-index panic.
    #[test]
    fn echo_test_rejects_reply_shorter_than_declared_length() {
        let mut body = BytesMut::new();
        BinaryEncoding::put_u16(&mut body, 5); // claims 5 bytes...
        body.extend_from_slice(b"ab"); // ...but only 2 follow
        let reply = reply_frame(&body[..], 0);
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(reply),
                outbound: Vec::new(),
            },
        );
        let err = session.echo_test("hi").unwrap_err();
        assert!(matches!(err, Error::Frame(FrameError::Truncated { .. })));
    }

    /// Property 4 (spec.md §8) exercised through the operation layer.
    #[test]
    fn randomread_rejects_oversized_word_count() {
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(Vec::new()),
                outbound: Vec::new(),
            },
        );
        let heads: Vec<&str> = vec!["D1"; 193];
        let err = session.randomread(&heads, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn remote_reset_disconnects_even_though_no_reply_is_read() {
        let mut session = Session::with_transport(
            PlcFamily::Q,
            CommType::Binary,
            MockStream {
                inbound: Cursor::new(Vec::new()),
                outbound: Vec::new(),
            },
        );
        session.remote_reset().unwrap();
        assert!(!session.is_connected());
    }
}
