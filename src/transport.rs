//! TCP transport adapter (spec.md §4.7).
//!
//! A thin wrapper over a blocking stream: connect, send, and a two-stage
//! receive that reads the header far enough to learn the declared length,
//! then reads exactly that many more bytes — the same "read header, learn
//! the length, read the rest" shape the corpus's block reader uses before
//! it ever tries to parse a block.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::codec::Encoding;
use crate::types::PlcFamily;

/// Header bytes/chars preceding the `len` field: subheader + network + pc +
/// moduleio + modulesta (spec.md §3).
const PRE_LEN_FIELDS_BINARY_BYTES: usize = 2 + 1 + 1 + 2 + 1;

fn pre_len_bytes<E: Encoding>() -> usize {
    PRE_LEN_FIELDS_BINARY_BYTES * E::word_unit_size() / 2
}

fn len_field_bytes<E: Encoding>() -> usize {
    E::word_unit_size()
}

pub(crate) struct Transport<S = TcpStream> {
    stream: S,
}

impl Transport<TcpStream> {
    pub(crate) fn connect(host: &str, port: u16, timeout: Duration) -> io::Result<Self> {
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no address resolved"))?;
        let stream = TcpStream::connect_timeout(&addr, timeout)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        stream.set_nodelay(true)?;
        debug!(%host, port, "connected to PLC");
        Ok(Transport { stream })
    }
}

impl<S: Read + Write> Transport<S> {
    pub(crate) fn from_stream(stream: S) -> Self {
        Transport { stream }
    }

    pub(crate) fn send_all(&mut self, frame: &[u8]) -> io::Result<()> {
        trace!(len = frame.len(), "sending frame");
        self.stream.write_all(frame)
    }

    /// Read a reply frame: enough bytes to decode `len`, then the declared
    /// remainder.
    pub(crate) fn recv_frame<E: Encoding>(&mut self, family: PlcFamily) -> io::Result<Bytes> {
        let header_len = pre_len_bytes::<E>() + len_field_bytes::<E>();
        let mut header = vec![0u8; header_len];
        self.stream.read_exact(&mut header)?;

        let mut len_slice = Bytes::copy_from_slice(&header[pre_len_bytes::<E>()..]);
        let len = E::get_u16(&mut len_slice)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?
            as usize;

        // `len` already counts the extended header when present, so the
        // remainder is read in one shot regardless of PLC family.
        let mut rest = vec![0u8; len];
        self.stream.read_exact(&mut rest)?;

        trace!(header_len, len, "received frame");
        let mut full = BytesMut::with_capacity(header.len() + rest.len());
        full.extend_from_slice(&header);
        full.extend_from_slice(&rest);
        let _ = family; // family only matters to the caller's response parser
        Ok(full.freeze())
    }

    pub(crate) fn close(&mut self) -> io::Result<()> {
        let _ = self.stream.flush();
        Ok(())
    }

    pub(crate) fn into_stream(self) -> S {
        self.stream
    }
}
