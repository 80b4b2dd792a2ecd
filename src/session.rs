//! Session lifecycle (spec.md §3, §5, §6).
//!
//! `Session<S>` is generic over its transport so tests can swap in an
//! in-memory duplex stream instead of a real socket, the same way the
//! corpus's block reader is generic over `R: Read` while still shipping a
//! `File`-backed entry point for real use. Every mutating operation takes
//! `&mut self`: the borrow checker is the enforcement mechanism for
//! spec.md §5's "one outstanding request at a time" rule, not a runtime
//! lock.

use std::io::{Read, Write};
use std::net::TcpStream;
#[cfg(test)]
use std::time::Duration;

use tracing::info;

use crate::error::Error;
use crate::frame::{socket_timeout_for, AccessOptions};
use crate::transport::Transport;
use crate::types::{CommType, PlcFamily};

/// Fields a caller may override via [`Session::set_access_options`]
/// (spec.md §6). `None` leaves the current value untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessOptionsUpdate {
    pub commtype: Option<CommType>,
    pub network: Option<u8>,
    pub pc: Option<u8>,
    pub dest_moduleio: Option<u16>,
    pub dest_modulesta: Option<u8>,
    /// Seconds; wire timer becomes `timer_sec * 4` (250 ms units) and the
    /// socket timeout becomes `timer_sec + 1`.
    pub timer_sec: Option<f64>,
}

pub struct Session<S = TcpStream> {
    pub(crate) family: PlcFamily,
    pub(crate) comm_type: CommType,
    pub(crate) access_options: AccessOptions,
    pub(crate) transport: Option<Transport<S>>,
}

impl Session<TcpStream> {
    /// Create a session for the given PLC family. Binary framing and
    /// default [`AccessOptions`] until overridden.
    pub fn new(family: PlcFamily) -> Self {
        Session {
            family,
            comm_type: CommType::Binary,
            access_options: AccessOptions::default(),
            transport: None,
        }
    }

    /// Open the TCP connection (spec.md §3: transitions to Connected).
    pub fn connect(&mut self, host: &str, port: u16) -> Result<(), Error> {
        let transport = Transport::connect(host, port, self.access_options.socket_timeout)?;
        self.transport = Some(transport);
        info!(%host, port, family = %self.family, "session connected");
        Ok(())
    }
}

impl<S: Read + Write> Session<S> {
    /// Build a session around an already-open stream, bypassing `connect`.
    /// Used by tests to substitute an in-memory duplex stream for a real
    /// socket; also usable by callers with their own transport.
    pub fn with_transport(family: PlcFamily, comm_type: CommType, stream: S) -> Self {
        Session {
            family,
            comm_type,
            access_options: AccessOptions::default(),
            transport: Some(Transport::from_stream(stream)),
        }
    }

    pub fn family(&self) -> PlcFamily {
        self.family
    }

    pub fn comm_type(&self) -> CommType {
        self.comm_type
    }

    pub fn access_options(&self) -> &AccessOptions {
        &self.access_options
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Release the socket. Idempotent (spec.md §5).
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            let _ = transport.close();
        }
    }

    pub fn set_access_options(&mut self, update: AccessOptionsUpdate) {
        if let Some(commtype) = update.commtype {
            self.comm_type = commtype;
        }
        if let Some(network) = update.network {
            self.access_options.network = network;
        }
        if let Some(pc) = update.pc {
            self.access_options.pc = pc;
        }
        if let Some(dest_moduleio) = update.dest_moduleio {
            self.access_options.dest_moduleio = dest_moduleio;
        }
        if let Some(dest_modulesta) = update.dest_modulesta {
            self.access_options.dest_modulesta = dest_modulesta;
        }
        if let Some(timer_sec) = update.timer_sec {
            let timer = (timer_sec * 4.0).round() as u16;
            self.access_options.timer = timer;
            self.access_options.socket_timeout = socket_timeout_for(timer);
        }
    }

    pub(crate) fn transport_mut(&mut self) -> Result<&mut Transport<S>, Error> {
        self.transport.as_mut().ok_or(Error::NotConnected)
    }

    /// Reclaim the underlying stream, consuming the session. `None` if the
    /// session was never connected. Lets a caller (or a test harness built
    /// around an in-memory duplex stream) inspect what was actually written
    /// to the wire after issuing operations.
    pub fn into_stream(self) -> Option<S> {
        self.transport.map(Transport::into_stream)
    }

    pub(crate) fn disconnect_without_close(&mut self) {
        self.transport = None;
    }
}
