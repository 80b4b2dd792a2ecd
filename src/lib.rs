//! A pure-Rust client for the MELSEC "3E frame" protocol used to talk to
//! Mitsubishi programmable logic controllers over TCP.
//!
//! A [`Session`] reads and writes PLC device memory (data registers,
//! inputs, outputs, timers, counters, link relays, file registers) and
//! issues remote operational control (run/stop/pause/reset, password
//! lock, echo diagnostic, CPU-type query), in either binary or hex-ASCII
//! wire framing, across the Q, L, QnA, iQ-L and iQ-R PLC families.
//!
//! ```no_run
//! use mc3e::{PlcFamily, Session};
//!
//! # fn main() -> Result<(), mc3e::Error> {
//! let mut session = Session::new(PlcFamily::Q);
//! session.connect("192.168.0.10", 5007)?;
//! let values = session.batchread_wordunits("D1000", 2)?;
//! session.close();
//! # let _ = values;
//! # Ok(())
//! # }
//! ```
//!
//! See `device`/`frame`/`ops` for the protocol internals: the device
//! table and address parser turn a string like `"D1000"` into a typed
//! device reference, `codec`/`frame` turn that into wire bytes and back,
//! and `ops` wires the two together into the operations above.

mod addr;
mod codec;
mod device;
mod error;
mod frame;
mod ops;
mod session;
mod transport;
mod types;

pub use error::{DeviceError, Error, ProtocolError};
pub use frame::AccessOptions;
pub use session::{AccessOptionsUpdate, Session};
pub use types::{AccessKind, CommType, PlcFamily};
