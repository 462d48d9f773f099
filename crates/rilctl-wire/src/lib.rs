//! Control-message framing for radio-interface simulation servers.
//!
//! A frame on the wire is a 4-byte little-endian length prefix, the header
//! block of exactly that size, and then the payload block whose length is
//! carried inside the header. The header describes one request or response:
//! command id, correlation token, responder status, and payload length.
//! Payload bytes are opaque to this crate.
//!
//! Two layers, leaves first:
//!
//! - [`io`] — reliable byte transfer over a blocking stream: [`io::recv_exact`]
//!   and [`io::send_all`] absorb the partial reads and writes inherent to
//!   stream sockets.
//! - [`header`] and [`message`] — the frame codec. [`Message`] is the public
//!   surface: one send or receive per exchange, no session state.
//!
//! Every operation blocks until its bytes are fully transferred or the
//! stream fails. Errors propagate to the caller; nothing is retried here.

pub mod error;
pub mod header;
pub mod io;
pub mod message;

pub use error::{Result, WireError};
pub use header::{Header, HEADER_BLOCK_SIZE, LENGTH_PREFIX_SIZE};
pub use message::Message;
