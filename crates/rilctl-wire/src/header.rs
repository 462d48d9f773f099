use std::io::{Read, Write};

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, WireError};
use crate::io::{recv_exact, send_all};

/// Serialized size of the header block: command (4) + token (8) + status (4)
/// + payload length (4).
pub const HEADER_BLOCK_SIZE: usize = 20;

/// Width of the little-endian signed length prefix preceding the header block.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Fixed logical envelope describing one frame.
///
/// The header travels as a length-prefixed block rather than at a hardcoded
/// offset, so the block layout can change without touching the prefix logic.
/// Field order inside the block: command, token, status, payload length, all
/// little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Identifies the requested operation. 0 is the responder's loop-back.
    pub command: u32,
    /// Opaque correlation id, returned unmodified by the responder.
    pub token: u64,
    /// Responder-assigned result code, 0 on success. Requests carry 0.
    pub status: u32,
    /// Exact byte length of the payload block that follows the header.
    pub payload_len: u32,
}

impl Header {
    /// Header for an outgoing request. Requests always carry status 0.
    pub fn request(command: u32, token: u64, payload_len: u32) -> Self {
        Self {
            command,
            token,
            status: 0,
            payload_len,
        }
    }

    /// Serialize the four fields into a self-contained block.
    pub fn encode(&self) -> BytesMut {
        let mut block = BytesMut::with_capacity(HEADER_BLOCK_SIZE);
        block.put_u32_le(self.command);
        block.put_u64_le(self.token);
        block.put_u32_le(self.status);
        block.put_u32_le(self.payload_len);
        block
    }

    /// Parse a complete header block.
    pub fn decode(block: &[u8]) -> Result<Self> {
        if block.len() != HEADER_BLOCK_SIZE {
            return Err(WireError::MalformedFrame {
                detail: format!(
                    "header block is {} bytes, expected {HEADER_BLOCK_SIZE}",
                    block.len()
                ),
            });
        }

        let mut block = block;
        Ok(Self {
            command: block.get_u32_le(),
            token: block.get_u64_le(),
            status: block.get_u32_le(),
            payload_len: block.get_u32_le(),
        })
    }

    /// Write the length prefix and then the header block.
    pub fn write_to<W: Write>(&self, stream: &mut W) -> Result<()> {
        let block = self.encode();
        let prefix = (block.len() as i32).to_le_bytes();
        send_all(stream, &prefix)?;
        send_all(stream, &block)
    }

    /// Read a length-prefixed header block from a stream.
    ///
    /// The stream ending at the prefix or inside the block is
    /// [`WireError::EndOfStream`]; a complete block that does not parse is
    /// [`WireError::MalformedFrame`].
    pub fn read_from<R: Read>(stream: &mut R) -> Result<Self> {
        let prefix = recv_exact(stream, LENGTH_PREFIX_SIZE)?;
        let mut prefix = prefix.as_slice();
        let len = prefix.get_i32_le();
        if len < 0 {
            return Err(WireError::MalformedFrame {
                detail: format!("negative header block length {len}"),
            });
        }

        let block = recv_exact(stream, len as usize)?;
        Self::decode(&block)
    }
}
