use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, WireError};

/// Read exactly `count` bytes from a blocking stream.
///
/// Loops over short reads until the full count has accumulated. A zero-byte
/// read before then means the peer closed the stream; that surfaces as
/// [`WireError::EndOfStream`], never as a short buffer.
pub fn recv_exact<R: Read>(stream: &mut R, count: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; count];
    let mut filled = 0usize;

    while filled < count {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(WireError::EndOfStream {
                    expected: count,
                    got: filled,
                })
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(WireError::Io(err)),
        }
    }

    Ok(buf)
}

/// Write an entire buffer to a blocking stream.
///
/// Loops over partial writes: either every byte reaches the stream or an
/// error is returned. A zero-byte write is treated as the peer closing.
pub fn send_all<W: Write>(stream: &mut W, bytes: &[u8]) -> Result<()> {
    let mut offset = 0usize;

    while offset < bytes.len() {
        match stream.write(&bytes[offset..]) {
            Ok(0) => {
                return Err(WireError::EndOfStream {
                    expected: bytes.len(),
                    got: offset,
                })
            }
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(WireError::Io(err)),
        }
    }

    Ok(())
}
