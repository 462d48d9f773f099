use std::io::{Read, Write};

use bytes::Bytes;

use crate::error::{Result, WireError};
use crate::header::Header;
use crate::io::{recv_exact, send_all};

/// One decoded request or response.
///
/// A value is built fresh for each exchange and never reused; there is no
/// session state behind it. An empty payload is `Bytes::new()`, which is a
/// present-but-zero-length payload, not an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub command: u32,
    pub token: u64,
    pub status: u32,
    pub payload: Bytes,
}

impl Message {
    /// Send one request frame: a header carrying status 0 and the payload
    /// length, followed by the payload bytes when there are any.
    pub fn send<W: Write>(
        stream: &mut W,
        command: u32,
        token: u64,
        payload: &[u8],
    ) -> Result<()> {
        if payload.len() > u32::MAX as usize {
            return Err(WireError::PayloadTooLarge {
                size: payload.len(),
                max: u32::MAX as usize,
            });
        }

        let header = Header::request(command, token, payload.len() as u32);
        header.write_to(stream)?;
        if !payload.is_empty() {
            send_all(stream, payload)?;
        }
        Ok(())
    }

    /// Receive one frame, blocking until header and payload have fully
    /// arrived. The payload read is exactly as long as the header declares.
    pub fn recv<R: Read>(stream: &mut R) -> Result<Self> {
        let header = Header::read_from(stream)?;
        let payload = if header.payload_len > 0 {
            Bytes::from(recv_exact(stream, header.payload_len as usize)?)
        } else {
            Bytes::new()
        };

        Ok(Self {
            command: header.command,
            token: header.token,
            status: header.status,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::header::{HEADER_BLOCK_SIZE, LENGTH_PREFIX_SIZE};

    #[test]
    fn send_recv_roundtrip() {
        let mut wire = Cursor::new(Vec::<u8>::new());
        Message::send(&mut wire, 7, 1234567890123, b"radio-state").unwrap();

        wire.set_position(0);
        let msg = Message::recv(&mut wire).unwrap();

        assert_eq!(msg.command, 7);
        assert_eq!(msg.token, 1234567890123);
        assert_eq!(msg.status, 0);
        assert_eq!(msg.payload.as_ref(), b"radio-state");
    }

    #[test]
    fn empty_payload_roundtrips_as_empty_not_absent() {
        let mut wire = Cursor::new(Vec::<u8>::new());
        Message::send(&mut wire, 1, 4, b"").unwrap();

        // No payload block on the wire at all.
        assert_eq!(
            wire.get_ref().len(),
            LENGTH_PREFIX_SIZE + HEADER_BLOCK_SIZE
        );

        wire.set_position(0);
        let msg = Message::recv(&mut wire).unwrap();
        assert_eq!(msg.command, 1);
        assert_eq!(msg.token, 4);
        assert_eq!(msg.payload, Bytes::new());
    }

    #[test]
    fn declared_length_matches_wire_length() {
        let payload = vec![0xA5u8; 300];
        let mut wire = Cursor::new(Vec::<u8>::new());
        Message::send(&mut wire, 2, 9, &payload).unwrap();

        assert_eq!(
            wire.get_ref().len(),
            LENGTH_PREFIX_SIZE + HEADER_BLOCK_SIZE + payload.len()
        );

        wire.set_position(0);
        let msg = Message::recv(&mut wire).unwrap();
        assert_eq!(msg.payload.len(), payload.len());
        assert_eq!(msg.payload.as_ref(), payload.as_slice());
    }

    #[test]
    fn recv_fails_when_payload_is_truncated() {
        let mut wire = Cursor::new(Vec::<u8>::new());
        Message::send(&mut wire, 3, 8, b"truncated payload").unwrap();

        let mut bytes = wire.into_inner();
        bytes.truncate(bytes.len() - 5);

        let err = Message::recv(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, WireError::EndOfStream { .. }));
    }

    #[test]
    fn successive_messages_share_a_stream() {
        let mut wire = Cursor::new(Vec::<u8>::new());
        Message::send(&mut wire, 0, 1, b"first").unwrap();
        Message::send(&mut wire, 1, 2, b"").unwrap();
        Message::send(&mut wire, 2, 3, b"third").unwrap();

        wire.set_position(0);
        let m1 = Message::recv(&mut wire).unwrap();
        let m2 = Message::recv(&mut wire).unwrap();
        let m3 = Message::recv(&mut wire).unwrap();

        assert_eq!((m1.command, m1.token, m1.payload.as_ref()), (0, 1, b"first".as_ref()));
        assert_eq!((m2.command, m2.token, m2.payload.as_ref()), (1, 2, b"".as_ref()));
        assert_eq!((m3.command, m3.token, m3.payload.as_ref()), (2, 3, b"third".as_ref()));
    }

    #[test]
    #[cfg(unix)]
    fn roundtrip_over_socket_pair() {
        let (mut left, mut right) = std::os::unix::net::UnixStream::pair().unwrap();

        Message::send(&mut left, 0, 1234567890123, b"loop-back").unwrap();
        let msg = Message::recv(&mut right).unwrap();

        assert_eq!(msg.command, 0);
        assert_eq!(msg.token, 1234567890123);
        assert_eq!(msg.status, 0);
        assert_eq!(msg.payload.as_ref(), b"loop-back");
    }

    #[test]
    #[cfg(unix)]
    fn request_then_reply_over_socket_pair() {
        let (mut client, mut server) = std::os::unix::net::UnixStream::pair().unwrap();

        let responder = std::thread::spawn(move || {
            let req = Message::recv(&mut server).unwrap();
            // Echo semantics: same command and token, payload returned as-is.
            Message::send(&mut server, req.command, req.token, &req.payload).unwrap();
        });

        Message::send(&mut client, 0, 42, b"ping").unwrap();
        let reply = Message::recv(&mut client).unwrap();
        responder.join().unwrap();

        assert_eq!(reply.command, 0);
        assert_eq!(reply.token, 42);
        assert_eq!(reply.status, 0);
        assert_eq!(reply.payload.as_ref(), b"ping");
    }

    #[test]
    #[cfg(unix)]
    fn recv_fails_on_closed_peer() {
        let (left, mut right) = std::os::unix::net::UnixStream::pair().unwrap();
        drop(left);

        let err = Message::recv(&mut right).unwrap_err();
        assert!(matches!(err, WireError::EndOfStream { .. }));
    }
}
