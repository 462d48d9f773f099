use std::net::TcpStream;

use tracing::debug;

use rilctl_wire::{Message, Result};

/// One control-channel connection to a simulation server.
///
/// Owns the socket for its whole lifetime; the wire layer never closes or
/// reopens it. Exchanges are strictly serial: send one request, then block
/// for its response on the same socket.
pub struct Control {
    stream: TcpStream,
}

impl Control {
    /// Connect to the simulator's control port.
    ///
    /// With a device-hosted simulator the port is usually forwarded first,
    /// e.g. `adb forward tcp:11111 tcp:54312`.
    pub fn connect(host: &str, port: u16) -> std::io::Result<Self> {
        let stream = TcpStream::connect((host, port))?;
        debug!(host, port, "connected to control channel");
        Ok(Self { stream })
    }

    /// Send one request and block for its response.
    pub fn roundtrip(&mut self, command: u32, token: u64, payload: &[u8]) -> Result<Message> {
        debug!(command, token, payload_len = payload.len(), "sending request");
        Message::send(&mut self.stream, command, token, payload)?;

        let response = Message::recv(&mut self.stream)?;
        debug!(
            command = response.command,
            token = response.token,
            status = response.status,
            payload_len = response.payload.len(),
            "received response"
        );
        Ok(response)
    }
}
