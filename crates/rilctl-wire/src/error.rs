/// Errors that can occur while exchanging control messages.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The peer closed the stream before the expected bytes arrived.
    #[error("stream ended after {got} of {expected} expected bytes")]
    EndOfStream { expected: usize, got: usize },

    /// Bytes arrived intact but do not decode into a well-formed header.
    #[error("malformed frame: {detail}")]
    MalformedFrame { detail: String },

    /// The payload exceeds what the header's length field can describe.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred on the underlying stream.
    #[error("wire I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WireError>;
