use std::io;

use thiserror::Error;

/// Everything that can go wrong while answering a single request. A failed
/// request never takes down the listener.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request ended before a complete graph could be read")]
    TruncatedRequest,
    #[error("vertex id 0 is reserved and not valid on the wire")]
    ZeroVertex,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RequestError {
    /// A short read means the producer sent a truncated request, every other
    /// read failure stays an I/O error.
    pub fn from_read(error: io::Error) -> RequestError {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            return RequestError::TruncatedRequest;
        }

        RequestError::Io(error)
    }
}
