use std::fmt;
use std::io;

/// Failures starting the TUIO client.
///
/// Malformed datagrams never surface here; the receive loop logs and skips
/// them.
#[derive(Debug)]
pub enum TuioError {
    /// The UDP socket could not be bound or configured.
    Bind(io::Error),
    AlreadyConnected,
    /// The receive thread could not be started.
    Spawn(io::Error),
}

impl fmt::Display for TuioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuioError::Bind(err) => write!(f, "failed to bind TUIO socket: {err}"),
            TuioError::AlreadyConnected => write!(f, "TUIO client is already connected"),
            TuioError::Spawn(err) => write!(f, "failed to start TUIO receive thread: {err}"),
        }
    }
}

impl std::error::Error for TuioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuioError::Bind(err) | TuioError::Spawn(err) => Some(err),
            TuioError::AlreadyConnected => None,
        }
    }
}
