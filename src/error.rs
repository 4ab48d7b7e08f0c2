use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by the signer protocol layer.
///
/// Every variant carries the name of the failing command or workflow step so
/// callers can tell which part of a multi-command sequence went wrong. No
/// error is retried internally; the device may be left with a partially
/// executed workflow (query [`is_key_loaded`](crate::Signer::is_key_loaded)
/// or restart the workflow to recover).
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed while executing the named command.
    #[error("Transport error during {op}: {source}")]
    Transport {
        op: &'static str,
        #[source]
        source: TransportError,
    },

    /// The device answered the named command with a non-success status byte.
    #[error("Command {name} rejected by device")]
    CommandFailed { name: &'static str },

    /// Chunk bookkeeping transmitted or copied a different number of bytes
    /// than the declared logical length. This indicates a bug in chunk-size
    /// accounting, not a device fault.
    #[error("Length mismatch in {name}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The message to sign exceeds the device's maximum.
    #[error("Message of {size} bytes exceeds maximum sign size of {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// Key material is neither PEM text nor a device-encrypted blob of the
    /// expected size.
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a transport failure with the name of the command in flight.
    pub(crate) fn transport(op: &'static str, source: TransportError) -> Self {
        Error::Transport { op, source }
    }
}
