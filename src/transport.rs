//! Seam between the protocol layer and the framing/serial library.
//!
//! The signer protocol never touches a serial port directly. It drives an
//! implementation of [`Transport`], which is responsible for turning a
//! [`CommandDescriptor`] into an addressed, checksummed wire frame, moving
//! bytes over the physical channel, and validating incoming frames.
//!
//! Frame layout as seen by this crate:
//!
//! ```text
//! byte 0        frame header (addressing + length class, transport's concern)
//! byte 1        command / response opcode
//! bytes 2..     payload region (zero-initialized on build)
//! ```
//!
//! A frame for a descriptor of class `L128` is therefore 129 bytes long and
//! carries up to 127 payload bytes.

use std::time::Duration;

use thiserror::Error;

use crate::proto::CommandDescriptor;

/// Status byte the device places at payload offset 0 of a response frame to
/// signal success.
pub const STATUS_OK: u8 = 0;

/// Offset of the first payload byte in a frame buffer (after the frame
/// header and the opcode slot).
pub const PAYLOAD_OFFSET: usize = 2;

/// Errors produced by a [`Transport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read timed out")]
    Timeout,

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Device reported protocol error")]
    DeviceError,
}

/// A synchronous connection to the device.
///
/// Implementations own the physical channel (serial port, USB CDC, an
/// in-memory mock) and perform all framing and checksum work. The protocol
/// layer holds exactly one transport, issues one write followed by one or
/// more blocking reads per operation, and never retains frame buffers
/// between calls.
pub trait Transport {
    /// Build an empty, addressed frame for `cmd`: frame header at byte 0,
    /// opcode at byte 1, payload region zeroed.
    fn build_frame(&self, cmd: &CommandDescriptor) -> Result<Vec<u8>, TransportError>;

    /// Write one complete frame to the device.
    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Block until one frame matching `rsp` arrives and return it,
    /// including its header and opcode bytes.
    fn read_frame(&mut self, rsp: &CommandDescriptor) -> Result<Vec<u8>, TransportError>;

    /// Bound subsequent reads by `timeout`, or restore indefinite blocking
    /// with `None`.
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError>;
}

/// Log a frame at debug level, in the direction-tagged hex format used
/// throughout this crate.
pub(crate) fn dump(label: &str, frame: &[u8]) {
    log::debug!("{}: {}", label, hex::encode(frame));
}
