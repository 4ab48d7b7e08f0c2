//! Device identity reporting.

use serde::{Deserialize, Serialize};

/// Name and version of the app running on the device.
///
/// The device reports its identity as two 4-byte ASCII tags followed by a
/// 32-bit little-endian version number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// First 4-byte name tag (e.g., the platform name).
    pub name0: String,
    /// Second 4-byte name tag (e.g., the app name).
    pub name1: String,
    /// App version number.
    pub version: u32,
}

impl DeviceIdentity {
    /// Number of identity bytes in a get-identity response payload.
    pub(crate) const PACKED_LEN: usize = 12;

    /// Unpack an identity from the first 12 payload bytes of a
    /// get-identity response. Returns `None` if `raw` is too short.
    pub fn unpack(raw: &[u8]) -> Option<Self> {
        if raw.len() < Self::PACKED_LEN {
            return None;
        }
        Some(Self {
            name0: unpack_tag(&raw[0..4]),
            name1: unpack_tag(&raw[4..8]),
            version: u32::from_le_bytes([raw[8], raw[9], raw[10], raw[11]]),
        })
    }
}

impl std::fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} v{}", self.name0, self.name1, self.version)
    }
}

/// Decode a 4-byte name tag, dropping NUL padding.
fn unpack_tag(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches('\0')
        .to_string()
}
