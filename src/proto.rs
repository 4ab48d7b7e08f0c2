//! Static registry of device commands and responses.
//!
//! Every logical operation the signer app understands is described by a
//! [`CommandDescriptor`]: a wire opcode, a human-readable name (used in
//! error reporting and frame dumps), and the frame length class the
//! transport must use for it. The table is fixed at compile time and is the
//! single source of truth for opcodes and frame sizes.

/// Frame length classes supported by the device protocol.
///
/// The value is the length of the command area in bytes, including the
/// 1-byte opcode slot. A full wire frame additionally carries a 1-byte
/// frame header in front of the command area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLen {
    /// 1-byte command area: opcode only.
    L1,
    /// 4-byte command area: opcode plus a status or boolean byte.
    L4,
    /// 32-byte command area: opcode plus short parameters.
    L32,
    /// 128-byte command area: opcode plus a 127-byte payload region.
    L128,
}

impl FrameLen {
    /// Length of the command area in bytes (opcode slot included).
    pub fn byte_len(self) -> usize {
        match self {
            FrameLen::L1 => 1,
            FrameLen::L4 => 4,
            FrameLen::L32 => 32,
            FrameLen::L128 => 128,
        }
    }

    /// Usable payload bytes after the opcode slot.
    pub fn payload_len(self) -> usize {
        self.byte_len() - 1
    }
}

/// Immutable description of one logical command or response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub opcode: u8,
    pub name: &'static str,
    pub frame_len: FrameLen,
}

impl CommandDescriptor {
    const fn new(opcode: u8, name: &'static str, frame_len: FrameLen) -> Self {
        Self {
            opcode,
            name,
            frame_len,
        }
    }
}

impl std::fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const CMD_GET_PUBKEY: CommandDescriptor =
    CommandDescriptor::new(0x01, "get-public-key", FrameLen::L1);
pub const RSP_GET_PUBKEY: CommandDescriptor =
    CommandDescriptor::new(0x02, "get-public-key response", FrameLen::L128);
pub const CMD_SET_SIZE: CommandDescriptor =
    CommandDescriptor::new(0x03, "set-payload-size", FrameLen::L32);
pub const RSP_SET_SIZE: CommandDescriptor =
    CommandDescriptor::new(0x04, "set-payload-size response", FrameLen::L4);
pub const CMD_SIGN_DATA: CommandDescriptor =
    CommandDescriptor::new(0x05, "sign-data-chunk", FrameLen::L128);
pub const RSP_SIGN_DATA: CommandDescriptor =
    CommandDescriptor::new(0x06, "sign-data-chunk response", FrameLen::L4);
pub const CMD_GET_SIG: CommandDescriptor =
    CommandDescriptor::new(0x07, "get-signature", FrameLen::L1);
pub const RSP_GET_SIG: CommandDescriptor =
    CommandDescriptor::new(0x08, "get-signature response", FrameLen::L128);
pub const CMD_GET_IDENTITY: CommandDescriptor =
    CommandDescriptor::new(0x09, "get-identity", FrameLen::L1);
pub const RSP_GET_IDENTITY: CommandDescriptor =
    CommandDescriptor::new(0x0a, "get-identity response", FrameLen::L32);
pub const CMD_GET_FIRMWARE_HASH: CommandDescriptor =
    CommandDescriptor::new(0x0b, "get-firmware-hash", FrameLen::L32);
pub const RSP_GET_FIRMWARE_HASH: CommandDescriptor =
    CommandDescriptor::new(0x0c, "get-firmware-hash response", FrameLen::L128);
pub const CMD_LOAD_KEY: CommandDescriptor =
    CommandDescriptor::new(0x0d, "load-key-chunk", FrameLen::L128);
pub const CMD_ENCRYPT_KEY: CommandDescriptor =
    CommandDescriptor::new(0x0e, "encrypt-key", FrameLen::L1);
pub const RSP_ENCRYPT_KEY: CommandDescriptor =
    CommandDescriptor::new(0x0f, "encrypt-key response", FrameLen::L128);
pub const CMD_LOAD_ENC_KEY: CommandDescriptor =
    CommandDescriptor::new(0x10, "load-encrypted-key-chunk", FrameLen::L128);
pub const CMD_IS_KEY_LOADED: CommandDescriptor =
    CommandDescriptor::new(0x11, "is-key-loaded", FrameLen::L1);
pub const RSP_IS_KEY_LOADED: CommandDescriptor =
    CommandDescriptor::new(0x12, "is-key-loaded response", FrameLen::L4);
pub const CMD_DECRYPT_KEY: CommandDescriptor =
    CommandDescriptor::new(0x13, "decrypt-key", FrameLen::L1);
pub const RSP_DECRYPT_KEY: CommandDescriptor =
    CommandDescriptor::new(0x14, "decrypt-key response", FrameLen::L4);
pub const CMD_PARSE_KEY: CommandDescriptor =
    CommandDescriptor::new(0x15, "parse-key", FrameLen::L1);
pub const RSP_PARSE_KEY: CommandDescriptor =
    CommandDescriptor::new(0x16, "parse-key response", FrameLen::L4);

/// Maximum size in bytes of a message the device will sign.
pub const MAX_SIGN_SIZE: usize = 4096;

/// Payload bytes carried per chunk: a 128-byte command area minus the
/// opcode slot.
pub const CHUNK_SIZE: usize = 127;

/// Size of an RSA key blob (plain or device-encrypted).
pub const KEY_BLOB_SIZE: usize = 1676;

/// Size of the device's RSA public key.
pub const PUBLIC_KEY_SIZE: usize = 256;

/// Size of an RSA signature produced by the device.
pub const SIGNATURE_SIZE: usize = 256;

/// Size of the SHA-512 firmware digest returned by the device.
pub const FIRMWARE_DIGEST_SIZE: usize = 64;
