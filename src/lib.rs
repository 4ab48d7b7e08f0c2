//! # hsm-signer
//!
//! Client for the RSA signer app running on a USB hardware security
//! module. The private key never leaves the device: keys are loaded,
//! encrypted, and parsed on-device, and signing happens there too. This
//! crate implements the command/response protocol on top of a caller
//! supplied [`Transport`] — the framing, checksumming, and serial I/O live
//! in the transport implementation, not here.
//!
//! ## Usage
//!
//! Pass an established connection and drive the workflows:
//!
//! ```ignore
//! let transport = my_serial_transport::connect(port)?;
//! let mut signer = hsm_signer::Signer::new(transport);
//!
//! let identity = signer.get_identity()?;
//! println!("device app: {}", identity);
//!
//! let pubkey = signer.get_public_key()?;
//! let signature = signer.sign(message)?;
//! ```
//!
//! Key material comes from a key file that is either PEM text or a blob
//! the device encrypted earlier:
//!
//! ```ignore
//! hsm_signer::keyfile::load_key_file(&mut signer, Path::new("id_rsa"))?;
//! assert!(signer.is_key_loaded()?);
//! ```
//!
//! ## Protocol shape
//!
//! The device speaks fixed-size frames carrying at most 127 payload bytes,
//! so larger payloads (messages to sign, key blobs, public keys,
//! signatures) move as chunked transfers with per-chunk acknowledgement;
//! see [`chunk`]. Multi-step workflows (sign, load-key) abort on the first
//! failing step and report which command failed; see [`Signer`].

pub mod chunk;
pub mod error;
pub mod fingerprint;
pub mod identity;
pub mod key;
pub mod keyfile;
pub mod proto;
pub mod signer;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;
pub use identity::DeviceIdentity;
pub use key::KeySource;
pub use proto::{
    CommandDescriptor, FrameLen, FIRMWARE_DIGEST_SIZE, KEY_BLOB_SIZE, MAX_SIGN_SIZE,
    PUBLIC_KEY_SIZE, SIGNATURE_SIZE,
};
pub use signer::Signer;
pub use transport::{Transport, TransportError, STATUS_OK};
