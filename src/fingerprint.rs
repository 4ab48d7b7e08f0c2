//! Public key fingerprints.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 fingerprint of a raw public key, as a hexadecimal
/// string prefixed with `sha256:`. Useful for pinning and display; the
/// device itself never consumes fingerprints.
pub fn key_fingerprint(public_key: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(public_key);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
