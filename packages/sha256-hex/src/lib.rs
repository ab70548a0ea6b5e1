//! # SHA-256 Hex Digest

#![deny(missing_docs, missing_debug_implementations, rustdoc::all, clippy::all)]

/// Type alias for a SHA-256 digest.
pub type Sha256Digest = [u8; 32];

mod error;
pub use error::*;

mod hex_digest;
pub use hex_digest::*;

use sha2::{Digest, Sha256};

/// Calculates the SHA-256 digest of the given slice.
///
/// The slice is borrowed for the duration of the call and is only read,
/// never mutated or retained.
pub fn digest(data: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
