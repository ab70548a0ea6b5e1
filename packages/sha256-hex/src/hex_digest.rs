use crate::{digest, DigestError, DigestResult, Sha256Digest};

/// Length in bytes of a SHA-256 digest.
pub const SHA256_DIGEST_LEN: usize = 32;

/// Length in characters of a hex-encoded SHA-256 digest.
pub const HEX_DIGEST_LEN: usize = SHA256_DIGEST_LEN * 2;

/// Calculates the SHA-256 digest of the given buffer and renders it as a
/// 64-character lowercase hexadecimal string.
///
/// `None` represents an absent buffer argument at the host boundary and is
/// rejected with [`DigestError::InvalidInput`]. Otherwise the buffer may be
/// of any length, including empty, and is treated as opaque binary data.
///
/// The result is deterministic for a fixed input and carries no state
/// between calls, so this function may be called concurrently from any
/// number of threads on independent buffers.
pub fn hex_digest(bytes: Option<&[u8]>) -> DigestResult<String> {
    let bytes = bytes.ok_or(DigestError::InvalidInput)?;

    encode_hex(&digest(bytes))
}

/// Renders a SHA-256 digest as a 64-character lowercase hexadecimal string,
/// most significant byte first, with each byte rendered as exactly two hex
/// digits.
///
/// Fails with [`DigestError::ResourceExhausted`] when memory for the output
/// string cannot be allocated; no truncated or partially written string is
/// ever returned.
pub fn encode_hex(digest: &Sha256Digest) -> DigestResult<String> {
    let mut hex = [0u8; HEX_DIGEST_LEN];
    hex::encode_to_slice(digest, &mut hex)
        .expect("output buffer holds exactly two characters per digest byte");

    let mut rendered = String::new();
    rendered
        .try_reserve_exact(HEX_DIGEST_LEN)
        .map_err(|_| DigestError::ResourceExhausted)?;
    rendered.push_str(std::str::from_utf8(&hex).expect("hex digits are ASCII"));

    Ok(rendered)
}
