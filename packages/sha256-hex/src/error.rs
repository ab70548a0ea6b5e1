//! Error types for digest computation failure scenarios

/// Convenience type that represents the Result of computing a digest
pub type DigestResult<T = ()> = Result<T, DigestError>;

/// The primary container for digest computation errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// The caller did not supply a usable byte sequence
    #[error("no input buffer was supplied")]
    InvalidInput,

    /// Working memory for the digest output could not be allocated
    #[error("failed to allocate memory for the digest output")]
    ResourceExhausted,
}
