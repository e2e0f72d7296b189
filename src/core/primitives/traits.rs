//! Trait definitions for the hash primitives.

use crate::error::PrimitiveError;

/// A fast, non-cryptographic checksum.
///
/// Implementations must be pure (same input, same output) and safe to
/// call from any number of threads at once.
pub trait Checksum: Send + Sync {
    /// Compute the checksum of a value, rendered as a string.
    fn checksum(&self, value: &str) -> Result<String, PrimitiveError>;
}

/// A cryptographic digest.
///
/// Implementations must be pure, but are NOT assumed to be safe for
/// concurrent invocation. Callers must serialize access; inside the
/// pipeline that is the job of
/// [`SerializedDigest`](super::SerializedDigest), which is the only
/// digest handle the stages ever see.
pub trait Digest: Send + Sync {
    /// Compute the digest of a value, rendered as a string.
    fn digest(&self, value: &str) -> Result<String, PrimitiveError>;
}
