//! Production digest backed by SHA-256.

use super::traits::Digest;
use crate::error::PrimitiveError;
use sha2::{Digest as _, Sha256};

/// SHA-256 digest, rendered as a lowercase hex string.
///
/// SHA-256 itself is reentrant, but the pipeline treats every digest as
/// an opaque non-reentrant primitive and routes all calls through
/// [`SerializedDigest`](super::SerializedDigest) anyway.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digest;

impl Digest for Sha256Digest {
    fn digest(&self, value: &str) -> Result<String, PrimitiveError> {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let hash = hasher.finalize();
        Ok(hash.iter().map(|b| format!("{:02x}", b)).collect())
    }
}
