//! Deterministic primitive doubles for tests and examples.
//!
//! The production primitives are opaque hashes, which makes pipeline
//! output hard to assert on. These doubles produce values a test can
//! predict by eye: the checksum of a string is its length and the
//! digest of a string is the string itself.

use super::traits::{Checksum, Digest};
use crate::error::PrimitiveError;
use std::thread;
use std::time::Duration;

/// Checksum double: `checksum(s) = s.len()` as a decimal string.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthChecksum;

impl Checksum for LengthChecksum {
    fn checksum(&self, value: &str) -> Result<String, PrimitiveError> {
        Ok(value.len().to_string())
    }
}

/// Digest double: `digest(s) = s`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityDigest;

impl Digest for IdentityDigest {
    fn digest(&self, value: &str) -> Result<String, PrimitiveError> {
        Ok(value.to_string())
    }
}

/// Checksum double that stalls on chosen inputs.
///
/// Behaves like [`LengthChecksum`], but sleeps for `delay` whenever the
/// input ends with `slow_suffix`. Used to prove that emission order
/// does not depend on which sub-computation finishes first.
#[derive(Debug, Clone)]
pub struct SlowChecksum {
    slow_suffix: String,
    delay: Duration,
}

impl SlowChecksum {
    pub fn new(slow_suffix: impl Into<String>, delay: Duration) -> Self {
        Self {
            slow_suffix: slow_suffix.into(),
            delay,
        }
    }
}

impl Checksum for SlowChecksum {
    fn checksum(&self, value: &str) -> Result<String, PrimitiveError> {
        if value.ends_with(&self.slow_suffix) {
            thread::sleep(self.delay);
        }
        Ok(value.len().to_string())
    }
}

/// Checksum double that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingChecksum;

impl Checksum for FailingChecksum {
    fn checksum(&self, _value: &str) -> Result<String, PrimitiveError> {
        Err(PrimitiveError::ChecksumFailed {
            reason: "injected failure".to_string(),
        })
    }
}

/// Digest double that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingDigest;

impl Digest for FailingDigest {
    fn digest(&self, _value: &str) -> Result<String, PrimitiveError> {
        Err(PrimitiveError::DigestFailed {
            reason: "injected failure".to_string(),
        })
    }
}
