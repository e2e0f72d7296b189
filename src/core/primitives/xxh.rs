//! Production checksum backed by xxh3.

use super::traits::Checksum;
use crate::error::PrimitiveError;
use xxhash_rust::xxh3::xxh3_64;

/// xxh3-64 checksum, rendered as a decimal string.
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Checksum;

impl Checksum for Xxh3Checksum {
    fn checksum(&self, value: &str) -> Result<String, PrimitiveError> {
        Ok(xxh3_64(value.as_bytes()).to_string())
    }
}
