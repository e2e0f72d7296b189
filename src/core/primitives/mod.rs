//! # Primitives Module
//!
//! The two hash primitives the pipeline is built on.
//!
//! ## Concurrency Contract
//! - **Checksum** is pure and safe for unlimited concurrent invocation.
//! - **Digest** is pure but NOT safe for concurrent invocation. Stages
//!   never hold a raw `Digest`; they receive a [`SerializedDigest`]
//!   capability that funnels every call through one shared lock.
//!
//! ## Production Implementations
//! - [`Xxh3Checksum`] - xxh3-64, rendered as a decimal string
//! - [`Sha256Digest`] - SHA-256, rendered as a lowercase hex string

pub mod doubles;
mod serialized;
mod sha;
mod traits;
mod xxh;

pub use serialized::SerializedDigest;
pub use sha::Sha256Digest;
pub use traits::{Checksum, Digest};
pub use xxh::Xxh3Checksum;
