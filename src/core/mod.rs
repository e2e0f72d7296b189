//! # Core Module
//!
//! The UI-agnostic pipeline engine.
//!
//! ## Modules
//! - `primitives` - hash primitives and the serialized-digest capability
//! - `pipeline` - the stage contract and the concurrent executor
//! - `stages` - the concrete signing stages

pub mod pipeline;
pub mod primitives;
pub mod stages;

// Re-export commonly used types
pub use pipeline::{Pipeline, PipelineBuilder, PipelineReport, PipelineStage, BUFFER_CAPACITY};
pub use primitives::{Checksum, Digest, SerializedDigest, Sha256Digest, Xxh3Checksum};
pub use stages::{CollectSink, CombineStage, MultiHashStage, SingleHashStage, ValueSource};
