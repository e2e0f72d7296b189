//! # Pipeline Module
//!
//! The staged concurrent pipeline engine.
//!
//! ## Model
//! A pipeline is an ordered list of stages connected by bounded
//! channels ([`BUFFER_CAPACITY`] items each). The executor runs one
//! worker thread per stage. Each worker drains its input channel to
//! exhaustion, then closes its output channel exactly once by dropping
//! the `Sender` it owns - that drop is what lets the next worker
//! observe end-of-input. The executor blocks until every worker has
//! finished.
//!
//! ## Failure Semantics
//! All-or-nothing: any stage error aborts the run. Siblings shut down
//! cooperatively because a failed stage drops both of its channel
//! endpoints - downstream workers see end-of-input, upstream workers
//! see a disconnected send.

mod executor;
mod stage;

pub use executor::{Pipeline, PipelineBuilder, PipelineReport, StageReport, BUFFER_CAPACITY};
pub use stage::{PipelineStage, StageStats};
