//! The combine stage.
//!
//! Full barrier: collects every upstream signature, sorts them
//! lexicographically and joins them with `_` into the single combined
//! result. Sorting before joining makes the output independent of
//! arrival order.
//!
//! An empty input produces no output at all. A failed upstream stage
//! closes its output channel just like an exhausted one, so emitting
//! on zero inputs would hand the caller a combined result for a run
//! that aborted.

use crate::core::pipeline::{PipelineStage, StageStats};
use crate::error::PipelineError;
use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

/// Reduces all signatures to one combined string.
#[derive(Debug, Default)]
pub struct CombineStage;

impl CombineStage {
    const NAME: &'static str = "combine";

    pub fn new() -> Self {
        Self
    }
}

impl PipelineStage for CombineStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        output: Sender<String>,
    ) -> Result<StageStats, PipelineError> {
        let mut signatures: Vec<String> = input.iter().collect();
        let items_in = signatures.len();
        signatures.sort();
        debug!(stage = Self::NAME, items = items_in, "signatures collected");

        if items_in == 0 {
            return Ok(StageStats {
                items_in: 0,
                items_out: 0,
            });
        }

        output
            .send(signatures.join("_"))
            .map_err(|_| PipelineError::Disconnected { stage: Self::NAME })?;

        Ok(StageStats {
            items_in,
            items_out: 1,
        })
    }
}
