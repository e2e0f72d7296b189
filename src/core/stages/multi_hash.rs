//! The multi-hash stage.
//!
//! Per item with value `v`, spawns [`FANOUT`] concurrent sub-tasks
//! computing `checksum(format!("{th}{v}"))` for `th` in `0..FANOUT`,
//! then concatenates the results in `th` order into one signature.
//!
//! ## Ordering
//! Full barrier: the entire input is consumed (FANOUT x n sub-tasks
//! launched) before anything is emitted. Each item's fan-out group is
//! an ordered vector of join handles - position is the `th` key - and
//! groups themselves sit in arrival order, so reading the structure
//! back is already the (tag, th) traversal the output needs. No sort,
//! no unordered map.

use crate::core::pipeline::{PipelineStage, StageStats};
use crate::core::primitives::Checksum;
use crate::error::PipelineError;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace};

/// Number of prefixed sub-checksums per item.
pub const FANOUT: usize = 6;

/// Computes one concatenated multi-signature per item.
pub struct MultiHashStage {
    checksum: Arc<dyn Checksum>,
}

impl MultiHashStage {
    const NAME: &'static str = "multi-hash";

    pub fn new(checksum: Arc<dyn Checksum>) -> Self {
        Self { checksum }
    }
}

impl PipelineStage for MultiHashStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        output: Sender<String>,
    ) -> Result<StageStats, PipelineError> {
        // groups[tag][th] is the sub-task computing checksum(th + value).
        let mut groups = Vec::new();
        for (tag, value) in input.iter().enumerate() {
            trace!(stage = Self::NAME, tag, "item received");
            let group: Vec<_> = (0..FANOUT)
                .map(|th| {
                    let checksum = Arc::clone(&self.checksum);
                    let value = value.clone();
                    thread::spawn(move || checksum.checksum(&format!("{th}{value}")))
                })
                .collect();
            groups.push(group);
        }
        let items_in = groups.len();

        // Barrier: every sub-signature must exist before the first
        // emission.
        let mut signatures = Vec::with_capacity(items_in);
        for group in groups {
            let mut signature = String::new();
            for worker in group {
                let part = worker
                    .join()
                    .map_err(|_| PipelineError::WorkerPanicked { stage: Self::NAME })?
                    .map_err(|source| PipelineError::Stage {
                        stage: Self::NAME,
                        source,
                    })?;
                signature.push_str(&part);
            }
            signatures.push(signature);
        }
        debug!(
            stage = Self::NAME,
            items = items_in,
            sub_tasks = items_in * FANOUT,
            "barrier released"
        );

        for signature in signatures {
            output
                .send(signature)
                .map_err(|_| PipelineError::Disconnected { stage: Self::NAME })?;
        }

        Ok(StageStats {
            items_in,
            items_out: items_in,
        })
    }
}
