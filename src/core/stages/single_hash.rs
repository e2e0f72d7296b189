//! The single-hash stage.
//!
//! Per item with value `v`, produces the composite signature
//! `checksum(v) + "~" + checksum(digest(v))`. The plain checksum runs
//! on its own thread, concurrently with the digest chain and with
//! every other item's computations; only digest calls are serialized,
//! process-wide, by the injected [`SerializedDigest`].
//!
//! ## Ordering
//! The stage is a barrier: no signature is emitted until every item's
//! computation has finished. Join handles are kept in arrival order
//! and joined in that order, so emission order always equals input
//! order regardless of which sub-computation finishes first.

use crate::core::pipeline::{PipelineStage, StageStats};
use crate::core::primitives::{Checksum, SerializedDigest};
use crate::error::{PipelineError, PrimitiveError};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace};

/// Computes one composite signature per item.
pub struct SingleHashStage {
    checksum: Arc<dyn Checksum>,
    digest: SerializedDigest,
}

impl SingleHashStage {
    const NAME: &'static str = "single-hash";

    pub fn new(checksum: Arc<dyn Checksum>, digest: SerializedDigest) -> Self {
        Self { checksum, digest }
    }

    /// Full computation for one item, run on a dedicated thread.
    fn sign(
        checksum: Arc<dyn Checksum>,
        digest: SerializedDigest,
        value: String,
    ) -> Result<String, PrimitiveError> {
        let plain = {
            let checksum = Arc::clone(&checksum);
            let value = value.clone();
            thread::spawn(move || checksum.checksum(&value))
        };

        let digested = digest.digest(&value)?;
        let chained = checksum.checksum(&digested)?;
        let plain = plain.join().map_err(|_| PrimitiveError::ChecksumFailed {
            reason: "checksum thread panicked".to_string(),
        })??;

        Ok(format!("{plain}~{chained}"))
    }
}

impl PipelineStage for SingleHashStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        output: Sender<String>,
    ) -> Result<StageStats, PipelineError> {
        // One worker per item, pushed in arrival order. The vector
        // index IS the item's sequence tag.
        let mut workers = Vec::new();
        for (tag, value) in input.iter().enumerate() {
            trace!(stage = Self::NAME, tag, "item received");
            let checksum = Arc::clone(&self.checksum);
            let digest = self.digest.clone();
            workers.push(thread::spawn(move || Self::sign(checksum, digest, value)));
        }
        let items_in = workers.len();

        // Barrier: collect every signature before emitting the first
        // one. Joining in tag order restores arrival order.
        let mut signatures = Vec::with_capacity(items_in);
        for worker in workers {
            let signature = worker
                .join()
                .map_err(|_| PipelineError::WorkerPanicked { stage: Self::NAME })?
                .map_err(|source| PipelineError::Stage {
                    stage: Self::NAME,
                    source,
                })?;
            signatures.push(signature);
        }
        debug!(stage = Self::NAME, items = items_in, "barrier released");

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
