//! The stage contract.

use crate::error::PipelineError;
use crossbeam_channel::{Receiver, Sender};

/// A unit of the pipeline: consumes one item stream, produces another.
///
/// `run` must read `input` to exhaustion before returning. The stage
/// owns `output` for the duration of the call; the channel closes when
/// the last `Sender` is dropped, which the worker guarantees happens
/// exactly once, after `run` returns. A stage therefore cannot write
/// after close or forget to close - both are ruled out by ownership.
pub trait PipelineStage: Send {
    /// Stable stage name, used in logs, events and errors.
    fn name(&self) -> &'static str;

    /// Drain `input`, write zero or more items to `output`, and report
    /// how many items passed through.
    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        output: Sender<String>,
    ) -> Result<StageStats, PipelineError>;
}

/// Item counts reported by a completed stage.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct StageStats {
    /// Items read from the input channel
    pub items_in: usize,
    /// Items written to the output channel
    pub items_out: usize,
}
