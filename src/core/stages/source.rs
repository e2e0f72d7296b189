//! Boundary stages: the source that feeds the chain and the sink that
//! captures its result.

use crate::core::pipeline::{PipelineStage, StageStats};
use crate::error::PipelineError;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Emits a known finite sequence of values.
///
/// Sits at the head of the chain; its input channel is pre-closed by
/// the executor and carries nothing.
pub struct ValueSource {
    values: Vec<String>,
}

impl ValueSource {
    const NAME: &'static str = "value-source";

    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl PipelineStage for ValueSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        output: Sender<String>,
    ) -> Result<StageStats, PipelineError> {
        drop(input);

        let items_out = self.values.len();
        for value in self.values {
            output
                .send(value)
                .map_err(|_| PipelineError::Disconnected { stage: Self::NAME })?;
        }
        Ok(StageStats {
            items_in: 0,
            items_out,
        })
    }
}

/// Captures every item it reads and hands them to the caller over a
/// side channel.
///
/// Sits at the tail of the chain and writes nothing downstream. The
/// side channel is unbounded so a slow caller can never stall the
/// pipeline, and capture failures are ignored: a caller that dropped
/// the receiver has opted out of the result.
pub struct CollectSink {
    captured: Sender<String>,
}

impl CollectSink {
    const NAME: &'static str = "collect-sink";

    /// Create a sink plus the receiver its captures arrive on.
    pub fn new() -> (Self, Receiver<String>) {
        let (captured, results) = unbounded();
        (Self { captured }, results)
    }
}

impl PipelineStage for CollectSink {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        self: Box<Self>,
        input: Receiver<String>,
        _output: Sender<String>,
    ) -> Result<StageStats, PipelineError> {
        let mut items_in = 0;
        for item in input.iter() {
            items_in += 1;
            let _ = self.captured.send(item);
        }
        Ok(StageStats {
            items_in,
            items_out: 0,
        })
    }
}
