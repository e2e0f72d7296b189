//! Pipeline execution implementation.

use super::stage::{PipelineStage, StageStats};
use crate::error::PipelineError;
use crate::events::{Event, EventSender, PipelineEvent, PipelineSummary, StageEvent};
use crossbeam_channel::bounded;
use serde::Serialize;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Capacity of the channel between any two stages.
///
/// The ceiling is externally imposed: the pipeline is never fed more
/// than this many in-flight items between stages, so a full channel
/// blocks the writer (backpressure) rather than erroring.
pub const BUFFER_CAPACITY: usize = 100;

/// Builder for a pipeline
pub struct PipelineBuilder {
    stages: Vec<Box<dyn PipelineStage>>,
}

impl PipelineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain
    pub fn stage(mut self, stage: impl PipelineStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered chain of stages connected by bounded channels
pub struct Pipeline {
    stages: Vec<Box<dyn PipelineStage>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Number of stages in the chain
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the pipeline without progress reporting
    pub fn run(self) -> Result<PipelineReport, PipelineError> {
        self.run_with_events(&crate::events::null_sender())
    }

    /// Run the pipeline, publishing lifecycle events.
    ///
    /// Synchronous: returns only after every stage worker has finished.
    pub fn run_with_events(self, events: &EventSender) -> Result<PipelineReport, PipelineError> {
        let start = Instant::now();
        let stage_count = self.stages.len();

        events.send(Event::Pipeline(PipelineEvent::Started));
        info!(stages = stage_count, "pipeline started");

        let (stage_reports, mut failures) = thread::scope(|scope| {
            let (source_feed, mut upstream) = bounded::<String>(BUFFER_CAPACITY);
            // The first stage starts with an already-exhausted input.
            drop(source_feed);

            let mut workers = Vec::with_capacity(stage_count);
            for stage in self.stages {
                let name = stage.name();
                let (sender, receiver) = bounded::<String>(BUFFER_CAPACITY);
                let input = std::mem::replace(&mut upstream, receiver);
                let events = events.clone();

                let handle = scope.spawn(move || {
                    events.send(Event::Stage(StageEvent::Started {
                        name: name.to_string(),
                    }));
                    debug!(stage = name, "worker started");

                    // The worker owns `sender`; it is dropped when `run`
                    // returns, closing the downstream channel exactly once.
                    let result = stage.run(input, sender);

                    if let Ok(stats) = &result {
                        debug!(
                            stage = name,
                            items_in = stats.items_in,
                            items_out = stats.items_out,
                            "worker finished"
                        );
                        events.send(Event::Stage(StageEvent::Completed {
                            name: name.to_string(),
                            items_in: stats.items_in,
                            items_out: stats.items_out,
                        }));
                    }
                    result
                });
                workers.push((name, handle));
            }
            // Nothing consumes the terminal stage's output.
            drop(upstream);

            let mut reports = Vec::with_capacity(stage_count);
            let mut failures = Vec::new();
            for (name, handle) in workers {
                match handle.join() {
                    Ok(Ok(stats)) => reports.push(StageReport::new(name, stats)),
                    Ok(Err(error)) => failures.push(error),
                    Err(_) => failures.push(PipelineError::WorkerPanicked { stage: name }),
                }
            }
            (reports, failures)
        });

        if !failures.is_empty() {
            // Disconnected errors are knock-on effects of whichever stage
            // actually failed; report the root cause when one exists.
            let root = failures
                .iter()
                .position(|error| !matches!(error, PipelineError::Disconnected { .. }))
                .unwrap_or(0);
            let error = failures.swap_remove(root);
            warn!(error = %error, "pipeline aborted");
            events.send(Event::Pipeline(PipelineEvent::Error {
                message: error.to_string(),
            }));
            return Err(error);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(duration_ms, "pipeline completed");
        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                stages: stage_count,
                duration_ms,
            },
        }));

        Ok(PipelineReport {
            stages: stage_reports,
            duration_ms,
        })
    }
}

/// Per-stage item counts from a successful run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageReport {
    /// Stage name
    pub name: &'static str,
    /// Items read from the stage's input channel
    pub items_in: usize,
    /// Items written to the stage's output channel
    pub items_out: usize,
}

impl StageReport {
    fn new(name: &'static str, stats: StageStats) -> Self {
        Self {
            name,
            items_in: stats.items_in,
            items_out: stats.items_out,
        }
    }
}

/// Result of a successful pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// One report per stage, in chain order
    pub stages: Vec<StageReport>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}
