//! # Events Module
//!
//! Progress reporting for the pipeline, decoupled from any UI.
//!
//! The executor publishes lifecycle events over a crossbeam channel;
//! the CLI (or any other frontend) subscribes on a separate thread.
//! Reporting is optional: events sent after the receiver is dropped
//! are silently discarded.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

/// All events emitted by a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Run-level events
    Pipeline(PipelineEvent),
    /// Per-stage lifecycle events
    Stage(StageEvent),
}

/// Run-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// The run has started
    Started,
    /// The run completed successfully
    Completed { summary: PipelineSummary },
    /// The run aborted with a fatal error
    Error { message: String },
}

/// Per-stage lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageEvent {
    /// A stage worker began consuming its input
    Started { name: String },
    /// A stage worker drained its input and closed its output
    Completed {
        name: String,
        items_in: usize,
        items_out: usize,
    },
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Number of stages executed
    pub stages: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Sends events from the pipeline to a subscriber.
#[derive(Clone)]
pub struct EventSender {
    inner: Sender<Event>,
}

impl EventSender {
    /// Send an event, discarding it if nobody is listening.
    pub fn send(&self, event: Event) {
        let _ = self.inner.send(event);
    }
}

/// Receives events from a pipeline run.
pub struct EventReceiver {
    inner: Receiver<Event>,
}

impl EventReceiver {
    /// Block until the next event, or `None` once all senders are gone.
    pub fn recv(&self) -> Option<Event> {
        self.inner.recv().ok()
    }

    /// Receive an event without blocking.
    pub fn try_recv(&self) -> Option<Event> {
        self.inner.try_recv().ok()
    }

    /// Iterate over events until all senders are dropped.
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.inner.iter()
    }
}

/// Create a new event channel.
///
/// Events are small and infrequent, so the channel is unbounded; the
/// pipeline never blocks on a slow subscriber.
pub fn channel() -> (EventSender, EventReceiver) {
    let (sender, receiver) = unbounded();
    (
        EventSender { inner: sender },
        EventReceiver { inner: receiver },
    )
}

/// A no-op sender for runs that don't need progress reporting.
pub fn null_sender() -> EventSender {
    let (sender, _receiver) = channel();
    sender
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn events_cross_threads() {
        let (sender, receiver) = channel();

        let handle = thread::spawn(move || {
            sender.send(Event::Stage(StageEvent::Completed {
                name: "single-hash".to_string(),
                items_in: 7,
                items_out: 7,
            }));
        });
        handle.join().unwrap();

        match receiver.recv().unwrap() {
            Event::Stage(StageEvent::Completed { items_out, .. }) => {
                assert_eq!(items_out, 7);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn null_sender_discards_events() {
        let sender = null_sender();
        sender.send(Event::Pipeline(PipelineEvent::Started));
    }

    #[test]
    fn events_are_serializable() {
        let event = Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                stages: 5,
                duration_ms: 12,
            },
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Pipeline(PipelineEvent::Completed { summary }) => {
                assert_eq!(summary.stages, 5);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
