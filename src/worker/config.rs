use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::worker::logger::{Logger, TracingLogger};

/// Configuration for the SQS polling worker.
///
/// Immutable for the duration of one poll cycle; all per-message tasks of a
/// batch share one instance without locking.
///
/// # Fields
/// - `queue_url`: The URL of the queue to poll.
/// - `max_number_of_messages`: The maximum batch size per receive. Amazon SQS
///   never returns more messages than this value; valid values are 1 to 10.
/// - `wait_time_seconds`: The duration for which the receive call waits for a
///   message to arrive before returning. If a message is available, the call
///   returns sooner.
/// - `logger`: Sink for the worker's debug/info/error entries. Must tolerate
///   concurrent calls.
/// - `invalid_event_action`: What to do with messages the handler classifies
///   as permanently unprocessable.
/// - `receive_retry`: Policy applied between failed receive attempts.
#[derive(Clone)]
pub struct Config {
    /// The URL of the queue to poll.
    pub queue_url: String,

    /// The maximum number of messages to receive in a single request (1–10).
    pub max_number_of_messages: i32,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,

    /// The logger all worker tasks write to.
    pub logger: Arc<dyn Logger>,

    /// Disposition of invalid-event messages.
    pub invalid_event_action: InvalidEventAction,

    /// Retry policy applied after each failed receive.
    pub receive_retry: Arc<dyn RetryPolicy>,
}

impl Config {
    /// Builds a configuration for the given queue URL with the documented
    /// defaults: batches of 10, 20 second long poll, tracing-backed logger,
    /// invalid events deleted, receives retried immediately.
    pub fn for_queue_url(queue_url: impl Into<String>) -> Self {
        Config {
            queue_url: queue_url.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    /// Returns a fresh default configuration with an empty queue URL.
    ///
    /// An empty queue URL fails at the queue client, so this is a last-resort
    /// fallback rather than something to run against a real queue.
    fn default() -> Self {
        Config {
            queue_url: String::new(),
            max_number_of_messages: 10,
            wait_time_seconds: 20,
            logger: Arc::new(TracingLogger),
            invalid_event_action: InvalidEventAction::Delete,
            receive_retry: Arc::new(NoBackoff),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("queue_url", &self.queue_url)
            .field("max_number_of_messages", &self.max_number_of_messages)
            .field("wait_time_seconds", &self.wait_time_seconds)
            .field("invalid_event_action", &self.invalid_event_action)
            .finish_non_exhaustive()
    }
}

/// Disposition of a message the handler rejected as an invalid event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidEventAction {
    /// Delete the message. An invalid event never becomes valid on
    /// redelivery, so leaving it in the queue would loop forever.
    #[default]
    Delete,

    /// Leave the message in the queue. It reappears after the visibility
    /// timeout; pair this with a redrive policy that moves repeat offenders
    /// to a dead-letter queue.
    Retain,
}

/// Policy applied between failed receive attempts.
///
/// The worker retries receives forever; this seam only controls how long it
/// waits before the next attempt, and exists so the retry behavior is
/// testable without real time delays.
#[async_trait]
pub trait RetryPolicy: Send + Sync {
    /// Called after a failed receive, before the next attempt.
    ///
    /// `attempt` counts consecutive failures starting at 1 and resets after
    /// a successful receive.
    async fn wait(&self, attempt: u32);
}

/// Retries immediately. The long-poll wait already rate-limits request
/// frequency, so transient receive failures need no additional backoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackoff;

#[async_trait]
impl RetryPolicy for NoBackoff {
    async fn wait(&self, _attempt: u32) {}
}
