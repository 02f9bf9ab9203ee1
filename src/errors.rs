use thiserror::Error;

/// Error types for SQS worker operations.
///
/// This enum represents everything the per-message pipeline can fail with.
/// None of these variants ever reach the polling loop itself; they are
/// logged at the dispatch boundary and the loop keeps polling.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Error that occurs while receiving a batch of messages from the queue.
    ///
    /// Receive errors are treated as transient: the worker logs them and
    /// issues the next receive without terminating.
    #[error("failed to receive messages from queue: {0}")]
    Receive(String),

    /// Error that occurs while deleting a processed message from the queue.
    ///
    /// The message stays in the queue and reappears after the visibility
    /// timeout, so a handler that already succeeded may run again.
    #[error("failed to delete message from queue: {0}")]
    Delete(String),

    /// The handler rejected the message with a transient failure.
    ///
    /// The message is not deleted and will be redelivered.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// The message carried no receipt handle, so it cannot be deleted.
    #[error("message has no receipt handle")]
    MissingReceiptHandle,
}

/// Error returned by a message handler.
///
/// The variant, not the underlying error type, decides what happens to the
/// message: an [`HandlerError::InvalidEvent`] is logged and acknowledged (it
/// will never become valid on redelivery), while anything else leaves the
/// message in the queue for another attempt.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A recognized, permanently unprocessable message.
    #[error("[Invalid Event: {event}] {message}")]
    InvalidEvent {
        /// Identifier of the rejected event, e.g. an event type or id.
        event: String,
        /// Human-readable reason for the rejection.
        message: String,
    },

    /// Any other processing failure, assumed transient.
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Creates an invalid-event error for a message the handler recognizes
    /// as permanently unprocessable.
    pub fn invalid_event(event: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::InvalidEvent {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Wraps an arbitrary error as a transient handler failure.
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        HandlerError::Other(error.into())
    }

    /// Returns true if this is an invalid-event classification.
    pub fn is_invalid_event(&self) -> bool {
        matches!(self, HandlerError::InvalidEvent { .. })
    }
}
