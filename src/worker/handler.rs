use std::future::Future;

use async_trait::async_trait;
use aws_sdk_sqs::types::Message;

use crate::errors::HandlerError;

/// The unit of business logic: maps one received message to success or a
/// classified failure.
///
/// Returning [`HandlerError::InvalidEvent`] marks the message permanently
/// unprocessable: it is logged and acknowledged (by default) instead of
/// being redelivered forever. Any other error leaves the message in the
/// queue for another attempt after the visibility timeout.
///
/// Messages of one batch are handled concurrently, so implementations must
/// be safe to invoke from multiple tasks. Handlers should be idempotent
/// where it matters: a message whose deletion failed is redelivered even
/// though handling succeeded.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes a single message.
    async fn handle_message(&self, message: &Message) -> Result<(), HandlerError>;
}

#[async_trait]
impl<H: Handler + ?Sized> Handler for std::sync::Arc<H> {
    async fn handle_message(&self, message: &Message) -> Result<(), HandlerError> {
        (**self).handle_message(message).await
    }
}

/// Adapter that lets a plain async function or closure act as a [`Handler`].
///
/// The wrapped function receives an owned clone of the message.
///
/// # Example
///
/// ```rust
/// use aws_sdk_sqs::types::Message;
/// use rs_sqs_worker::errors::HandlerError;
/// use rs_sqs_worker::worker::handler::HandlerFunc;
///
/// let handler = HandlerFunc::new(|message: Message| async move {
///     match message.body() {
///         Some(_) => Ok(()),
///         None => Err(HandlerError::invalid_event("empty", "message has no body")),
///     }
/// });
/// ```
pub struct HandlerFunc<F> {
    handler_fn: F,
}

impl<F> HandlerFunc<F> {
    /// Wraps the given function.
    pub fn new(handler_fn: F) -> Self {
        HandlerFunc { handler_fn }
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFunc<F>
where
    F: Fn(Message) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), HandlerError>> + Send,
{
    async fn handle_message(&self, message: &Message) -> Result<(), HandlerError> {
        (self.handler_fn)(message.clone()).await
    }
}
