use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::Message;

use crate::errors::WorkerError;

/// Parameters for one receive request.
#[derive(Debug, Clone)]
pub struct ReceiveParams {
    /// The URL of the queue to receive from.
    pub queue_url: String,

    /// The maximum number of messages to return (1–10).
    pub max_number_of_messages: i32,

    /// The long-poll wait, in seconds.
    pub wait_time_seconds: i32,

    /// Which message attributes to return with each message. The worker
    /// requests `"All"`.
    pub message_attribute_names: Vec<String>,
}

/// Queue capability consumed by the worker.
///
/// Implemented for `aws_sdk_sqs::Client`; the worker treats the queue as an
/// opaque collaborator, so tests can substitute a scripted fake.
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Receives up to `max_number_of_messages` messages, waiting up to
    /// `wait_time_seconds` for one to arrive.
    async fn receive_messages(&self, params: &ReceiveParams) -> Result<Vec<Message>, WorkerError>;

    /// Deletes the delivery identified by `receipt_handle` from the queue.
    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), WorkerError>;
}

#[async_trait]
impl QueueClient for aws_sdk_sqs::Client {
    async fn receive_messages(&self, params: &ReceiveParams) -> Result<Vec<Message>, WorkerError> {
        let output = self
            .receive_message()
            .queue_url(&params.queue_url)
            .max_number_of_messages(params.max_number_of_messages)
            .wait_time_seconds(params.wait_time_seconds)
            .set_message_attribute_names(Some(params.message_attribute_names.clone()))
            .send()
            .await
            .map_err(|err| WorkerError::Receive(DisplayErrorContext(&err).to_string()))?;

        Ok(output.messages.unwrap_or_default())
    }

    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), WorkerError> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|err| WorkerError::Delete(DisplayErrorContext(&err).to_string()))?;

        Ok(())
    }
}
