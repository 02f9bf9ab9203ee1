use std::sync::Arc;

use aws_sdk_sqs::types::Message;
use futures::future::join_all;

use crate::errors::{HandlerError, WorkerError};
use crate::worker::config::{Config, InvalidEventAction};
use crate::worker::handler::Handler;
use crate::worker::queue::QueueClient;

/// Fans one received batch out to one task per message and waits for every
/// task to finish.
///
/// There is no early cancellation and no short-circuit: the join always
/// waits for exactly as many tasks as were launched, in whatever order they
/// complete. Errors returned by [`process_message`] are logged at error
/// severity and go no further, so one bad message never interrupts the
/// polling loop or the rest of its batch. A panicking handler surfaces as a failed
/// join handle and is logged the same way.
pub async fn dispatch_batch<C>(
    config: &Arc<Config>,
    queue_client: &Arc<C>,
    handler: &Arc<dyn Handler>,
    messages: Vec<Message>,
) where
    C: QueueClient + 'static,
{
    let mut tasks = Vec::with_capacity(messages.len());

    for message in messages {
        let config = Arc::clone(config);
        let queue_client = Arc::clone(queue_client);
        let handler = Arc::clone(handler);

        tasks.push(tokio::spawn(async move {
            if let Err(err) =
                process_message(&config, queue_client.as_ref(), &message, handler.as_ref()).await
            {
                config.logger.error(&err.to_string());
            }
        }));
    }

    for joined in join_all(tasks).await {
        if let Err(err) = joined {
            config
                .logger
                .error(&format!("worker: message task failed: {err}"));
        }
    }
}

/// Runs the per-message pipeline: handle, classify, conditionally delete.
///
/// - Handler success: the message is deleted and `Ok(())` returned.
/// - [`HandlerError::InvalidEvent`]: logged at error severity and absorbed;
///   the message is then deleted (or retained, per
///   [`Config::invalid_event_action`]). Callers never see this error.
/// - Any other handler error: returned unchanged, the message is not
///   deleted and will be redelivered after the visibility timeout.
/// - Delete failure: returned; the message is not considered processed and
///   an already-successful handler may see it again.
pub async fn process_message<C>(
    config: &Config,
    queue_client: &C,
    message: &Message,
    handler: &dyn Handler,
) -> Result<(), WorkerError>
where
    C: QueueClient + ?Sized,
{
    match handler.handle_message(message).await {
        Ok(()) => {}
        Err(err @ HandlerError::InvalidEvent { .. }) => {
            config.logger.error(&err.to_string());
            if config.invalid_event_action == InvalidEventAction::Retain {
                return Ok(());
            }
        }
        Err(err) => return Err(WorkerError::Handler(err)),
    }

    let receipt_handle = message
        .receipt_handle()
        .ok_or(WorkerError::MissingReceiptHandle)?;

    queue_client
        .delete_message(&config.queue_url, receipt_handle)
        .await?;

    config
        .logger
        .debug(&format!("worker: deleted message from queue: {receipt_handle}"));

    Ok(())
}
