use std::sync::Arc;

use crate::worker::config::Config;
use crate::worker::dispatch::dispatch_batch;
use crate::worker::handler::Handler;
use crate::worker::queue::{QueueClient, ReceiveParams};

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod logger;
pub mod queue;

/// Starts polling the queue and never returns.
///
/// Each iteration issues one long-poll receive, fans the returned batch out
/// to one task per message, and blocks until every task has finished before
/// the next receive. The receive call is the backpressure point, so at most
/// one batch is in flight at any time.
///
/// Receive failures are logged and retried through the configured
/// [`config::RetryPolicy`]; there is no iteration limit. Per-message failures
/// are logged at the dispatch boundary and never reach this loop. There is no
/// graceful-stop mechanism: the embedding process is expected to run this on
/// a dedicated task and terminate it externally, and received-but-undeleted
/// messages reappear after the queue's visibility timeout.
///
/// When `config` is `None` a fresh [`Config::default()`] is used. The default
/// carries an empty queue URL and only makes sense against a non-AWS
/// [`QueueClient`]; real queues want [`Config::for_queue_url`].
pub async fn start<C, H>(config: Option<Config>, queue_client: C, handler: H)
where
    C: QueueClient + 'static,
    H: Handler + 'static,
{
    let config = Arc::new(config.unwrap_or_default());
    let queue_client = Arc::new(queue_client);
    let handler: Arc<dyn Handler> = Arc::new(handler);

    let mut failed_receives: u32 = 0;

    loop {
        config.logger.debug("worker: Start Polling");

        let params = ReceiveParams {
            queue_url: config.queue_url.clone(),
            max_number_of_messages: config.max_number_of_messages,
            wait_time_seconds: config.wait_time_seconds,
            message_attribute_names: vec!["All".to_string()],
        };

        let messages = match queue_client.receive_messages(&params).await {
            Ok(messages) => {
                failed_receives = 0;
                messages
            }
            Err(err) => {
                config.logger.error(&err.to_string());
                failed_receives += 1;
                config.receive_retry.wait(failed_receives).await;
                continue;
            }
        };

        if messages.is_empty() {
            // Long-poll wait already elapsed server-side.
            continue;
        }

        config
            .logger
            .info(&format!("worker: Received {} messages", messages.len()));

        dispatch_batch(&config, &queue_client, &handler, messages).await;
    }
}
