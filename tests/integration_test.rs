//! Live integration test against a real SQS queue.
//!
//! Needs AWS credentials in the environment (or a `.env` file) and
//! `TEST_SQS_QUEUE_URL` pointing at a FIFO queue. Run with
//! `cargo test -- --ignored`.

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use aws_sdk_sqs::types::Message;
use rs_sqs_worker::client::create_client_from_env;
use rs_sqs_worker::errors::HandlerError;
use rs_sqs_worker::worker::{self, config::Config, handler::HandlerFunc};
use tokio::time::timeout;

#[tokio::test]
#[ignore = "requires AWS credentials and TEST_SQS_QUEUE_URL"]
async fn test_sqs_worker_processes_and_deletes() {
    dotenvy::dotenv().ok();

    let queue_url = env::var("TEST_SQS_QUEUE_URL").expect("TEST_SQS_QUEUE_URL must be set");

    let sqs_client = create_client_from_env().await;

    sqs_client
        .send_message()
        .queue_url(&queue_url)
        .message_body("Test message 1")
        .message_deduplication_id("test-message-1")
        .message_group_id("test-group")
        .send()
        .await
        .expect("Failed to send test message 1");

    sqs_client
        .send_message()
        .queue_url(&queue_url)
        .message_body("Test message 2")
        .message_deduplication_id("test-message-2")
        .message_group_id("test-group")
        .send()
        .await
        .expect("Failed to send test message 2");

    println!("Sent 2 test messages to queue");

    let processed = Arc::new(AtomicUsize::new(0));
    let processed_clone = Arc::clone(&processed);

    let config = Config::for_queue_url(&queue_url);
    let client_clone = sqs_client.clone();
    let receive_task = tokio::spawn(worker::start(
        Some(config),
        client_clone,
        HandlerFunc::new(move |message: Message| {
            let processed = Arc::clone(&processed_clone);
            async move {
                println!("Received message: {:?}", message.body());
                processed.fetch_add(1, Ordering::SeqCst);
                Ok::<(), HandlerError>(())
            }
        }),
    ));

    let timeout_result = timeout(Duration::from_secs(30), async {
        loop {
            let count = processed.load(Ordering::SeqCst);
            println!("Current message count: {}", count);
            if count >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    })
    .await;

    receive_task.abort();

    match timeout_result {
        Ok(_) => {
            let final_count = processed.load(Ordering::SeqCst);
            println!("Successfully processed {} messages", final_count);
            assert!(
                final_count >= 2,
                "Should have processed at least 2 messages"
            );
        }
        Err(_) => {
            let final_count = processed.load(Ordering::SeqCst);
            panic!("Test timed out. Only processed {} messages", final_count);
        }
    }
}
