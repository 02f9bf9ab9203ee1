//! # AWS SQS Worker
//!
//! An asynchronous AWS SQS polling worker that runs the receive → handle →
//! delete loop for the lifetime of the process and lets users plug in their
//! business logic as a trait-based message handler.
//!
//! ## Features
//!
//! - Infinite long-polling loop with tokio; receive errors are logged and
//!   retried through a pluggable retry policy
//! - Trait-based handler system with a function adapter for plain closures
//! - Per-batch fan-out: one task per message, fully joined before the next
//!   receive
//! - Tagged error classification: invalid events are logged and acknowledged
//!   (configurable), transient failures leave the message for redelivery
//! - Automatic message deletion on successful processing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aws_sdk_sqs::types::Message;
//! use rs_sqs_worker::client::create_client_from_env;
//! use rs_sqs_worker::errors::HandlerError;
//! use rs_sqs_worker::worker::{self, config::Config, handler::HandlerFunc};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sqs_client = create_client_from_env().await;
//!     let config = Config::for_queue_url("https://sqs.region.amazonaws.com/account/queue-name");
//!
//!     worker::start(
//!         Some(config),
//!         sqs_client,
//!         HandlerFunc::new(|message: Message| async move {
//!             println!("Processing message: {:?}", message.body());
//!             Ok::<(), HandlerError>(())
//!         }),
//!     )
//!     .await;
//! }
//! ```

pub mod client;
pub mod errors;
pub mod worker;
