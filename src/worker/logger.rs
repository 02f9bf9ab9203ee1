/// Logging capability consumed by the worker.
///
/// All tasks of a batch may log simultaneously, so implementations must be
/// safe for concurrent use (enforced by the `Send + Sync` bound).
pub trait Logger: Send + Sync {
    /// Logs a debug-level entry (poll start, successful deletions).
    fn debug(&self, message: &str);

    /// Logs an info-level entry (received batch sizes).
    fn info(&self, message: &str);

    /// Logs an error-level entry (receive failures, per-message failures,
    /// invalid events).
    fn error(&self, message: &str);
}

/// Default logger, forwarding entries to the `tracing` ecosystem.
///
/// Whatever subscriber the embedding application installs decides where the
/// entries end up.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Logger that discards every entry.
///
/// For embedders that do all their logging inside the handler, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
