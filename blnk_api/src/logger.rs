//! Pluggable logging sink used by the retry executor and the uploader.

/// Receives human-readable messages about request attempts.
///
/// The default [`TracingLogger`] forwards to `tracing`; tests and embedders
/// can supply their own implementation through
/// [`ClientOptions::with_logger`](crate::ClientOptions::with_logger).
pub trait Logger: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Forwards messages to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _msg: &str) {}

    fn error(&self, _msg: &str) {}
}
