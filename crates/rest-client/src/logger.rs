//! Optional request/response event logging

use std::fmt::Debug;

use serde_json::Value;

/// Sink for request/response events
///
/// A logger is optional; a client without one dispatches silently. The
/// context value carries the assembled request options or the response
/// status alongside the message.
pub trait Logger: Send + Sync + Debug {
    /// Log an informational event
    fn info(&self, message: &str, context: Option<&Value>);

    /// Log an error event
    fn error(&self, message: &str, context: Option<&Value>);
}

/// [`Logger`] that forwards events to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, context: Option<&Value>) {
        match context {
            Some(context) => tracing::info!(%context, "{}", message),
            None => tracing::info!("{}", message),
        }
    }

    fn error(&self, message: &str, context: Option<&Value>) {
        match context {
            Some(context) => tracing::error!(%context, "{}", message),
            None => tracing::error!("{}", message),
        }
    }
}
