//! Step reporting boundary
//!
//! The dispatcher never talks to a reporting backend directly; it calls
//! whatever [`StepReporter`] was injected. The default implementations
//! either drop the events or forward them to tracing.

/// Structured step/attachment sink injected into the dispatcher
pub trait StepReporter: Send + Sync {
    /// Record the start of a logical step
    fn step(&self, name: &str);

    /// Attach free-form content (error details, payload dumps) to the
    /// current step
    fn attachment(&self, name: &str, content: &str);
}

/// Reporter that discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl StepReporter for NoopReporter {
    fn step(&self, _name: &str) {}
    fn attachment(&self, _name: &str, _content: &str) {}
}

/// Reporter that forwards steps to tracing at INFO level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StepReporter for TracingReporter {
    fn step(&self, name: &str) {
        tracing::info!(step = name, "step");
    }

    fn attachment(&self, name: &str, content: &str) {
        tracing::debug!(attachment = name, content, "attachment");
    }
}
