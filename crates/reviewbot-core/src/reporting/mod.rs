//! Operator-facing reporting.

mod actions;
mod memory;

pub use actions::ActionsReporter;
pub use memory::{MemoryReporter, Report};

/// Sink for the human-readable messages of a run.
///
/// Message order matters: implementations must keep it.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    /// Report the run as failed.
    fn set_failed(&self, message: &str);
}
