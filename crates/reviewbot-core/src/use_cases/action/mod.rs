pub(crate) mod run_action;

#[cfg(any(test, feature = "testkit"))]
pub use run_action::MockRunActionInterface;
pub use run_action::{ActionOutcome, RunActionInterface};
