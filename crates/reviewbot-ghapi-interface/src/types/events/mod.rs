mod event;

pub use event::{GhEvent, GhEventActor};
