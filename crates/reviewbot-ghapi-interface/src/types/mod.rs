mod common;
mod events;
mod pulls;

pub use common::*;
pub use events::*;
pub use pulls::*;
