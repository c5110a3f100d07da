pub mod action;
pub mod inputs;
pub mod reviews;
