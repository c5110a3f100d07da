//! Core module: input validation, reviewer selection and run orchestration.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod reporting;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    action::run_action::RunAction,
    inputs::validate_inputs::ValidateInputs,
    reviews::{
        gather_candidates::GatherCandidates, request_random_reviewers::RequestRandomReviewers,
    },
};

module! {
    pub CoreModule {
        components = [
            ValidateInputs, GatherCandidates, RequestRandomReviewers, RunAction
        ],
        providers = []
    }
}
