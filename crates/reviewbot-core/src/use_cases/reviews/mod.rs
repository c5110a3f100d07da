pub(crate) mod gather_candidates;
pub(crate) mod request_random_reviewers;

pub use gather_candidates::GatherCandidatesInterface;
pub use request_random_reviewers::{RequestRandomReviewersInterface, SelectionOutcome};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    gather_candidates::MockGatherCandidatesInterface,
    request_random_reviewers::MockRequestRandomReviewersInterface,
};
