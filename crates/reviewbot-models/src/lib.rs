//! Shared models.

mod candidate_pool;
mod pull_request_handle;
mod pull_request_snapshot;
mod repository_path;
mod reviewer_configuration;
mod reviewer_eligibility;

pub use candidate_pool::CandidatePool;
pub use pull_request_handle::PullRequestHandle;
pub use pull_request_snapshot::PullRequestSnapshot;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use reviewer_configuration::ReviewerConfiguration;
pub use reviewer_eligibility::ReviewerEligibility;
