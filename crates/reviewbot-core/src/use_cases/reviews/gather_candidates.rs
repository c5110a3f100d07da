use async_trait::async_trait;
use reviewbot_ghapi_interface::types::GhCollaboratorPermission;
use reviewbot_models::{CandidatePool, PullRequestHandle, ReviewerEligibility};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Recent repository events fetched in one page.
pub const EVENTS_PAGE_SIZE: u64 = 100;
/// Collaborators fetched in one page, it matches the pool bound.
pub const COLLABORATORS_PAGE_SIZE: u64 = CandidatePool::MAX_SIZE as u64;

/// Collects eligible reviewers, from recent activity first, then from
/// repository collaborators when activity yields nobody.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GatherCandidatesInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        eligibility: &ReviewerEligibility,
    ) -> Result<CandidatePool>;
}

#[derive(Component)]
#[shaku(interface = GatherCandidatesInterface)]
pub(crate) struct GatherCandidates;

#[async_trait]
impl GatherCandidatesInterface for GatherCandidates {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        eligibility: &ReviewerEligibility,
    ) -> Result<CandidatePool> {
        let pool = self.from_recent_activity(ctx, pr_handle, eligibility).await?;
        if !pool.is_empty() {
            ctx.reporter.info(&format!(
                "Found {} users from recent activity who are eligible to be reviewers.",
                pool.len()
            ));
            return Ok(pool);
        }

        ctx.reporter.info(
            "No eligible reviewers found in recent activity. Falling back to repository collaborators.",
        );

        let pool = self.from_collaborators(ctx, pr_handle, eligibility).await;
        if !pool.is_empty() {
            ctx.reporter.info(&format!(
                "Found {} collaborators who are eligible to be reviewers.",
                pool.len()
            ));
        }

        Ok(pool)
    }
}

impl GatherCandidates {
    async fn from_recent_activity(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
        eligibility: &ReviewerEligibility,
    ) -> Result<CandidatePool> {
        let events = ctx
            .api_service
            .repository_events_list(pr_handle.owner(), pr_handle.name(), EVENTS_PAGE_SIZE)
            .await?;

        let mut pool = CandidatePool::new();
        for login in events.iter().filter_map(|e| e.actor_login()) {
            if pool.is_full() {
                break;
            }

            if eligibility.is_eligible(login) {
                pool.insert(login);
            }
        }

        Ok(pool)
    }

    async fn from_collaborators(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
        eligibility: &ReviewerEligibility,
    ) -> CandidatePool {
        let collaborators = match ctx
            .api_service
            .collaborators_list(
                pr_handle.owner(),
                pr_handle.name(),
                GhCollaboratorPermission::Push,
                COLLABORATORS_PAGE_SIZE,
            )
            .await
        {
            Ok(collaborators) => collaborators,
            Err(e) => {
                tracing::warn!(error = %e, "Could not fetch collaborators");
                ctx.reporter
                    .warning(&format!("Failed to fetch collaborators: {e}"));
                return CandidatePool::new();
            }
        };

        collaborators
            .into_iter()
            .map(|user| user.login)
            .filter(|login| eligibility.is_eligible(login))
            .collect()
    }
}
