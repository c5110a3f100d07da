use async_trait::async_trait;
use reviewbot_config::Config;
use reviewbot_models::{PullRequestHandle, RepositoryPath};
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::{
        inputs::ValidateInputsInterface,
        reviews::{RequestRandomReviewersInterface, SelectionOutcome},
    },
    CoreContext, DomainError, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed(SelectionOutcome),
    /// The failure was reported, the process should exit with an error.
    Failed { message: String },
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Whole action run: validate inputs, then request reviewers.
///
/// Never returns an error: any failure is reported once through
/// [`Reporter::set_failed`](crate::reporting::Reporter::set_failed).
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunActionInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> ActionOutcome;
}

#[derive(Component)]
#[shaku(interface = RunActionInterface)]
pub(crate) struct RunAction;

#[async_trait]
impl RunActionInterface for RunAction {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> ActionOutcome {
        match self.run_inner(ctx).await {
            Ok(outcome) => ActionOutcome::Completed(outcome),
            Err(e) => {
                tracing::error!(error = ?e, "Action failed");

                let message = e.to_string();
                ctx.reporter.set_failed(&message);
                ActionOutcome::Failed { message }
            }
        }
    }
}

impl RunAction {
    async fn run_inner(&self, ctx: &CoreContext<'_>) -> Result<SelectionOutcome> {
        let validate_inputs: &dyn ValidateInputsInterface = ctx.core_module.resolve_ref();
        let configuration = validate_inputs.run(ctx).await?;

        let repository_path = Self::repository_path(ctx.config)?;
        let pr_handle =
            PullRequestHandle::new(repository_path, configuration.pull_request_number);

        let request_random_reviewers: &dyn RequestRandomReviewersInterface =
            ctx.core_module.resolve_ref();
        request_random_reviewers
            .run(ctx, &pr_handle, &configuration)
            .await
    }

    fn repository_path(config: &Config) -> Result<RepositoryPath> {
        if config.repository.is_empty() {
            return Err(DomainError::MissingRepository);
        }

        Ok(RepositoryPath::new(&config.repository)?)
    }
}
