use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reviewbot_models::{
    PullRequestHandle, PullRequestSnapshot, ReviewerConfiguration, ReviewerEligibility,
};
use shaku::{Component, HasComponent, Interface};

use super::gather_candidates::GatherCandidatesInterface;
use crate::{CoreContext, DomainError, Result};

/// How a selection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The pull request already has enough reviewers.
    MaxReviewersReached,
    /// Neither recent activity nor collaborators gave a candidate.
    NoEligibleReviewers,
    /// Candidates exist but the quota is zero.
    NothingSelected,
    /// Reviewers that would have been requested.
    DryRun(Vec<String>),
    ReviewersRequested(Vec<String>),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RequestRandomReviewersInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        configuration: &ReviewerConfiguration,
    ) -> Result<SelectionOutcome>;
}

#[derive(Component)]
#[shaku(interface = RequestRandomReviewersInterface)]
pub(crate) struct RequestRandomReviewers;

#[async_trait]
impl RequestRandomReviewersInterface for RequestRandomReviewers {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        configuration: &ReviewerConfiguration,
    ) -> Result<SelectionOutcome> {
        let snapshot = self.fetch_snapshot(ctx, pr_handle).await?;
        let existing_count = snapshot.existing_reviewers_count();

        if let Some(max) = configuration.max_reviewers {
            if configuration.max_reviewers_reached(existing_count) {
                ctx.reporter.info(&format!(
                    "PR #{} already has {} reviewers, which meets or exceeds the maximum of {}. Not adding more reviewers.",
                    pr_handle.number(),
                    existing_count,
                    max
                ));
                return Ok(SelectionOutcome::MaxReviewersReached);
            }
        }

        let to_add = configuration.reviewers_to_add(existing_count);
        ctx.reporter.info(&format!(
            "Will add {} reviewers to PR: #{}",
            to_add,
            pr_handle.number()
        ));

        let eligibility = ReviewerEligibility::new(
            &snapshot.author_login,
            snapshot.existing_reviewer_logins,
            configuration.excluded_logins.iter().cloned(),
        );

        let gather_candidates: &dyn GatherCandidatesInterface = ctx.core_module.resolve_ref();
        let pool = gather_candidates.run(ctx, pr_handle, &eligibility).await?;
        if pool.is_empty() {
            ctx.reporter.warning("Found no eligible reviewers to add.");
            return Ok(SelectionOutcome::NoEligibleReviewers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(ctx.config.random_seed);
        let selection = pool.sample(to_add, &mut rng);
        if selection.is_empty() {
            ctx.reporter
                .info("No reviewers selected. Not adding reviewers.");
            return Ok(SelectionOutcome::NothingSelected);
        }

        if configuration.dry_run {
            ctx.reporter.info(&format!(
                "Dry run enabled. Skipping adding reviewers. Would've added following users as reviewers: {}",
                selection.join(", ")
            ));
            return Ok(SelectionOutcome::DryRun(selection));
        }

        ctx.reporter.info(&format!(
            "Adding following users as reviewers: {}",
            selection.join(", ")
        ));

        ctx.api_service
            .pull_reviewer_requests_add(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &selection,
            )
            .await?;

        Ok(SelectionOutcome::ReviewersRequested(selection))
    }
}

impl RequestRandomReviewers {
    async fn fetch_snapshot(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
    ) -> Result<PullRequestSnapshot> {
        let pull_request = ctx
            .api_service
            .pulls_get(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?
            .ok_or(DomainError::PullRequestNotFound {
                number: pr_handle.number(),
            })?;

        Ok(PullRequestSnapshot {
            existing_reviewer_logins: pull_request.requested_reviewer_logins(),
            author_login: pull_request.user.login,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use reviewbot_ghapi_interface::{
        types::{GhPullRequest, GhUser},
        ApiError, MockApiService,
    };
    use reviewbot_models::CandidatePool;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, reporting::Report,
        use_cases::reviews::MockGatherCandidatesInterface, CoreModule,
    };

    fn configuration(requested: i64, max: Option<i64>) -> ReviewerConfiguration {
        ReviewerConfiguration {
            pull_request_number: 1,
            reviewers_to_request: requested,
            max_reviewers: max,
            token: "abcdef".into(),
            ..Default::default()
        }
    }

    fn pull_request(author: &str, reviewers: &[&str]) -> GhPullRequest {
        GhPullRequest {
            number: 1,
            user: GhUser::from(author),
            requested_reviewers: reviewers.iter().map(|&r| GhUser::from(r)).collect(),
            ..Default::default()
        }
    }

    fn api_with_pull_request(pr: GhPullRequest) -> MockApiService {
        let mut svc = MockApiService::new();
        svc.expect_pulls_get()
            .once()
            .withf(|owner, name, number| owner == "me" && name == "test" && number == &1)
            .return_once(move |_, _, _| Ok(Some(pr)));
        svc
    }

    fn gather_candidates_returning(logins: &'static [&'static str]) -> MockGatherCandidatesInterface {
        let mut mock = MockGatherCandidatesInterface::new();
        mock.expect_run()
            .once()
            .return_once(move |_, _, _| Ok(logins.iter().copied().collect::<CandidatePool>()));
        mock
    }

    fn module_with(gather_candidates: MockGatherCandidatesInterface) -> CoreModule {
        CoreModule::builder()
            .with_component_override::<dyn GatherCandidatesInterface>(Box::new(gather_candidates))
            .build()
    }

    #[tokio::test]
    async fn not_found() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pulls_get()
                .once()
                .return_once(|_, _, _| Ok(None));
            svc.expect_repository_events_list().never();
            svc
        };

        let error = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(1, None))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "PR #1 not found.");
        assert_eq!(ctx.reporter.reports(), Vec::<Report>::new());
    }

    #[tokio::test]
    async fn pull_request_error() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pulls_get()
                .once()
                .return_once(|_, _, _| Err(ApiError::from_message("Bad credentials")));
            svc
        };

        let error = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(1, None))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Bad credentials");
    }

    #[tokio::test]
    async fn max_reviewers_reached() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &["a", "b"]));
            svc.expect_repository_events_list().never();
            svc.expect_collaborators_list().never();
            svc.expect_pull_reviewer_requests_add().never();
            svc
        };

        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(3, Some(2)))
            .await
            .unwrap();

        assert_eq!(outcome, SelectionOutcome::MaxReviewersReached);
        assert_eq!(
            ctx.reporter.reports(),
            vec![Report::Info(
                "PR #1 already has 2 reviewers, which meets or exceeds the maximum of 2. Not adding more reviewers.".into()
            )]
        );
    }

    #[tokio::test]
    async fn quota_limits_selection() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &["existing"]));
            svc.expect_pull_reviewer_requests_add()
                .once()
                .withf(|owner, name, number, reviewers| {
                    owner == "me" && name == "test" && number == &1 && reviewers.len() == 2
                })
                .return_once(|_, _, _, _| Ok(()));
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&["a", "b", "c", "d", "e"]));

        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(5, Some(3)))
            .await
            .unwrap();

        let selection = match outcome {
            SelectionOutcome::ReviewersRequested(selection) => selection,
            other => panic!("unexpected outcome: {other:?}"),
        };
        let distinct: BTreeSet<_> = selection.iter().collect();
        assert_eq!(selection.len(), 2);
        assert_eq!(distinct.len(), 2);
        assert!(selection
            .iter()
            .all(|l| ["a", "b", "c", "d", "e"].contains(&l.as_str())));

        assert_eq!(
            ctx.reporter.infos(),
            vec![
                "Will add 2 reviewers to PR: #1".to_string(),
                format!("Adding following users as reviewers: {}", selection.join(", "))
            ]
        );
    }

    #[tokio::test]
    async fn pool_limits_selection() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &[]));
            svc.expect_pull_reviewer_requests_add()
                .once()
                .withf(|_, _, _, reviewers| {
                    let mut sorted = reviewers.to_vec();
                    sorted.sort();
                    sorted == ["a", "b"]
                })
                .return_once(|_, _, _, _| Ok(()));
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&["a", "b"]));

        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(4, None))
            .await
            .unwrap();

        assert!(matches!(outcome, SelectionOutcome::ReviewersRequested(s) if s.len() == 2));
        assert_eq!(ctx.reporter.infos()[0], "Will add 4 reviewers to PR: #1");
    }

    #[tokio::test]
    async fn same_seed_same_selection() {
        async fn select(seed: u64) -> SelectionOutcome {
            let mut ctx = CoreContextTest::new();
            ctx.config.random_seed = seed;
            ctx.api_service = api_with_pull_request(pull_request("author", &[]));
            ctx.core_module =
                module_with(gather_candidates_returning(&["a", "b", "c", "d", "e", "f"]));

            let config = ReviewerConfiguration {
                dry_run: true,
                ..configuration(3, None)
            };
            RequestRandomReviewers
                .run(&ctx.as_context(), &("me", "test", 1).into(), &config)
                .await
                .unwrap()
        }

        assert_eq!(select(1234).await, select(1234).await);
    }

    #[tokio::test]
    async fn dry_run_never_assigns() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &[]));
            svc.expect_pull_reviewer_requests_add().never();
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&["other"]));

        let config = ReviewerConfiguration {
            dry_run: true,
            ..configuration(1, None)
        };
        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &config)
            .await
            .unwrap();

        assert_eq!(outcome, SelectionOutcome::DryRun(vec!["other".into()]));
        assert_eq!(
            ctx.reporter.infos(),
            vec![
                "Will add 1 reviewers to PR: #1",
                "Dry run enabled. Skipping adding reviewers. Would've added following users as reviewers: other"
            ]
        );
    }

    #[tokio::test]
    async fn no_eligible_reviewers() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &[]));
            svc.expect_pull_reviewer_requests_add().never();
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&[]));

        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(2, None))
            .await
            .unwrap();

        assert_eq!(outcome, SelectionOutcome::NoEligibleReviewers);
        assert_eq!(
            ctx.reporter.warnings(),
            vec!["Found no eligible reviewers to add."]
        );
    }

    #[tokio::test]
    async fn zero_requested() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &[]));
            svc.expect_pull_reviewer_requests_add().never();
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&["a", "b"]));

        let outcome = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(-3, None))
            .await
            .unwrap();

        assert_eq!(outcome, SelectionOutcome::NothingSelected);
        assert_eq!(
            ctx.reporter.infos(),
            vec![
                "Will add 0 reviewers to PR: #1",
                "No reviewers selected. Not adding reviewers."
            ]
        );
    }

    #[tokio::test]
    async fn eligibility_uses_pull_request_and_exclusions() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = api_with_pull_request(pull_request("author", &["existing"]));
        ctx.core_module = {
            let mut mock = MockGatherCandidatesInterface::new();
            mock.expect_run()
                .once()
                .withf(|_, pr_handle, eligibility| {
                    pr_handle == &("me", "test", 1).into()
                        && eligibility.is_eligible("someone")
                        && !eligibility.is_eligible("author")
                        && !eligibility.is_eligible("existing")
                        && !eligibility.is_eligible("excluded")
                })
                .return_once(|_, _, _| Ok(CandidatePool::new()));
            module_with(mock)
        };

        let config = ReviewerConfiguration {
            excluded_logins: ["excluded".to_string()].into_iter().collect(),
            ..configuration(1, None)
        };
        RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &config)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn assignment_error() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = api_with_pull_request(pull_request("author", &[]));
            svc.expect_pull_reviewer_requests_add()
                .once()
                .return_once(|_, _, _, _| Err(ApiError::from_message("Validation Failed")));
            svc
        };
        ctx.core_module = module_with(gather_candidates_returning(&["other"]));

        let error = RequestRandomReviewers
            .run(&ctx.as_context(), &("me", "test", 1).into(), &configuration(1, None))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Validation Failed");
    }
}
