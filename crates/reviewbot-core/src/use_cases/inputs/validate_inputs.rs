use std::collections::BTreeSet;

use async_trait::async_trait;
use reviewbot_models::ReviewerConfiguration;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

/// Action input names.
pub mod input_names {
    pub const TOKEN: &str = "token";
    pub const PULL_REQUEST_NUMBER: &str = "pull-request-number";
    pub const NUMBER_OF_REVIEWERS: &str = "number-of-reviewers";
    pub const MAX_NUMBER_OF_REVIEWERS: &str = "max-number-of-reviewers";
    pub const EXCLUDED_REVIEWERS: &str = "excluded-reviewers";
    pub const DRY_RUN: &str = "dry-run";
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ValidateInputsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<ReviewerConfiguration>;
}

#[derive(Component)]
#[shaku(interface = ValidateInputsInterface)]
pub(crate) struct ValidateInputs;

#[async_trait]
impl ValidateInputsInterface for ValidateInputs {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<ReviewerConfiguration> {
        let input = |name: &str| ctx.input_reader.get_input(name);

        // First failure wins, keep the check order.
        let pull_request_number =
            Self::parse_required(input_names::PULL_REQUEST_NUMBER, &input)?;

        let token = input(input_names::TOKEN);
        if token.is_empty() {
            return Err(DomainError::missing_input(input_names::TOKEN));
        }

        let reviewers_to_request =
            Self::parse_required(input_names::NUMBER_OF_REVIEWERS, &input)?;

        let max_reviewers = {
            let raw = input(input_names::MAX_NUMBER_OF_REVIEWERS);
            if raw.is_empty() {
                None
            } else {
                Some(Self::parse_value(input_names::MAX_NUMBER_OF_REVIEWERS, &raw)?)
            }
        };

        Ok(ReviewerConfiguration {
            pull_request_number,
            reviewers_to_request,
            max_reviewers,
            excluded_logins: Self::parse_excluded_logins(&input(input_names::EXCLUDED_REVIEWERS)),
            dry_run: input(input_names::DRY_RUN) == "true",
            token,
        })
    }
}

impl ValidateInputs {
    fn parse_required<T, F>(name: &str, input: F) -> Result<T>
    where
        T: std::str::FromStr,
        F: Fn(&str) -> String,
    {
        let raw = input(name);
        if raw.is_empty() {
            return Err(DomainError::missing_input(name));
        }

        Self::parse_value(name, &raw)
    }

    fn parse_value<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
        raw.parse()
            .map_err(|_| DomainError::invalid_input(name, raw))
    }

    fn parse_excluded_logins(raw: &str) -> BTreeSet<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|login| !login.is_empty())
            .map(str::to_string)
            .collect()
    }
}
