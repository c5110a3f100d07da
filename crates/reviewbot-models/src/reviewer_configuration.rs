use std::collections::BTreeSet;

/// Validated action configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ReviewerConfiguration {
    pub pull_request_number: u64,
    /// Can be zero or negative: nobody gets selected then.
    pub reviewers_to_request: i64,
    /// `None` when unbounded.
    pub max_reviewers: Option<i64>,
    pub excluded_logins: BTreeSet<String>,
    pub dry_run: bool,
    pub token: String,
}

impl ReviewerConfiguration {
    /// Is the maximum reviewers count already met?
    pub fn max_reviewers_reached(&self, existing_count: usize) -> bool {
        match self.max_reviewers {
            Some(max) => count_as_i64(existing_count) >= max,
            None => false,
        }
    }

    /// Number of reviewers to add, given the reviewers already requested.
    pub fn reviewers_to_add(&self, existing_count: usize) -> usize {
        let allowed = match self.max_reviewers {
            Some(max) => self
                .reviewers_to_request
                .min(max.saturating_sub(count_as_i64(existing_count))),
            None => self.reviewers_to_request,
        };

        usize::try_from(allowed).unwrap_or(0)
    }
}

fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl std::fmt::Debug for ReviewerConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewerConfiguration")
            .field("pull_request_number", &self.pull_request_number)
            .field("reviewers_to_request", &self.reviewers_to_request)
            .field("max_reviewers", &self.max_reviewers)
            .field("excluded_logins", &self.excluded_logins)
            .field("dry_run", &self.dry_run)
            .field("token", &"<redacted>")
            .finish()
    }
}
