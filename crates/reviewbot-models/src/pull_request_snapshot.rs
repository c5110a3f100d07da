/// Pull request data needed to pick reviewers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    pub author_login: String,
    /// Users whose review is already requested, in API order.
    pub existing_reviewer_logins: Vec<String>,
}

impl PullRequestSnapshot {
    pub fn existing_reviewers_count(&self) -> usize {
        self.existing_reviewer_logins.len()
    }
}
