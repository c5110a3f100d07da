use std::collections::BTreeSet;

const BOT_LOGIN_MARKER: &str = "[bot]";

/// Rules deciding whether a login can be asked for a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerEligibility {
    author_login: String,
    existing_reviewer_logins: BTreeSet<String>,
    excluded_logins: BTreeSet<String>,
}

impl ReviewerEligibility {
    pub fn new<I, J>(author_login: &str, existing_reviewer_logins: I, excluded_logins: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            author_login: author_login.into(),
            existing_reviewer_logins: existing_reviewer_logins.into_iter().collect(),
            excluded_logins: excluded_logins.into_iter().collect(),
        }
    }

    /// Logins are compared case-sensitively.
    pub fn is_eligible(&self, login: &str) -> bool {
        !login.is_empty()
            && login != self.author_login
            && !Self::is_bot(login)
            && !self.existing_reviewer_logins.contains(login)
            && !self.excluded_logins.contains(login)
    }

    pub fn is_bot(login: &str) -> bool {
        login.contains(BOT_LOGIN_MARKER)
    }
}
