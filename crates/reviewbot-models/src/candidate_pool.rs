use rand::{seq::SliceRandom, Rng};

/// Distinct reviewer candidates, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    logins: Vec<String>,
    capacity: usize,
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidatePool {
    /// Maximum candidates kept, whatever the source size.
    pub const MAX_SIZE: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::MAX_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logins: Vec::new(),
            capacity: capacity.min(Self::MAX_SIZE),
        }
    }

    /// Add a login, returns `false` when already present or when the pool is full.
    pub fn insert<T: Into<String>>(&mut self, login: T) -> bool {
        let login = login.into();
        if self.is_full() || self.contains(&login) {
            return false;
        }

        self.logins.push(login);
        true
    }

    pub fn contains(&self, login: &str) -> bool {
        self.logins.iter().any(|l| l == login)
    }

    pub fn is_full(&self) -> bool {
        self.logins.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn logins(&self) -> &[String] {
        &self.logins
    }

    /// Draw up to `amount` distinct logins, uniformly and without replacement.
    ///
    /// Uses a partial Fisher-Yates shuffle, the result keeps the draw order.
    pub fn sample<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<String> {
        let mut logins = self.logins.clone();
        let amount = amount.min(logins.len());
        let (drawn, _) = logins.partial_shuffle(rng, amount);
        drawn.to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for CandidatePool {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut pool = Self::new();
        for login in iter {
            if pool.is_full() {
                break;
            }

            pool.insert(login);
        }

        pool
    }
}
