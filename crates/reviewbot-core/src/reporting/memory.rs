use std::sync::{Mutex, PoisonError};

use super::Reporter;

/// A reported message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Warning(String),
    Failure(String),
}

/// Reporter keeping messages in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports, in order.
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.filter_reports(|r| match r {
            Report::Info(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.filter_reports(|r| match r {
            Report::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn failures(&self) -> Vec<String> {
        self.filter_reports(|r| match r {
            Report::Failure(m) => Some(m),
            _ => None,
        })
    }

    fn filter_reports<F>(&self, f: F) -> Vec<String>
    where
        F: Fn(Report) -> Option<String>,
    {
        self.reports().into_iter().filter_map(f).collect()
    }

    fn push(&self, report: Report) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report);
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.push(Report::Info(message.into()));
    }

    fn warning(&self, message: &str) {
        self.push(Report::Warning(message.into()));
    }

    fn set_failed(&self, message: &str) {
        self.push(Report::Failure(message.into()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_order() {
        let reporter = MemoryReporter::new();
        reporter.info("one");
        reporter.warning("two");
        reporter.info("three");
        reporter.set_failed("four");

        assert_eq!(
            reporter.reports(),
            vec![
                Report::Info("one".into()),
                Report::Warning("two".into()),
                Report::Info("three".into()),
                Report::Failure("four".into()),
            ]
        );
        assert_eq!(reporter.infos(), vec!["one", "three"]);
        assert_eq!(reporter.warnings(), vec!["two"]);
        assert_eq!(reporter.failures(), vec!["four"]);
    }
}
