use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, PoisonError,
    },
};

use super::Reporter;

/// Reporter writing GitHub Actions workflow commands.
///
/// Infos are plain lines, warnings and failures use the `::warning::` and
/// `::error::` commands.
pub struct ActionsReporter<W> {
    writer: Mutex<W>,
    failed: AtomicBool,
}

impl<W: Write + Send> ActionsReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            failed: AtomicBool::new(false),
        }
    }

    /// Was `set_failed` called?
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn into_writer(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            tracing::error!(error = %e, "Could not write report");
        }
    }
}

impl ActionsReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Reporter for ActionsReporter<W> {
    fn info(&self, message: &str) {
        tracing::debug!(kind = "info", "{message}");
        self.write_line(message);
    }

    fn warning(&self, message: &str) {
        tracing::debug!(kind = "warning", "{message}");
        self.write_line(&format!("::warning::{}", escape_data(message)));
    }

    fn set_failed(&self, message: &str) {
        tracing::debug!(kind = "failure", "{message}");
        self.failed.store(true, Ordering::SeqCst);
        self.write_line(&format!("::error::{}", escape_data(message)));
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
