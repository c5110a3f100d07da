//! Action inputs.

use std::{collections::HashMap, env};

/// Source of raw action inputs.
///
/// Missing inputs are returned as empty strings, like the GitHub Actions
/// toolkit does.
pub trait InputReader: Send + Sync {
    /// Get an input value, trimmed.
    fn get_input(&self, name: &str) -> String;
}

/// Reads inputs from `INPUT_*` environment variables.
#[derive(Clone, Default)]
pub struct EnvInputReader {
    _private: (),
}

impl EnvInputReader {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Environment variable name of an input, e.g. `INPUT_DRY-RUN` for `dry-run`.
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputReader for EnvInputReader {
    fn get_input(&self, name: &str) -> String {
        env::var(Self::variable_name(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// In-memory inputs.
#[derive(Clone, Default, Debug)]
pub struct MemoryInputReader {
    inputs: HashMap<String, String>,
}

impl MemoryInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.set_input(name, value);
        self
    }

    pub fn set_input<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.inputs.insert(name.into(), value.into());
    }
}

impl InputReader for MemoryInputReader {
    fn get_input(&self, name: &str) -> String {
        self.inputs
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// Inputs from an inner reader, with some values replaced.
pub struct OverrideInputReader<R> {
    inner: R,
    overrides: MemoryInputReader,
}

impl<R: InputReader> OverrideInputReader<R> {
    pub fn new(inner: R, overrides: MemoryInputReader) -> Self {
        Self { inner, overrides }
    }
}

impl<R: InputReader> InputReader for OverrideInputReader<R> {
    fn get_input(&self, name: &str) -> String {
        match self.overrides.inputs.get(name) {
            Some(_) => self.overrides.get_input(name),
            None => self.inner.get_input(name),
        }
    }
}
