//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running quickfilter over stdin.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use assert_cmd::Command;
use std::path::Path;

/// Returns a Command configured to run the quickfilter binary
pub fn quickfilter_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quickfilter"));
    cmd.env_remove("QUICKFILTER_CONFIG")
        .env_remove("QUICKFILTER_DEBUG")
        .env_remove("QUICKFILTER_LOG");
    cmd
}

/// Create a filter run builder
pub fn filter(patterns: &[&str]) -> FilterBuilder {
    FilterBuilder::new(patterns)
}

/// Fluent builder for one filter invocation
pub struct FilterBuilder {
    flags: Vec<String>,
    patterns: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Vec<u8>,
}

impl FilterBuilder {
    fn new(patterns: &[&str]) -> Self {
        Self {
            flags: Vec::new(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            envs: Vec::new(),
            stdin: Vec::new(),
        }
    }

    /// Pass `-v` as the first argument
    pub fn inverted(self) -> Self {
        self.flag("-v")
    }

    /// Add an option ahead of the patterns
    pub fn flag(mut self, flag: &str) -> Self {
        self.flags.push(flag.to_string());
        self
    }

    /// Use a config file
    pub fn config(self, path: &Path) -> Self {
        self.flag("-C").flag(path.to_str().unwrap())
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Bytes fed on stdin
    pub fn stdin(mut self, input: impl AsRef<[u8]>) -> Self {
        self.stdin = input.as_ref().to_vec();
        self
    }

    fn command(&self) -> Command {
        let mut cmd = quickfilter_cmd();
        cmd.args(&self.flags).args(&self.patterns);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run and assert success, returning stdout
    pub fn output(self) -> String {
        let assert = self.run().success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    }

    /// Run and return the assert handle
    pub fn run(self) -> assert_cmd::assert::Assert {
        let mut cmd = self.command();
        cmd.write_stdin(self.stdin).assert()
    }
}
