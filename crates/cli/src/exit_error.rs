// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! `run()` returns `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` owns process termination and the `Error:` line.

use std::fmt;

use ski_core::InstallError;

/// Exit code for every failed installation.
pub const FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<InstallError> for ExitError {
    fn from(err: InstallError) -> Self {
        if !err.is_validation() {
            tracing::debug!(error = ?err, "installation failed");
        }
        Self::new(FAILURE, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Split a top-level error into the exit code and the message to print.
pub fn exit_status(err: &anyhow::Error) -> (i32, String) {
    match err.downcast_ref::<ExitError>() {
        Some(exit) => (exit.code, exit.message.clone()),
        None => (FAILURE, format!("{:#}", err)),
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
