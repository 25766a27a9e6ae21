// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup of the host's Jupyter data directory.
//!
//! Kernels are installed under `<root>/kernels/<name>`. The root comes from
//! an [`EnvironmentProvider`] so tests can avoid running `jupyter`.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Program queried for the data directory when none is configured.
pub const DEFAULT_JUPYTER_COMMAND: &str = "jupyter";

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("failed to run `{program} --data-dir`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program} --data-dir` exited with {status}: {stderr}")]
    Failed { program: String, status: std::process::ExitStatus, stderr: String },

    #[error("`{program} --data-dir` printed no directory")]
    Empty { program: String },

    #[error("`{program} --data-dir` printed a non-UTF-8 path")]
    NotUtf8 { program: String },
}

/// Source of the Jupyter kernel installation root.
pub trait EnvironmentProvider {
    fn kernel_root(&self) -> Result<PathBuf, EnvironmentError>;
}

/// Asks the Jupyter CLI (`jupyter --data-dir`) for its data directory.
#[derive(Debug, Clone)]
pub struct JupyterDataDir {
    program: String,
}

impl JupyterDataDir {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for JupyterDataDir {
    fn default() -> Self {
        Self::new(DEFAULT_JUPYTER_COMMAND)
    }
}

impl EnvironmentProvider for JupyterDataDir {
    fn kernel_root(&self) -> Result<PathBuf, EnvironmentError> {
        tracing::debug!(program = %self.program, "querying jupyter data directory");
        let output = Command::new(&self.program)
            .arg("--data-dir")
            .output()
            .map_err(|source| EnvironmentError::Spawn { program: self.program.clone(), source })?;

        if !output.status.success() {
            return Err(EnvironmentError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| EnvironmentError::NotUtf8 { program: self.program.clone() })?;
        let dir = stdout.trim();
        if dir.is_empty() {
            return Err(EnvironmentError::Empty { program: self.program.clone() });
        }
        Ok(PathBuf::from(dir))
    }
}

/// Provider that always answers with the same directory.
#[derive(Debug, Clone)]
pub struct FixedKernelRoot(pub PathBuf);

impl FixedKernelRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
}

impl EnvironmentProvider for FixedKernelRoot {
    fn kernel_root(&self) -> Result<PathBuf, EnvironmentError> {
        Ok(self.0.clone())
    }
}

impl<P: EnvironmentProvider + ?Sized> EnvironmentProvider for &P {
    fn kernel_root(&self) -> Result<PathBuf, EnvironmentError> {
        (**self).kernel_root()
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
