// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use ski_core::env::DEFAULT_JUPYTER_COMMAND;

/// Default tracing filter when `SKI_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Container runtime for `argv[0]` (`SKI_CONTAINER_COMMAND`), when set.
/// The `--container-command` flag takes precedence.
pub fn container_command() -> Option<String> {
    non_empty("SKI_CONTAINER_COMMAND")
}

/// Program asked for the Jupyter data dir: `SKI_JUPYTER_COMMAND` > `jupyter`
pub fn jupyter_command() -> String {
    non_empty("SKI_JUPYTER_COMMAND").unwrap_or_else(|| DEFAULT_JUPYTER_COMMAND.to_string())
}

/// Tracing filter directive: `SKI_LOG` > `warn`
pub fn log_filter() -> String {
    non_empty("SKI_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
