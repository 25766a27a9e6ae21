// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container `exec` command line that Jupyter runs to start a kernel.

use crate::language::Language;

/// Container runtime used when none is configured.
pub const DEFAULT_CONTAINER_COMMAND: &str = "singularity";

/// Token Jupyter replaces with the host connection file path at launch.
pub const CONNECTION_FILE_PLACEHOLDER: &str = "{connection_file}";

/// Fixed path the connection file is mounted at inside the container.
pub const CONNECTION_SPEC_PATH: &str = "/connection-spec";

/// Bind mount flag understood by Singularity and Apptainer.
pub const BIND_FLAG: &str = "--bind";

/// How to run an image with the runtime's `exec` subcommand.
///
/// Rendered argv layout:
///
/// ```text
/// <command> exec --bind {connection_file}:/connection-spec [--bind <spec>]...
///     <image> <interpreter args>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLaunch {
    /// Runtime binary (e.g. `singularity`, `apptainer`)
    pub command: String,
    /// Image path, written exactly as given
    pub image: String,
    /// Extra bind specs, each emitted as its own `--bind` pair
    pub binds: Vec<String>,
}

impl ContainerLaunch {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            command: DEFAULT_CONTAINER_COMMAND.to_string(),
            image: image.into(),
            binds: Vec::new(),
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn binds<I, S>(mut self, binds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binds.extend(binds.into_iter().map(Into::into));
        self
    }

    /// The connection file mount every kernel needs.
    pub fn connection_bind() -> String {
        format!("{}:{}", CONNECTION_FILE_PLACEHOLDER, CONNECTION_SPEC_PATH)
    }

    /// Runtime invocation up to and including the image path.
    pub fn runtime_args(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(5 + 2 * self.binds.len());
        argv.push(self.command.clone());
        argv.push("exec".to_string());
        argv.push(BIND_FLAG.to_string());
        argv.push(Self::connection_bind());
        for bind in &self.binds {
            if bind.chars().any(|c| c.is_whitespace() || c.is_control()) {
                tracing::warn!(bind = %bind, "bind spec contains whitespace or control characters");
            }
            argv.push(BIND_FLAG.to_string());
            argv.push(bind.clone());
        }
        argv.push(self.image.clone());
        argv
    }

    /// Full kernel argv: runtime invocation followed by the interpreter launch.
    pub fn argv(&self, language: Language, interpreter: &str) -> Vec<String> {
        let mut argv = self.runtime_args();
        argv.extend(language.launch_args(interpreter));
        argv
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
