// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kernel languages and their interpreter launch conventions.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::launch::CONNECTION_SPEC_PATH;

/// Interpreter language a kernel runs inside the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    R,
}

/// Returned when a language name is neither `python` nor `r`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Name accepted on the command line (`python` or `r`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::R => "r",
        }
    }

    /// Tag written to `kernel.json`, in the casing Jupyter front-ends expect.
    pub fn jupyter_tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::R => "R",
        }
    }

    /// Capitalized name for status messages.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::R => "R",
        }
    }

    /// Interpreter looked up on the container's `PATH` when none is given.
    pub fn default_interpreter(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::R => "R",
        }
    }

    /// Suffix appended to default kernel names so a Python and an R kernel
    /// built from the same image do not collide.
    pub fn kernel_name_suffix(&self) -> Option<&'static str> {
        match self {
            Language::Python => None,
            Language::R => Some("-r"),
        }
    }

    /// Interpreter invocation that starts the kernel against the connection
    /// file mounted at [`CONNECTION_SPEC_PATH`].
    pub fn launch_args(&self, interpreter: &str) -> Vec<String> {
        let args: &[&str] = match self {
            Language::Python => &["-m", "ipykernel_launcher", "-f", CONNECTION_SPEC_PATH],
            Language::R => &["--slave", "-e", "IRkernel::main()", "--args", CONNECTION_SPEC_PATH],
        };
        std::iter::once(interpreter).chain(args.iter().copied()).map(String::from).collect()
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Language::Python),
            "r" => Ok(Language::R),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
