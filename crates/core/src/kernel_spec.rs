// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `kernel.json` document Jupyter reads to launch a kernel.

use serde::{Deserialize, Serialize};

/// File name Jupyter looks for inside each kernel directory.
pub const KERNEL_JSON: &str = "kernel.json";

/// A Jupyter kernel specification.
///
/// See [Kernel Specs](https://jupyter-client.readthedocs.io/en/stable/kernels.html#kernel-specs).
/// Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Command line Jupyter executes to start the kernel. Contains the
    /// `{connection_file}` placeholder, substituted by Jupyter at launch.
    pub argv: Vec<String>,

    /// Name shown in the kernel picker
    pub display_name: String,

    /// Language tag used by front-ends for highlighting
    pub language: String,
}

impl KernelSpec {
    /// Render as two-space indented JSON with a trailing newline.
    ///
    /// Output is a pure function of the spec, so reinstalling the same
    /// kernel produces a byte-identical file.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "kernel_spec_tests.rs"]
mod tests;
