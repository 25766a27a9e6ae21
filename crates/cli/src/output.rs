// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use ski_core::Installation;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// The two status lines printed after a successful install.
pub fn installation_lines(installation: &Installation) -> [String; 2] {
    [
        format!(
            "Singularity {} kernel '{}' installed successfully!",
            installation.language.label(),
            crate::color::header(&installation.display_name)
        ),
        format!(
            "Kernel specification file: {}",
            crate::color::context(&installation.path.display().to_string())
        ),
    ]
}

pub fn print_installation(installation: &Installation, format: OutputFormat) -> anyhow::Result<()> {
    format_or_json(format, installation, || {
        for line in installation_lines(installation) {
            println!("{}", line);
        }
    })
}
