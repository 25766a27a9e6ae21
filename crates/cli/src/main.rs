// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! singularity-kernel-install: register a Singularity image as a Jupyter kernel

mod color;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ski_core::{InstallOptions, Installer, JupyterDataDir};

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "singularity-kernel-install",
    version,
    about = "Install a Singularity image as a Jupyter kernel",
    styles = color::styles()
)]
struct Cli {
    /// Path to the Singularity image (.sif) file
    image_path: PathBuf,

    /// Kernel name (defaults to image filename)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Display name for the kernel
    #[arg(short = 'd', long)]
    display_name: Option<String>,

    /// Kernel language: python or r
    #[arg(short = 'l', long, default_value = "python")]
    language: String,

    /// Path to Python executable inside the container
    #[arg(short = 'p', long, default_value = "python")]
    python_path: String,

    /// Path to R executable inside the container
    #[arg(short = 'r', long, default_value = "R")]
    r_path: String,

    /// Additional bind mount (repeatable), passed to the runtime as `--bind <SPEC>`
    #[arg(short = 'b', long = "bind", value_name = "SPEC")]
    binds: Vec<String>,

    /// Container runtime to exec with [env: SKI_CONTAINER_COMMAND] [default: singularity]
    #[arg(short = 'c', long, value_name = "CMD")]
    container_command: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Cli {
    fn install_options(&self) -> InstallOptions {
        InstallOptions {
            image_path: self.image_path.clone(),
            kernel_name: self.name.clone(),
            display_name: self.display_name.clone(),
            language: self.language.clone(),
            python_path: Some(self.python_path.clone()),
            r_path: Some(self.r_path.clone()),
            bind_paths: self.binds.clone(),
            container_command: self.container_command.clone().or_else(env::container_command),
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = cli.install_options();
    let installer = Installer::new(JupyterDataDir::new(env::jupyter_command()));
    let installation = installer.install(&options).map_err(ExitError::from)?;
    output::print_installation(&installation, cli.output)
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli) {
        let (code, message) = exit_error::exit_status(&err);
        if !message.is_empty() {
            eprintln!("Error: {}", message);
        }
        std::process::exit(code);
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
