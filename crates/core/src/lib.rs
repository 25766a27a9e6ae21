// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ski-core: builds Jupyter kernel specs that run an interpreter inside a
//! Singularity/Apptainer image, and installs them into the Jupyter data dir.

pub mod env;
pub mod install;
pub mod kernel_spec;
pub mod language;
pub mod launch;
pub mod naming;

pub use env::{EnvironmentError, EnvironmentProvider, FixedKernelRoot, JupyterDataDir};
pub use install::{
    build_and_install, InstallError, InstallOptions, Installation, Installer, KernelPlan,
};
pub use kernel_spec::KernelSpec;
pub use language::{Language, UnsupportedLanguage};
pub use launch::ContainerLaunch;
