// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Building and installing a container kernel spec.
//!
//! [`Installer::plan`] validates the inputs and resolves every default
//! without touching the Jupyter environment. [`Installer::install`] then
//! looks up the kernel root and writes `<root>/kernels/<name>/kernel.json`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::env::{EnvironmentError, EnvironmentProvider};
use crate::kernel_spec::{KernelSpec, KERNEL_JSON};
use crate::language::{Language, UnsupportedLanguage};
use crate::launch::{ContainerLaunch, DEFAULT_CONTAINER_COMMAND};
use crate::naming;

/// Directory under the Jupyter data dir that holds kernel specs.
pub const KERNELS_DIR: &str = "kernels";

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Singularity image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error("failed to create kernel directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize kernel spec: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl InstallError {
    /// Input validation failures, as opposed to environment or I/O faults.
    pub fn is_validation(&self) -> bool {
        matches!(self, InstallError::ImageNotFound { .. } | InstallError::UnsupportedLanguage(_))
    }
}

/// Raw installation inputs, as collected from the command line.
///
/// Empty strings count as "not provided" for every optional field.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub image_path: PathBuf,
    pub kernel_name: Option<String>,
    pub display_name: Option<String>,
    /// `python` or `r`; anything else fails with `UnsupportedLanguage`
    pub language: String,
    pub python_path: Option<String>,
    pub r_path: Option<String>,
    pub bind_paths: Vec<String>,
    pub container_command: Option<String>,
}

impl InstallOptions {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            kernel_name: None,
            display_name: None,
            language: Language::default().as_str().to_string(),
            python_path: None,
            r_path: None,
            bind_paths: Vec::new(),
            container_command: None,
        }
    }

    pub fn kernel_name(mut self, name: impl Into<String>) -> Self {
        self.kernel_name = Some(name.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn python_path(mut self, path: impl Into<String>) -> Self {
        self.python_path = Some(path.into());
        self
    }

    pub fn r_path(mut self, path: impl Into<String>) -> Self {
        self.r_path = Some(path.into());
        self
    }

    pub fn bind(mut self, spec: impl Into<String>) -> Self {
        self.bind_paths.push(spec.into());
        self
    }

    pub fn container_command(mut self, command: impl Into<String>) -> Self {
        self.container_command = Some(command.into());
        self
    }
}

/// A validated kernel, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelPlan {
    pub kernel_name: String,
    pub language: Language,
    pub spec: KernelSpec,
}

impl KernelPlan {
    /// `<root>/kernels/<kernel_name>`
    pub fn kernel_dir(&self, root: &Path) -> PathBuf {
        root.join(KERNELS_DIR).join(&self.kernel_name)
    }
}

/// Outcome of a successful installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    pub kernel_name: String,
    pub display_name: String,
    pub language: Language,
    /// Path of the written `kernel.json`
    pub path: PathBuf,
    pub spec: KernelSpec,
}

/// Installs kernel specs under the root reported by an [`EnvironmentProvider`].
pub struct Installer<E> {
    env: E,
}

impl<E: EnvironmentProvider> Installer<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Validate inputs and build the kernel spec.
    ///
    /// The image must exist (checked first), then the language must be
    /// `python` or `r`. Nothing is written.
    pub fn plan(&self, options: &InstallOptions) -> Result<KernelPlan, InstallError> {
        if !options.image_path.exists() {
            return Err(InstallError::ImageNotFound { path: options.image_path.clone() });
        }
        let language: Language = options.language.parse()?;

        let kernel_name = provided(&options.kernel_name)
            .map(str::to_string)
            .unwrap_or_else(|| naming::default_kernel_name(&options.image_path, language));
        if !naming::is_portable_kernel_name(&kernel_name) {
            tracing::warn!(
                kernel_name = %kernel_name,
                "kernel name may not be discoverable by Jupyter"
            );
        }
        let display_name = provided(&options.display_name)
            .map(str::to_string)
            .unwrap_or_else(|| naming::default_display_name(&kernel_name));

        let interpreter = match language {
            Language::Python => provided(&options.python_path),
            Language::R => provided(&options.r_path),
        }
        .unwrap_or(language.default_interpreter());

        let command = provided(&options.container_command).unwrap_or(DEFAULT_CONTAINER_COMMAND);
        if options.image_path.to_str().is_none() {
            tracing::warn!(
                path = %options.image_path.display(),
                "image path is not valid UTF-8; kernel argv will not match it"
            );
        }
        let argv = ContainerLaunch::new(options.image_path.to_string_lossy())
            .command(command)
            .binds(options.bind_paths.iter().cloned())
            .argv(language, interpreter);
        tracing::debug!(?argv, "built kernel argv");

        let spec = KernelSpec {
            argv,
            display_name,
            language: language.jupyter_tag().to_string(),
        };
        Ok(KernelPlan { kernel_name, language, spec })
    }

    /// Validate, build, and write the kernel spec, overwriting any previous
    /// install of the same kernel name.
    pub fn install(&self, options: &InstallOptions) -> Result<Installation, InstallError> {
        let plan = self.plan(options)?;
        let root = self.env.kernel_root()?;
        self.write(plan, &root)
    }

    fn write(&self, plan: KernelPlan, root: &Path) -> Result<Installation, InstallError> {
        let dir = plan.kernel_dir(root);
        tracing::debug!(dir = %dir.display(), "writing kernel spec");
        std::fs::create_dir_all(&dir)
            .map_err(|source| InstallError::CreateDir { path: dir.clone(), source })?;

        let path = dir.join(KERNEL_JSON);
        let json = plan.spec.to_pretty_json()?;
        std::fs::write(&path, json)
            .map_err(|source| InstallError::Write { path: path.clone(), source })?;

        Ok(Installation {
            kernel_name: plan.kernel_name,
            display_name: plan.spec.display_name.clone(),
            language: plan.language,
            path,
            spec: plan.spec,
        })
    }
}

/// One-shot install against `env`; see [`Installer::install`].
pub fn build_and_install<E: EnvironmentProvider>(
    options: &InstallOptions,
    env: E,
) -> Result<Installation, InstallError> {
    Installer::new(env).install(options)
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
