// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default kernel and display names.

use std::path::Path;

use crate::language::Language;

/// Prefix of generated display names.
pub const DISPLAY_NAME_PREFIX: &str = "Singularity: ";

/// Kernel name derived from the image file name with its last extension
/// stripped (`/data/myimage.sif` → `myimage`). R kernels get a `-r` suffix.
pub fn default_kernel_name(image_path: &Path, language: Language) -> String {
    let stem = image_path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    match language.kernel_name_suffix() {
        Some(suffix) => format!("{}{}", stem, suffix),
        None => stem,
    }
}

pub fn default_display_name(kernel_name: &str) -> String {
    format!("{}{}", DISPLAY_NAME_PREFIX, kernel_name)
}

/// Whether Jupyter's kernel discovery will accept this directory name.
///
/// Jupyter only lists kernels whose names match `[A-Za-z0-9._-]+`.
pub fn is_portable_kernel_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
