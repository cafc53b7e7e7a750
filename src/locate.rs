//! Discovery of the shipped templates directory.
//!
//! The generator itself takes a single template root; this module is the CLI
//! shell's way of finding that root across the layouts the binary may run
//! from: an installed layout with `templates/` next to the executable, the
//! cargo layout with the executable under `target/<profile>/`, and the
//! current working directory as a last resort.

use std::path::{Path, PathBuf};

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};

/// Builds the ordered list of candidate template roots.
///
/// # Arguments
/// * `exe_dir` - Directory containing the running executable
/// * `cwd` - Current working directory
pub fn candidate_roots(exe_dir: &Path, cwd: &Path) -> Vec<PathBuf> {
    vec![
        exe_dir.join(TEMPLATES_DIR),
        exe_dir.join("..").join("..").join(TEMPLATES_DIR),
        cwd.join(TEMPLATES_DIR),
    ]
}

/// Returns the first candidate that exists as a directory.
///
/// # Errors
/// * `Error::TemplateRootNotFound` listing every candidate tried, so a broken
///   installation is diagnosable from the message alone
pub fn first_existing_root(candidates: Vec<PathBuf>) -> Result<PathBuf> {
    for candidate in &candidates {
        if candidate.is_dir() {
            log::debug!("Using templates at {}", candidate.display());
            return Ok(candidate.clone());
        }
    }
    Err(Error::TemplateRootNotFound { tried: candidates })
}

/// Locates the templates directory relative to the running executable,
/// falling back to the current working directory.
pub fn find_template_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    let cwd = std::env::current_dir()?;
    first_existing_root(candidate_roots(&exe_dir, &cwd))
}
