//! Core component generation logic.
//!
//! The generator resolves a requested component against the registry, reads
//! its template from the injected template root, prepends the file header when
//! needed, and writes the result to the target directory. It returns
//! structured outcomes and never prints or exits, so it stays usable outside
//! a terminal context.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use crate::header::apply_header;
use crate::registry::ComponentRegistry;

/// A single generation request, constructed per invocation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// User-supplied component name, any casing
    pub component: String,
    /// Destination directory, relative or absolute
    pub target_dir: PathBuf,
    /// Overwrite an existing destination file
    pub force: bool,
    /// Prepend the generated file header
    pub add_header: bool,
}

impl GenerateRequest {
    pub fn new<P: Into<PathBuf>>(component: &str, target_dir: P) -> Self {
        Self {
            component: component.to_string(),
            target_dir: target_dir.into(),
            force: false,
            add_header: true,
        }
    }
}

/// Result of a successful `generate` call.
#[derive(Debug, PartialEq)]
pub enum GenerateOutcome {
    /// The component file was written to this path
    Written(PathBuf),
    /// The destination already exists and `force` was not set; nothing was
    /// touched. A deliberate safety stop, not an error.
    SkippedExisting(PathBuf),
}

/// Generates component files from the registry's templates.
pub struct Generator {
    registry: ComponentRegistry,
    template_root: PathBuf,
}

impl Generator {
    /// Creates a generator over a registry and a template root directory.
    ///
    /// The template root is injected by the caller (see
    /// [`crate::locate::find_template_root`]), so tests can point the
    /// generator at any directory.
    pub fn new<P: Into<PathBuf>>(registry: ComponentRegistry, template_root: P) -> Self {
        Self { registry, template_root: template_root.into() }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolves a user-supplied name to its canonical identifier.
    ///
    /// # Errors
    /// * `Error::UnknownComponent` carrying up to 3 suggestions, plus the
    ///   full identifier list for when there are none
    pub fn resolve(&self, input: &str) -> Result<String> {
        match self.registry.resolve(input) {
            Some(name) => Ok(name.to_string()),
            None => Err(Error::UnknownComponent {
                name: input.to_string(),
                suggestions: self.registry.suggestions(input),
                available: self.registry.names(),
            }),
        }
    }

    /// Returns the template path for a canonical identifier, verifying that
    /// the file exists on disk.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` naming the missing path; this indicates a
    ///   packaging defect rather than user error
    pub fn template_path(&self, identifier: &str) -> Result<PathBuf> {
        let file_name = self.registry.template_file(identifier).ok_or_else(|| {
            Error::TemplateNotFound {
                name: identifier.to_string(),
                path: self.template_root.clone(),
            }
        })?;
        let path = self.template_root.join(file_name);
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                name: identifier.to_string(),
                path,
            });
        }
        Ok(path)
    }

    /// Materializes a component template in the request's target directory.
    ///
    /// # Arguments
    /// * `request` - The component, destination and flags for this invocation
    ///
    /// # Returns
    /// * `GenerateOutcome::Written` with the destination path on success
    /// * `GenerateOutcome::SkippedExisting` when the destination exists and
    ///   `force` is not set; the file is left byte-for-byte unchanged
    ///
    /// # Errors
    /// * `Error::UnknownComponent` - the name resolves to nothing
    /// * `Error::TemplateNotFound` - the template file is missing on disk
    /// * `Error::IoError` - reading the template or writing the destination
    ///   failed
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateOutcome> {
        let component = self.resolve(&request.component)?;
        let template_path = self.template_path(&component)?;

        let target_dir = absolutize(&request.target_dir);
        let destination = target_file(&target_dir, &component);

        if destination.exists() && !request.force {
            log::debug!(
                "Skipping \"{}\": {} already exists",
                component,
                destination.display()
            );
            return Ok(GenerateOutcome::SkippedExisting(destination));
        }

        let template_content = fs::read_to_string(&template_path)?;
        let content = if request.add_header {
            apply_header(&template_content, &component)?
        } else {
            template_content
        };

        fs::create_dir_all(&target_dir)?;
        fs::write(&destination, content)?;

        log::debug!("Wrote \"{}\" to {}", component, destination.display());
        Ok(GenerateOutcome::Written(destination))
    }
}

/// Resolves a possibly-relative path against the current working directory.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

fn target_file(target_dir: &Path, component: &str) -> PathBuf {
    target_dir.join(format!("{}.{}", component, TEMPLATE_EXTENSION))
}
