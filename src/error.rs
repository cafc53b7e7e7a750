//! Error handling for the inam-ui CLI.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for inam-ui operations.
///
/// This enum represents all possible errors that can occur within the application.
/// It implements the standard Error trait through thiserror's derive macro.
///
/// An existing destination file without `--force` is deliberately not an error;
/// see [`crate::generator::GenerateOutcome::SkippedExisting`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The requested component is not in the registry
    #[error("\"{name}\" is not a valid component.")]
    UnknownComponent {
        name: String,
        /// Registered identifiers sharing a substring with the input, at most 3
        suggestions: Vec<String>,
        /// Every registered identifier, for when there are no suggestions
        available: Vec<String>,
    },

    /// The registry knows the component but its template file is missing.
    /// This indicates a broken installation, not user error.
    #[error("Template for \"{name}\" not found at {}.", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    /// No templates directory exists at any of the probed locations
    #[error("No templates directory found (tried: {}).", format_paths(.tried))]
    TemplateRootNotFound { tried: Vec<PathBuf> },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur while rendering the file header
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr, with component suggestions for
/// `UnknownComponent`, and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    if let Error::UnknownComponent { suggestions, available, .. } = &err {
        if !suggestions.is_empty() {
            eprintln!("\nDid you mean one of these?");
            for name in suggestions {
                eprintln!("- {}", name);
            }
        } else {
            eprintln!("\nAvailable components:");
            for name in available {
                eprintln!("- {}", name);
            }
        }
    }
    std::process::exit(1);
}
