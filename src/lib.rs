//! inam-ui is a CLI for copying ready-made React UI components into a
//! project. The generator core is a library so it can be driven
//! programmatically and tested without a terminal.

/// Command-line interface module for the inam-ui application
pub mod cli;

/// Configuration handling
/// Supports .inamrc, .inamrc.json, .inamrc.yaml and inam.config.json
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Project dependency checks against package.json
pub mod deps;

/// Error types and handling for the application
pub mod error;

/// Core component generation logic
pub mod generator;

/// Generated file header rendering
pub mod header;

/// The `list` command: filtering and grouping of component metadata
pub mod list;

/// Discovery of the shipped templates directory
pub mod locate;

/// Logger initialization
pub mod logger;

/// Static per-component metadata
pub mod metadata;

/// User input and interaction handling
pub mod prompt;

/// The component registry: identifier to template file name mapping
pub mod registry;
