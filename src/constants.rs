//! Common constants used throughout the inam-ui application.

/// Supported configuration file names, in order of priority
pub const CONFIG_FILES: [&str; 4] =
    [".inamrc", ".inamrc.json", ".inamrc.yaml", "inam.config.json"];

/// Name of the directory that holds the shipped component templates
pub const TEMPLATES_DIR: &str = "templates";

/// Extension of generated component files
pub const TEMPLATE_EXTENSION: &str = "tsx";

/// Marker that identifies an already-headered template
pub const HEADER_MARKER: &str = "/**";
