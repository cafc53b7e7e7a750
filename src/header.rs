//! Generated file header handling.
//! Renders the branded comment block that is prepended to generated
//! components, using MiniJinja for placeholder substitution.

use crate::constants::HEADER_MARKER;
use crate::error::{Error, Result};
use minijinja::Environment;

/// Header template prepended to generated components.
pub const FILE_HEADER: &str = r#"/**
 * {{ component }} component
 *
 * Generated by the inam-ui CLI.
 * Docs: https://inam-ui.vercel.app/docs/components/{{ component | lower }}
 *
 * This file is yours now. Edit it freely; re-running the CLI with --force
 * will replace it with a fresh copy of the template.
 */
"#;

/// Renders the file header for a component.
///
/// # Arguments
/// * `component` - Canonical component identifier
///
/// # Returns
/// * `Result<String>` - Rendered header block
///
/// # Errors
/// * `Error::TemplateError` if rendering fails
pub fn render_header(component: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("header", FILE_HEADER)
        .map_err(|e| Error::TemplateError(e.to_string()))?;

    let tmpl = env
        .get_template("header")
        .map_err(|e| Error::TemplateError(e.to_string()))?;

    tmpl.render(minijinja::context! { component => component })
        .map_err(|e| Error::TemplateError(e.to_string()))
}

/// Prepends the rendered header to `content` unless the content already
/// starts with the header marker. This keeps repeated forced generations
/// from stacking headers.
pub fn apply_header(content: &str, component: &str) -> Result<String> {
    if content.starts_with(HEADER_MARKER) {
        return Ok(content.to_string());
    }
    Ok(format!("{}{}", render_header(component)?, content))
}
