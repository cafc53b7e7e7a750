//! User input and interaction handling.
//! When no component is given on the command line, the CLI falls back to an
//! interactive picker for the component and the target path.

use dialoguer::{FuzzySelect, Input};

use crate::error::{Error, Result};
use crate::registry::ComponentRegistry;

/// Asks the user to pick a component from the registry.
pub fn prompt_component(registry: &ComponentRegistry) -> Result<String> {
    let names = registry.names();
    let selection = FuzzySelect::new()
        .with_prompt("Which component would you like to generate?")
        .items(&names)
        .default(0)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    Ok(names[selection].clone())
}

/// Asks the user where to place the component, defaulting to the configured
/// path. Blank input is rejected.
pub fn prompt_target_path(default_path: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Where would you like to place the component?")
        .default(default_path.to_string())
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Please enter a valid path")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    Ok(input)
}
