//! The `list` command: filtering and grouping of component metadata.
//! Filtering and grouping are pure so they can be tested directly; only
//! `print_listing` touches stdout.

use indexmap::IndexMap;

use crate::metadata::{components_metadata, Category, ComponentMetadata};

/// Filters for the `list` command.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    /// Keep only components in this category (case-insensitive)
    pub category: Option<String>,
    /// Keep only components whose name or description contains this term
    pub search: Option<String>,
}

/// Applies the filter to the full metadata set.
pub fn filter_components(filter: &ListFilter) -> Vec<ComponentMetadata> {
    let mut components = components_metadata();

    if let Some(category) = &filter.category {
        let wanted = category.to_lowercase();
        components.retain(|c| c.category.to_string().to_lowercase() == wanted);
    }

    if let Some(search) = &filter.search {
        let term = search.to_lowercase();
        components.retain(|c| {
            c.name.to_lowercase().contains(&term)
                || c.description.to_lowercase().contains(&term)
        });
    }

    components
}

/// Groups components by category, preserving category declaration order.
pub fn group_by_category(
    components: Vec<ComponentMetadata>,
) -> IndexMap<Category, Vec<ComponentMetadata>> {
    let mut groups: IndexMap<Category, Vec<ComponentMetadata>> = IndexMap::new();
    for category in Category::ALL {
        groups.insert(category, Vec::new());
    }
    for component in components {
        if let Some(group) = groups.get_mut(&component.category) {
            group.push(component);
        }
    }
    groups.retain(|_, group| !group.is_empty());
    groups
}

/// Prints the grouped component listing for the `list` command.
pub fn print_listing(filter: &ListFilter) {
    let components = filter_components(filter);

    if components.is_empty() {
        match (&filter.category, &filter.search) {
            (Some(category), _) => {
                println!("No components found in category \"{}\"", category);
                let categories = Category::ALL
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Available categories: {}", categories);
            }
            (None, Some(search)) => {
                println!("No components found matching \"{}\"", search);
            }
            (None, None) => println!("No components available"),
        }
        return;
    }

    println!("Available components ({}):", components.len());
    println!();

    for (category, group) in group_by_category(components) {
        println!("{} ({}):", category, group.len());
        for component in &group {
            println!("  - {} - {}", component.name, component.description);
        }
        println!();
    }

    println!("Usage: inam-ui <component-name>");
    println!("Example: inam-ui button");
}
