//! Static per-component metadata used by the `list` command.

use std::fmt;

/// Category a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Form,
    Layout,
    Overlay,
    Feedback,
    Progress,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Form,
        Category::Layout,
        Category::Overlay,
        Category::Feedback,
        Category::Progress,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Form => "Form",
            Category::Layout => "Layout",
            Category::Overlay => "Overlay",
            Category::Feedback => "Feedback",
            Category::Progress => "Progress",
        };
        write!(f, "{}", name)
    }
}

/// Description of one shipped component.
#[derive(Debug, Clone)]
pub struct ComponentMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// Metadata for every shipped component, in registry order.
pub fn components_metadata() -> Vec<ComponentMetadata> {
    vec![
        ComponentMetadata {
            name: "Alert",
            description: "Alert component with multiple variants and auto-dismiss",
            category: Category::Feedback,
        },
        ComponentMetadata {
            name: "Badge",
            description: "Small status indicators and labels with variants",
            category: Category::Feedback,
        },
        ComponentMetadata {
            name: "Button",
            description: "A customizable button component with multiple variants and sizes",
            category: Category::Form,
        },
        ComponentMetadata {
            name: "Card",
            description: "A flexible card with header, content, and footer sections",
            category: Category::Layout,
        },
        ComponentMetadata {
            name: "Checkbox",
            description: "Checkbox component with checked and disabled states",
            category: Category::Form,
        },
        ComponentMetadata {
            name: "Input",
            description: "A flexible input field with label, validation states, and icon support",
            category: Category::Form,
        },
        ComponentMetadata {
            name: "Radio",
            description: "Radio button component with group functionality",
            category: Category::Form,
        },
        ComponentMetadata {
            name: "Spinner",
            description: "Loading spinner component with multiple visual styles",
            category: Category::Progress,
        },
        ComponentMetadata {
            name: "Switch",
            description: "Toggle switch component with smooth animations",
            category: Category::Form,
        },
        ComponentMetadata {
            name: "Textarea",
            description: "A simple textarea component with label and validation states",
            category: Category::Form,
        },
    ]
}
