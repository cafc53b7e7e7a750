//! The component registry: the mapping from canonical component identifiers
//! to their template file names. Lookup is case-insensitive.

use indexmap::IndexMap;

/// Immutable mapping of canonical component identifiers to template file names.
///
/// Identifiers are unique; lookups normalize to lowercase before comparing.
/// The registry is passed into [`crate::generator::Generator`] at construction
/// time, so tests can supply their own entries instead of the built-in set.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    entries: IndexMap<String, String>,
}

impl ComponentRegistry {
    /// Returns the registry of components shipped with this release.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("Alert", "Alert.tsx"),
            ("Badge", "Badge.tsx"),
            ("Button", "Button.tsx"),
            ("Card", "Card.tsx"),
            ("Checkbox", "Checkbox.tsx"),
            ("Input", "Input.tsx"),
            ("Radio", "Radio.tsx"),
            ("Spinner", "Spinner.tsx"),
            ("Switch", "Switch.tsx"),
            ("Textarea", "Textarea.tsx"),
        ])
    }

    /// Builds a registry from `(identifier, template file name)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolves a user-supplied name to its canonical identifier,
    /// ignoring case.
    ///
    /// # Arguments
    /// * `input` - User-supplied component name, any casing
    ///
    /// # Returns
    /// * `Option<&str>` - The canonical identifier, or `None` if unknown
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let normalized = input.to_lowercase();
        self.entries
            .keys()
            .find(|name| name.to_lowercase() == normalized)
            .map(String::as_str)
    }

    /// Returns the template file name for a canonical identifier.
    pub fn template_file(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Finds registered identifiers similar to `input` for error messages.
    ///
    /// A name is considered similar when its lowercase form contains the
    /// lowercased input, or vice versa. Typos that drop a letter miss the
    /// substring check, so names sharing a prefix of at least 3 characters
    /// with the input also qualify. At most 3 suggestions are returned.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        let normalized = input.to_lowercase();
        self.entries
            .keys()
            .filter(|name| {
                let lower = name.to_lowercase();
                lower.contains(&normalized)
                    || normalized.contains(&lower)
                    || common_prefix_len(&lower, &normalized) >= 3
            })
            .take(3)
            .cloned()
            .collect()
    }

    /// All canonical identifiers, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
