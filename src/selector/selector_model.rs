use serde::{Deserialize, Serialize};

/// Structured input for manual selector construction. Absent or empty fields
/// simply contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorSpec {
    pub tag: Option<String>,
    pub id: Option<String>,
    /// Class names in the order the user listed them.
    #[serde(default)]
    pub classes: Vec<String>,
    pub attribute: Option<String>,
    pub attr_value: Option<String>,
}

impl SelectorSpec {
    /// Spec from a space-separated class list as typed in the CLI.
    pub fn split_classes(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorPair {
    pub css: String,
    pub xpath: String,
}
