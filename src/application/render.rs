//! Listing styles for the LIST command

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::NamespaceTree;
use crate::tree_traits::TreeDisplay;

/// How LIST renders the namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Two spaces of indentation per level.
    #[default]
    Indent,
    /// Box-drawing tree below a `.` root.
    Tree,
}

impl ListStyle {
    pub fn render(self, tree: &NamespaceTree) -> String {
        match self {
            ListStyle::Indent => tree.list(),
            ListStyle::Tree => tree.to_tree_string().to_string().trim_end().to_string(),
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStyle::Indent => write!(f, "indent"),
            ListStyle::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for ListStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "indent" => Ok(ListStyle::Indent),
            "tree" => Ok(ListStyle::Tree),
            other => Err(format!("unknown list style '{other}' (expected indent or tree)")),
        }
    }
}
