//! Domain layer: the namespace tree and its rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod path;
pub mod tree;

pub use entities::{CollisionPolicy, Node, Removed};
pub use error::{DomainError, DomainResult};
pub use path::NodePath;
pub use tree::{Entry, NamespaceTree, TreeIterator};
