//! In-memory namespace tree and a line-oriented command interpreter.
//!
//! ```
//! use nstree::application::Interpreter;
//! use nstree::domain::NamespaceTree;
//!
//! let mut interpreter = Interpreter::new(NamespaceTree::new(), Vec::new());
//! interpreter
//!     .run(["CREATE fruits", "CREATE fruits/apples", "LIST"])
//!     .unwrap();
//! assert_eq!(interpreter.tree().list(), "fruits\n  apples");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::{Command, Interpreter, ListStyle, RunSummary};
pub use domain::{CollisionPolicy, DomainError, NamespaceTree, Node, NodePath};
