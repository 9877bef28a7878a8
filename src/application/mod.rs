//! Application layer: command language and batch interpreter
//!
//! This layer turns text into domain operations and reports their outcome.

pub mod command;
pub mod error;
pub mod error_ext;
pub mod interpreter;
pub mod render;

pub use command::Command;
pub use error::{ApplicationError, ApplicationResult, ParseError};
pub use error_ext::IoResultExt;
pub use interpreter::{Interpreter, Outcome, RunSummary};
pub use render::ListStyle;
