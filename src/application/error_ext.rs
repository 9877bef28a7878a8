//! Error conversion helpers for writes to the output sink

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an output error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(self.out, "{}", line).with_output_context("echo command")?;
    /// ```
    fn with_output_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_output_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Output {
            context: action.to_string(),
            source: e,
        })
    }
}
