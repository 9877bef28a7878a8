//! Service container for dependency injection
//!
//! Wires settings into the tree and interpreter.

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::application::{Interpreter, RunSummary};
use crate::config::Settings;
use crate::domain::NamespaceTree;
use crate::infrastructure::traits::CommandSource;
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding the application settings and building services from them.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,
}

impl ServiceContainer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Empty tree using the configured collision policy.
    pub fn tree(&self) -> NamespaceTree {
        NamespaceTree::with_policy(self.settings.on_collision)
    }

    /// Interpreter over a fresh tree, writing to `out`.
    pub fn interpreter<W: Write>(&self, out: W) -> Interpreter<W> {
        Interpreter::new(self.tree(), out).with_style(self.settings.list_style)
    }

    /// Read all lines from `source` and run them as one batch.
    pub fn run_source<W: Write>(
        &self,
        source: &dyn CommandSource,
        out: W,
    ) -> InfraResult<RunSummary> {
        debug!("run_source: {}", source.describe());
        let lines = source
            .read_lines()
            .map_err(|e| InfraError::io(format!("read {}", source.describe()), e))?;
        let mut interpreter = self.interpreter(out);
        Ok(interpreter.run(lines)?)
    }
}
