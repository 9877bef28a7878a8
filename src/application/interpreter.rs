//! Batch interpreter for the command language
//!
//! Drives a [`NamespaceTree`] from command lines and writes echoes, listings
//! and failure messages to an output sink.

use std::io::Write;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, Command, IoResultExt, ListStyle, ParseError};
use crate::domain::{DomainError, DomainResult, NamespaceTree};

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing echoed.
    Skipped,
    Done,
    /// The operation failed and the failure was reported on the output.
    Failed(DomainError),
}

/// Counters for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands parsed and executed, failed ones included.
    pub executed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Executes command lines against a tree.
///
/// Per-command failures of CREATE, DELETE and MOVE are reported as
/// `Cannot <action> <path> - <reason>` and the batch continues. A line that
/// does not parse stops the batch with an error.
pub struct Interpreter<W: Write> {
    tree: NamespaceTree,
    out: W,
    style: ListStyle,
    summary: RunSummary,
}

impl<W: Write> Interpreter<W> {
    pub fn new(tree: NamespaceTree, out: W) -> Self {
        Self {
            tree,
            out,
            style: ListStyle::default(),
            summary: RunSummary::default(),
        }
    }

    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Give back the tree and the output sink.
    pub fn into_parts(self) -> (NamespaceTree, W) {
        (self.tree, self.out)
    }

    /// Run every line in order, stopping at the first unparsable one.
    #[instrument(level = "debug", skip_all)]
    pub fn run<I, S>(&mut self, lines: I) -> ApplicationResult<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.execute_line(line.as_ref())?;
        }
        self.out.flush().with_output_context("flush")?;
        info!(
            "batch done: {} executed, {} failed",
            self.summary.executed, self.summary.failed
        );
        Ok(self.summary)
    }

    /// Parse, echo and execute one line.
    ///
    /// The line is echoed once its keyword is recognised; blank lines are
    /// skipped. A missing operand fails the line, not the batch.
    #[instrument(level = "debug", skip(self))]
    pub fn execute_line(&mut self, line: &str) -> ApplicationResult<Outcome> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(ParseError::MissingArgument { command, argument }) => {
                debug!("{}: missing {}", command, argument);
                writeln!(self.out, "{}", line).with_output_context("echo command")?;
                return self.report_incomplete(command, line);
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(self.out, "{}", line).with_output_context("echo command")?;
        self.execute(&command)
    }

    /// Execute an already parsed command.
    pub fn execute(&mut self, command: &Command) -> ApplicationResult<Outcome> {
        debug!("execute: {}", command);
        self.summary.executed += 1;
        let result = match command {
            Command::Create(path) => self.tree.create(path),
            Command::Delete(path) => self.tree.delete(path).map(|_| ()),
            Command::Move { from, to } => self.tree.move_node(from, to),
            Command::List => {
                let listing = self.style.render(&self.tree);
                writeln!(self.out, "{}", listing).with_output_context("list")?;
                Ok(())
            }
        };
        self.report(command, result)
    }

    /// Report a recognised command lacking an operand as an empty-path failure.
    fn report_incomplete(&mut self, keyword: &str, line: &str) -> ApplicationResult<Outcome> {
        self.summary.executed += 1;
        self.summary.failed += 1;
        let err = DomainError::InvalidPath;
        // the first operand, if any, is the MOVE source
        let subject = line.split_whitespace().nth(1).unwrap_or_default();
        writeln!(
            self.out,
            "Cannot {} {} - {}",
            keyword.to_ascii_lowercase(),
            subject,
            err
        )
        .with_output_context("report failure")?;
        Ok(Outcome::Failed(err))
    }

    fn report(&mut self, command: &Command, result: DomainResult<()>) -> ApplicationResult<Outcome> {
        match result {
            Ok(()) => Ok(Outcome::Done),
            Err(err) => {
                self.summary.failed += 1;
                let subject = command
                    .subject()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                debug!("{} {} failed: {}", command.action(), subject, err);
                writeln!(self.out, "Cannot {} {} - {}", command.action(), subject, err)
                    .with_output_context("report failure")?;
                Ok(Outcome::Failed(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ParseError};
    use crate::domain::{CollisionPolicy, NodePath};

    fn run(script: &str) -> (ApplicationResult<RunSummary>, String) {
        let mut interpreter = Interpreter::new(NamespaceTree::new(), Vec::new());
        let result = interpreter.run(script.lines());
        let (_, out) = interpreter.into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn given_commands_when_running_then_echoes_and_lists() {
        let (result, out) = run("CREATE fruits\nCREATE fruits/apples\nLIST");
        assert_eq!(result.unwrap(), RunSummary { executed: 3, failed: 0 });
        assert_eq!(out, "CREATE fruits\nCREATE fruits/apples\nLIST\nfruits\n  apples\n");
    }

    #[test]
    fn given_failing_command_when_running_then_reports_and_continues() {
        let (result, out) = run("CREATE fruits/apples\nDELETE a/b\nMOVE x y\nCREATE grains");
        assert_eq!(result.unwrap(), RunSummary { executed: 4, failed: 3 });
        assert_eq!(
            out,
            "CREATE fruits/apples\n\
             Cannot create fruits/apples - fruits does not exist\n\
             DELETE a/b\n\
             Cannot delete a/b - a does not exist\n\
             MOVE x y\n\
             Cannot move x - x does not exist\n\
             CREATE grains\n"
        );
    }

    #[test]
    fn given_unknown_keyword_when_running_then_stops_batch() {
        let (result, out) = run("CREATE fruits\nFROB fruits\nCREATE grains");
        assert!(matches!(
            result,
            Err(ApplicationError::Parse(ParseError::UnknownCommand(ref k))) if k == "FROB"
        ));
        // the bad line is not echoed and nothing after it ran
        assert_eq!(out, "CREATE fruits\n");
    }

    #[test]
    fn given_missing_operand_when_running_then_reports_and_continues() {
        let (result, out) = run("CREATE a\nCREATE\nMOVE a\nCREATE b\nLIST");
        assert_eq!(result.unwrap(), RunSummary { executed: 5, failed: 2 });
        assert_eq!(
            out,
            "CREATE a\n\
             CREATE\n\
             Cannot create  - invalid input: empty path\n\
             MOVE a\n\
             Cannot move a - invalid input: empty path\n\
             CREATE b\n\
             LIST\n\
             a\n\
             b\n"
        );
    }

    #[test]
    fn given_blank_and_crlf_lines_when_running_then_skipped_and_trimmed() {
        let (result, out) = run("CREATE fruits\r\n\n   \nLIST\r\n");
        assert_eq!(result.unwrap().executed, 2);
        assert_eq!(out, "CREATE fruits\nLIST\nfruits\n");
    }

    #[test]
    fn given_empty_tree_when_listing_then_prints_empty_line() {
        let (_, out) = run("LIST");
        assert_eq!(out, "LIST\n\n");
    }

    #[test]
    fn given_reject_policy_when_creating_twice_then_reports_collision() {
        let tree = NamespaceTree::with_policy(CollisionPolicy::Reject);
        let mut interpreter = Interpreter::new(tree, Vec::new());
        interpreter.execute_line("CREATE fruits").unwrap();
        let outcome = interpreter.execute_line("CREATE fruits").unwrap();
        assert_eq!(outcome, Outcome::Failed(DomainError::NameCollision("fruits".into())));
        let (_, out) = interpreter.into_parts();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("Cannot create fruits - fruits already exists\n"));
    }

    #[test]
    fn given_tree_style_when_listing_then_renders_box_tree() {
        let mut interpreter =
            Interpreter::new(NamespaceTree::new(), Vec::new()).with_style(ListStyle::Tree);
        interpreter.run(["CREATE fruits", "LIST"]).unwrap();
        assert!(interpreter.tree().find(&NodePath::parse("fruits")).is_ok());
        let (_, out) = interpreter.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("CREATE fruits\nLIST\n.\n"));
    }

    #[test]
    fn given_empty_path_when_moving_then_reports_root_subject() {
        let mut interpreter = Interpreter::new(NamespaceTree::new(), Vec::new());
        let outcome = interpreter.execute_line("MOVE / fruits").unwrap();
        assert_eq!(outcome, Outcome::Failed(DomainError::InvalidPath));
        let (_, out) = interpreter.into_parts();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "MOVE / fruits\nCannot move / - invalid input: empty path\n"
        );
    }
}
