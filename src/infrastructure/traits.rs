//! I/O boundary traits for testability
//!
//! Command lines come from a [`CommandSource`], so the interpreter can be
//! driven by a file, stdin or an in-memory script alike.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Supplier of raw command text, split into lines.
pub trait CommandSource: fmt::Debug {
    /// Human readable origin, used in error context.
    fn describe(&self) -> String;

    /// Read the whole script as text.
    fn read_to_string(&self) -> io::Result<String>;

    /// Read the script and split it on `\n`.
    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self
            .read_to_string()?
            .split('\n')
            .map(str::to_string)
            .collect())
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Script read from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CommandSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Script read from standard input until EOF.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl CommandSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Script held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// One command per item, joined with `\n`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }
}

impl CommandSource for MemorySource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}

/// Pick a source for a CLI argument: none or `-` means stdin.
pub fn open_source(path: Option<&Path>) -> Box<dyn CommandSource> {
    match path {
        Some(p) if p != Path::new("-") => Box::new(FileSource::new(p)),
        _ => Box::new(StdinSource),
    }
}
