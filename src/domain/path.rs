//! Slash-separated paths into the namespace tree

use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

/// Path separator used in the textual form.
pub const SEPARATOR: char = '/';

/// An ordered sequence of name segments, walked from the root.
///
/// The empty path denotes the root itself. A path is an immutable value:
/// operations that need the parent prefix and the final name get both from
/// [`NodePath::split_last`] instead of popping segments off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from already-split segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the textual form.
    ///
    /// `""` and `"/"` are the root, which displays as `/`. Anything else is
    /// split on `/` verbatim, so `"a/"` yields a trailing empty segment and
    /// `"/a"` a leading one.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() || text == "/" {
            return Self::root();
        }
        Self::new(text.split(SEPARATOR))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split into the parent prefix and the final segment.
    ///
    /// Fails with [`DomainError::InvalidPath`] for the root path or when the
    /// final segment is empty, since nodes are always named.
    pub fn split_last(&self) -> DomainResult<(&[String], &str)> {
        match self.segments.split_last() {
            Some((last, prefix)) if !last.is_empty() => Ok((prefix, last.as_str())),
            _ => Err(DomainError::InvalidPath),
        }
    }

    /// Final segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path of a child of this path.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "{}", SEPARATOR);
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for NodePath {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("/", 0)]
    #[case("fruits", 1)]
    #[case("fruits/apples/fuji", 3)]
    #[case("fruits/apples/granny smith", 3)]
    #[case("fruits//apples", 3)]
    #[case("/fruits", 2)]
    #[case("fruits/", 2)]
    fn given_text_when_parsing_then_splits_on_slash(#[case] text: &str, #[case] len: usize) {
        assert_eq!(NodePath::parse(text).len(), len);
    }

    #[test]
    fn given_nested_path_when_split_last_then_returns_prefix_and_name() {
        let path = NodePath::parse("fruits/apples/fuji");
        let (prefix, name) = path.split_last().unwrap();
        assert_eq!(prefix, ["fruits".to_string(), "apples".to_string()]);
        assert_eq!(name, "fuji");
        // the path itself is untouched
        assert_eq!(path.len(), 3);
    }

    #[rstest]
    #[case("")]
    #[case("fruits/")]
    fn given_unnamed_path_when_split_last_then_invalid(#[case] text: &str) {
        assert_eq!(
            NodePath::parse(text).split_last(),
            Err(DomainError::InvalidPath)
        );
    }

    #[test]
    fn given_doubled_separator_when_parsing_then_keeps_empty_segment() {
        let path = NodePath::parse("fruits//apples");
        assert_eq!(path.segments()[1], "");
        assert_eq!(path.to_string(), "fruits//apples");
    }

    #[test]
    fn given_path_when_displayed_then_round_trips_text() {
        let path = NodePath::parse("fruits/apples");
        assert_eq!(path.to_string(), "fruits/apples");
        assert_eq!(path.join("fuji").to_string(), "fruits/apples/fuji");
        assert_eq!(NodePath::root().to_string(), "/");
    }
}
