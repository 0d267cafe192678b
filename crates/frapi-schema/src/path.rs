//! # Validation Paths
//!
//! Locates a value inside the document being validated. While the
//! validator descends it keeps a chain of borrowed frames: each recursive
//! call builds a new frame on its own stack pointing at its parent, so
//! sibling calls never share or mutate a path. The chain is materialized
//! into owned [`PathSegment`]s only when an error is reported.

use std::fmt;

use frapi_core::{is_simple_key, quote_key};
use serde::Serialize;

/// One step from a container to a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        Self::Field(s.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Render segments the way they would be written in source:
/// `user.items[2]["zip-code"]`.
pub fn format_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            PathSegment::Index(i) => out.push_str(&format!("[{i}]")),
            PathSegment::Field(key) if is_simple_key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Field(key) => {
                out.push('[');
                out.push_str(&quote_key(key));
                out.push(']');
            }
        }
    }
    out
}

/// Display adapter for a slice of segments.
pub struct DisplayPath<'a>(pub &'a [PathSegment]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path(self.0))
    }
}

/// A frame of the path chain used during a single validation call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Frame<'a> {
    Root,
    Field(&'a Frame<'a>, &'a str),
    Index(&'a Frame<'a>, usize),
}

impl<'a> Frame<'a> {
    pub(crate) fn field(&'a self, name: &'a str) -> Frame<'a> {
        Frame::Field(self, name)
    }

    pub(crate) fn index(&'a self, index: usize) -> Frame<'a> {
        Frame::Index(self, index)
    }

    /// Owned segments from the root down to this frame.
    pub(crate) fn segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut frame = self;
        loop {
            match *frame {
                Frame::Root => break,
                Frame::Field(parent, name) => {
                    segments.push(PathSegment::Field(name.to_string()));
                    frame = parent;
                }
                Frame::Index(parent, index) => {
                    segments.push(PathSegment::Index(index));
                    frame = parent;
                }
            }
        }
        segments.reverse();
        segments
    }
}
