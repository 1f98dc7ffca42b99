//! Structured result of a brace scan.
//!
//! A [`Report`] collects every finding the scanner produced and knows how to
//! render itself in the tool's line-oriented output format. Consumers that
//! want the data rather than the text can serialize the report or walk its
//! fields directly.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Maximum number of unclosed-brace example positions shown when rendering.
///
/// The report itself retains the full list; only [`Display`] truncates.
pub const MAX_UNCLOSED_EXAMPLES: usize = 5;

/// A 1-based (line, column) location in the scanned text.
///
/// Columns count characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An opening brace paired with the closing brace that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracePair {
    /// Location of the `{`.
    pub open: Position,
    /// Location of the `}` that closed it.
    pub close: Position,
}

/// All findings from a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Unmatched `}` positions, in the order they were encountered.
    pub extra_closing: Vec<Position>,
    /// Positions of `{` still open at end of scan, most recently opened first.
    pub unclosed: Vec<Position>,
    /// Matched brace pairs, in the order the closers were seen.
    pub pairs: Vec<BracePair>,
}

impl Report {
    /// True iff every `{` was closed.
    ///
    /// Extra closing braces do not affect the verdict; they are reported
    /// inline but the scan still ends balanced if the stack is empty.
    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty()
    }

    /// True iff the scan produced any finding at all.
    pub fn has_findings(&self) -> bool {
        !self.extra_closing.is_empty() || !self.unclosed.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for p in &self.extra_closing {
            writeln!(f, "ERROR: Extra closing bracket at {}", p)?;
        }
        if self.unclosed.is_empty() {
            write!(f, "OK: All brackets matched")
        } else {
            write!(f, "ERROR: {} unclosed brackets:", self.unclosed.len())?;
            for p in self.unclosed.iter().take(MAX_UNCLOSED_EXAMPLES) {
                write!(f, "\n  Opening at {}", p)?;
            }
            Ok(())
        }
    }
}
