//! Scans text for curly braces and pairs them with a stack.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::ScanResult;
use crate::report::{BracePair, Position, Report};
use crate::util::LocationTracker;

/// Scans text for `{`/`}` and reports unmatched braces as a [`Report`].
///
/// Only curly braces are tracked; string literals, comments and other
/// bracket kinds are ignored. The scanner itself holds no state, so a single
/// value can be reused across any number of scans.
///
/// # Examples
///
/// The most common case is probably to scan a file:
///
/// ```rust,no_run
/// # use brace_check::scanner::Scanner;
/// let scanner = Scanner::new();
/// let report = scanner.scan_path("src/lib.rs").unwrap();
/// println!("{}", report);
/// ```
///
/// In-memory text can be scanned directly, which cannot fail:
///
/// ```rust
/// # use brace_check::scanner::Scanner;
/// let report = Scanner::new().scan_str("fn main() { }");
/// assert!(report.is_balanced());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scanner {
    /// Creates a new `Scanner`.
    pub fn new() -> Self {
        Scanner
    }

    /// Opens the file at `path`, reads it completely and scans it.
    ///
    /// The file handle is released on all exit paths, including read errors.
    pub fn scan_path<P: AsRef<Path>>(&self, path: P) -> ScanResult<Report> {
        let mut file = File::open(path)?;
        self.scan(&mut file)
    }

    /// Reads everything from `source`, decodes it as UTF-8 and scans it.
    ///
    /// Fails with [`ScanError::Io`](crate::errors::ScanError::Io) if reading
    /// fails and [`ScanError::Decode`](crate::errors::ScanError::Decode) if
    /// the bytes are not valid UTF-8.
    pub fn scan<T: Read>(&self, source: &mut T) -> ScanResult<Report> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(self.scan_str(&text))
    }

    /// Scans in-memory text. This is the core matcher and cannot fail.
    ///
    /// Lines and columns are 1-based; columns count characters, not bytes.
    /// An empty input yields a balanced report.
    pub fn scan_str(&self, source: &str) -> Report {
        let mut location = LocationTracker::new();
        let mut stack: Vec<Position> = Vec::new();
        let mut extra_closing = Vec::new();
        let mut pairs = Vec::new();

        for line in source.lines() {
            location.next_line();
            self.scan_line(line, &mut location, &mut stack, &mut extra_closing, &mut pairs);
        }

        // Whatever is still on the stack never got a closer. Most recently
        // opened first.
        let unclosed: Vec<Position> = stack.into_iter().rev().collect();

        Report {
            extra_closing,
            unclosed,
            pairs,
        }
    }

    fn scan_line(
        &self,
        line: &str,
        location: &mut LocationTracker,
        stack: &mut Vec<Position>,
        extra_closing: &mut Vec<Position>,
        pairs: &mut Vec<BracePair>,
    ) {
        for c in line.chars() {
            location.next_column();
            match c {
                '{' => stack.push(location.position()),
                '}' => match stack.pop() {
                    Some(open) => pairs.push(BracePair {
                        open,
                        close: location.position(),
                    }),
                    None => extra_closing.push(location.position()),
                },
                _ => (),
            }
        }
    }
}
