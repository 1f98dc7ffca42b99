//! Checks curly-brace balance in text files.
//!
//! The scanner walks a file's characters left to right, top to bottom, and
//! keeps a stack of the open `{` positions it has seen. A `}` pops the stack
//! when possible and is reported as an extra closer otherwise; anything left
//! on the stack at end of input is reported as unclosed. Only `{` and `}`
//! are considered, so brace characters inside string literals or comments
//! count like any others.
//!
//! # Examples
//!
//! ```rust
//! use brace_check::scanner::Scanner;
//!
//! let report = Scanner::new().scan_str("} {");
//! assert!(report.has_findings());
//! assert_eq!(
//!     report.to_string(),
//!     "ERROR: Extra closing bracket at line 1, column 1\n\
//!      ERROR: 1 unclosed brackets:\n  Opening at line 1, column 3"
//! );
//! ```

pub mod errors;
pub mod report;
pub mod scanner;
mod util;
