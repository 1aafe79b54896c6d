//! Versio Core
//!
//! Semantic version parsing, canonical rendering, and precedence comparison.
//!
//! A version string is scanned into tokens, parsed into a [`Version`], and
//! compared per the SemVer precedence rules. A leading `v` is accepted on
//! input and never reproduced on output; missing minor and patch fields
//! default to 0; build metadata is carried but never affects ordering.
//!
//! ```
//! use versio_core::parse;
//!
//! let a = parse("v1.2").unwrap();
//! let b = parse("1.2.0-rc.1").unwrap();
//! assert_eq!(a.to_string(), "1.2.0");
//! assert!(b < a);
//! ```

pub mod parser;
pub mod scanner;
pub mod tokens;
pub mod version;

pub use parser::{parse, ParseError};
pub use version::Version;
