use serde::{Deserialize, Serialize};
use std::fmt;

/// Token types for version strings.
///
/// `Ident` carries the literal run of characters; the punctuation kinds carry
/// nothing. `Display` gives the textual form used in parse error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A character outside the version alphabet (anything but `[0-9A-Za-z.+-]`).
    Illegal,
    /// End of input. Scanning past the end keeps yielding this.
    Eof,
    /// A maximal run of ASCII alphanumerics.
    Ident(String),
    Dot,
    Hyphen,
    Plus,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Ident(s) => write!(f, "{}", s),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Hyphen => write!(f, "-"),
            TokenKind::Plus => write!(f, "+"),
        }
    }
}

/// A single token together with its zero-based character offset in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
