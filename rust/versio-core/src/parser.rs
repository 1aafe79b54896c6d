//! Recursive descent parser for version strings.
//!
//! Grammar, consumed left to right with one-token lookahead:
//!
//! ```text
//! version  := core preamble?
//! core     := major ("." number ("." number)?)?
//! major    := "v"? digits
//! preamble := "-" idents ("+" idents)? | "+" idents
//! idents   := ident ("." ident)*
//! ident    := IDENT (IDENT | "-")*
//! ```
//!
//! Missing minor and patch fields default to 0. The hyphen is positional: the
//! one immediately after the patch field separates the pre-release section,
//! while a hyphen inside identifier accumulation is a literal character.

use crate::scanner::Scanner;
use crate::tokens::{Token, TokenKind};
use crate::version::Version;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },
    #[error("number overflow at offset {offset}")]
    NumberOverflow { offset: usize },
}

/// Parse a version string into a [`Version`].
///
/// A leading `v` on the major field is accepted and stripped; it does not
/// survive rendering. The first grammar violation aborts the parse with an
/// error citing the offending token and its zero-based offset.
pub fn parse(source: &str) -> Result<Version, ParseError> {
    Parser::new(source).parse()
}

/// Short-lived parser state; one per [`parse`] call.
struct Parser {
    scanner: Scanner,
    tok: Token,
}

impl Parser {
    fn new(source: &str) -> Self {
        let mut scanner = Scanner::new(source);
        let tok = scanner.scan();
        Self { scanner, tok }
    }

    fn advance(&mut self) {
        self.tok = self.scanner.scan();
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.tok.kind.to_string(),
            offset: self.tok.offset,
        }
    }

    fn parse(mut self) -> Result<Version, ParseError> {
        let mut version = Version::default();

        let lit = match &self.tok.kind {
            TokenKind::Ident(lit) => lit.clone(),
            _ => return Err(self.unexpected()),
        };
        version.major = self.parse_major(&lit)?;

        self.advance();
        match self.tok.kind {
            TokenKind::Eof => return Ok(version),
            TokenKind::Dot => {}
            _ => return Err(self.unexpected()),
        }

        self.advance();
        version.minor = self.parse_number()?;

        self.advance();
        match self.tok.kind {
            TokenKind::Eof => return Ok(version),
            TokenKind::Dot => {}
            _ => return Err(self.unexpected()),
        }

        self.advance();
        version.patch = self.parse_number()?;

        self.advance();
        match self.tok.kind {
            TokenKind::Eof => return Ok(version),
            TokenKind::Hyphen => {
                self.advance();
                version.pre_release = Some(self.parse_pre_release()?);
            }
            TokenKind::Plus => {
                self.advance();
                version.build_data = Some(self.parse_build_data()?);
                return Ok(version);
            }
            _ => return Err(self.unexpected()),
        }

        match self.tok.kind {
            TokenKind::Eof => Ok(version),
            TokenKind::Plus => {
                self.advance();
                version.build_data = Some(self.parse_build_data()?);
                Ok(version)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// The major field may carry a leading `v`; the rest must be digits.
    fn parse_major(&self, lit: &str) -> Result<u64, ParseError> {
        let (digits, skipped) = match lit.strip_prefix('v') {
            Some(rest) => (rest, 1),
            None => (lit, 0),
        };
        if digits.is_empty() {
            return Err(ParseError::UnexpectedToken {
                found: TokenKind::Eof.to_string(),
                offset: self.tok.offset + skipped,
            });
        }
        parse_uint(digits, self.tok.offset + skipped)
    }

    /// Minor and patch must be pure-digit identifier tokens.
    fn parse_number(&self) -> Result<u64, ParseError> {
        match &self.tok.kind {
            TokenKind::Ident(lit) => parse_uint(lit, self.tok.offset),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_pre_release(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = Vec::new();
        loop {
            if !matches!(self.tok.kind, TokenKind::Ident(_)) {
                return Err(self.unexpected());
            }
            idents.push(self.parse_ident(true)?);
            match self.tok.kind {
                TokenKind::Eof | TokenKind::Plus => return Ok(idents),
                _ => self.advance(),
            }
        }
    }

    fn parse_build_data(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = Vec::new();
        loop {
            if !matches!(self.tok.kind, TokenKind::Ident(_)) {
                return Err(self.unexpected());
            }
            idents.push(self.parse_ident(false)?);
            if self.tok.kind == TokenKind::Eof {
                return Ok(idents);
            }
            self.advance();
        }
    }

    /// Accumulate one logical identifier. Consecutive identifier runs and
    /// interior hyphens merge, so `a-b` is a single identifier, not two.
    /// Leaves the terminating token (dot, end of input, or `+` when
    /// `stop_at_plus`) unconsumed.
    fn parse_ident(&mut self, stop_at_plus: bool) -> Result<String, ParseError> {
        let mut ident = String::new();
        loop {
            match &self.tok.kind {
                TokenKind::Dot | TokenKind::Eof => return Ok(ident),
                TokenKind::Plus if stop_at_plus => return Ok(ident),
                TokenKind::Ident(lit) => ident.push_str(lit),
                TokenKind::Hyphen => ident.push('-'),
                _ => return Err(self.unexpected()),
            }
            self.advance();
        }
    }
}

/// Accumulate `n = n * 10 + digit` over `u64`. A non-digit character or an
/// overflowing value is an error citing the exact offending offset.
fn parse_uint(digits: &str, base: usize) -> Result<u64, ParseError> {
    let mut n: u64 = 0;
    for (i, ch) in digits.chars().enumerate() {
        let d = match ch.to_digit(10) {
            Some(d) => u64::from(d),
            None => {
                return Err(ParseError::UnexpectedToken {
                    found: ch.to_string(),
                    offset: base + i,
                })
            }
        };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(d))
            .ok_or(ParseError::NumberOverflow { offset: base + i })?;
    }
    Ok(n)
}
