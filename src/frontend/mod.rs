//! The front end: scanner, token stream and recursive-descent parser.
//!
//! One build file in, one [`ParseResult`] out.  Syntax errors never abort
//! the parse; each one becomes a [`Diagnostic`] and the parser resumes at
//! the next line, so a malformed file surfaces all of its problems in a
//! single run.

pub mod lexer;
pub mod parser;

use crate::config::BuildConfig;
use std::fmt;

/// One recoverable syntax error, tied to the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub lexeme: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] at -> \"{}\" {}", self.line, self.lexeme, self.message)
    }
}

/// Outcome of parsing one build file.
///
/// The configuration is always populated as far as the good lines allow;
/// callers decide whether to use it by checking `diagnostics`.
#[derive(Debug)]
pub struct ParseResult {
    pub config: BuildConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Runs the whole scan → parse pipeline over one file's text.
pub fn parse_source(source: &str) -> ParseResult {
    let tokens = lexer::scan(source);
    parser::parse(tokens)
}
