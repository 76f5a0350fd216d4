//! Pattern text to [`Ast`].
//!
//! Recursive descent over grapheme clusters. The grammar is split by
//! construct:
//! - `cursor` - cursor, lookahead and error helpers
//! - `expressions` - alternation, concatenation, operands
//! - `atoms` - escapes, numbers, properties, references
//! - `groups` - group specifiers and matching options
//! - `classes` - custom character classes
//! - `quantifiers` - repetition suffixes

mod atoms;
mod classes;
mod cursor;
mod expressions;
mod groups;
mod quantifiers;

#[cfg(test)]
mod tests;

use crate::ast::Ast;
use crate::diagnostics::{ParseError, ParseErrorKind};

/// Default nesting limit for groups and custom classes.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Selects the surface syntax a pattern is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SyntaxOptions {
    /// Unescaped whitespace is trivia instead of a literal.
    pub whitespace_is_trivia: bool,
    /// `"..."` matches its contents verbatim.
    pub quoted_literals: bool,
}

impl SyntaxOptions {
    /// PCRE-style syntax.
    pub const TRADITIONAL: Self = Self {
        whitespace_is_trivia: false,
        quoted_literals: false,
    };

    pub const EXPERIMENTAL: Self = Self {
        whitespace_is_trivia: true,
        quoted_literals: true,
    };
}

/// Parses one pattern.
///
/// ```
/// use retrace_syntax::{Parser, SyntaxOptions};
///
/// let ast = Parser::new("a(b|c)*d")
///     .syntax(SyntaxOptions::TRADITIONAL)
///     .parse()
///     .unwrap();
/// assert_eq!(ast.dump().lines().next(), Some("concatenation"));
/// ```
pub struct Parser<'src> {
    source: &'src str,
    /// Byte offset and text of each grapheme cluster.
    units: Vec<(usize, &'src str)>,
    pos: usize,
    syntax: SyntaxOptions,
    depth: u32,
    max_depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            units: retrace_core::text::graphemes(source),
            pos: 0,
            syntax: SyntaxOptions::TRADITIONAL,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn syntax(mut self, syntax: SyntaxOptions) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let ast = self.parse_alternation()?;
        if !self.at_end() {
            // Only an unmatched ')' stops the top-level alternation early.
            return Err(self.error_here(ParseErrorKind::Misc("unbalanced ')'".to_string())));
        }
        Ok(ast)
    }
}

/// Parse `source` with default limits.
pub fn parse(source: &str, syntax: SyntaxOptions) -> Result<Ast, ParseError> {
    Parser::new(source).syntax(syntax).parse()
}
