//! Parse errors and their rendering.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// Radix of a numeric escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    fn suffix(self) -> String {
        match self {
            Self::Decimal => String::new(),
            _ => format!(" of radix {}", self.value()),
        }
    }
}

/// The closed set of things that can go wrong while parsing a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("number overflow: {0}")]
    NumberOverflow(String),

    #[error("expected {1} digits in '{0}'")]
    ExpectedNumDigits(String, usize),

    #[error("expected a number in '{0}'{suffix}", suffix = .1.suffix())]
    ExpectedNumber(String, Radix),

    /// Expected the given character or string.
    #[error("expected '{0}'")]
    Expected(String),

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("{0}")]
    Misc(String),

    #[error("expected ASCII for '{0}'")]
    ExpectedAscii(char),

    #[error("expected custom character class members")]
    ExpectedCustomCharacterClassMembers,

    #[error("invalid character class range")]
    InvalidCharacterClassRangeOperand,

    #[error("invalid character set name: '{0}'")]
    InvalidPosixSetName(String),

    #[error("empty property")]
    EmptyProperty,

    #[error("expected group specifier")]
    ExpectedGroupSpecifier,

    #[error("text segment mode cannot be unset, only changed")]
    CannotRemoveTextSegmentOptions,
}

/// A parse error located in the pattern source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte range in the pattern.
    pub span: Range<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Render the error with a source snippet pointing at the span.
    pub fn render(&self, source: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.kind.to_string();
        let range = adjust_range(&self.span, source.len());
        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        renderer.render(&report).to_string()
    }
}

fn adjust_range(range: &Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
