//! Built-in character predicates.
//!
//! A predicate is tested either against a single scalar or against the first
//! scalar of a grapheme cluster, depending on the active [`MatchLevel`].
//!
//! [`MatchLevel`]: crate::MatchLevel

use std::fmt;

/// The family of characters a predicate accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// `.` evaluated per scalar.
    AnyScalar,
    /// `\X`: any grapheme cluster, always consumed whole.
    AnyGrapheme,
    /// `\d`
    Digit,
    /// `[:xdigit:]`
    HexDigit,
    /// `\s`
    Whitespace,
    /// `\h`
    HorizontalWhitespace,
    /// `\v`
    VerticalWhitespace,
    /// `\R`
    NewlineSequence,
    /// `\w`
    Word,
    /// `\p{..}`
    Property(Property),
}

/// Unicode properties the engine can evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Any,
    Alphabetic,
    Lowercase,
    Uppercase,
    Numeric,
    Alphanumeric,
    WhiteSpace,
    Control,
    Ascii,
}

impl Property {
    /// Resolve a property name as written inside `\p{..}`.
    ///
    /// Matching is loose: case, `_`, `-` and spaces are ignored, so
    /// `White_Space`, `whitespace` and `White Space` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let property = match key.as_str() {
            "any" => Self::Any,
            "l" | "letter" | "alpha" | "alphabetic" => Self::Alphabetic,
            "ll" | "lower" | "lowercase" | "lowercaseletter" => Self::Lowercase,
            "lu" | "upper" | "uppercase" | "uppercaseletter" => Self::Uppercase,
            "n" | "number" | "numeric" => Self::Numeric,
            "alnum" | "alphanumeric" => Self::Alphanumeric,
            "space" | "wspace" | "whitespace" => Self::WhiteSpace,
            "cc" | "cntrl" | "control" => Self::Control,
            "ascii" => Self::Ascii,
            _ => return None,
        };
        Some(property)
    }

    /// Canonical spelling used in dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Alphabetic => "Alphabetic",
            Self::Lowercase => "Lowercase",
            Self::Uppercase => "Uppercase",
            Self::Numeric => "Numeric",
            Self::Alphanumeric => "Alphanumeric",
            Self::WhiteSpace => "White_Space",
            Self::Control => "Control",
            Self::Ascii => "ASCII",
        }
    }

    fn matches(self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Alphabetic => c.is_alphabetic(),
            Self::Lowercase => c.is_lowercase(),
            Self::Uppercase => c.is_uppercase(),
            Self::Numeric => c.is_numeric(),
            Self::Alphanumeric => c.is_alphanumeric(),
            Self::WhiteSpace => c.is_whitespace(),
            Self::Control => c.is_control(),
            Self::Ascii => c.is_ascii(),
        }
    }
}

/// A character predicate: a [`ClassKind`] plus an inversion flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassPredicate {
    pub kind: ClassKind,
    pub inverted: bool,
}

impl ClassPredicate {
    pub const fn new(kind: ClassKind) -> Self {
        Self {
            kind,
            inverted: false,
        }
    }

    pub const fn any_scalar() -> Self {
        Self::new(ClassKind::AnyScalar)
    }

    pub const fn any_grapheme() -> Self {
        Self::new(ClassKind::AnyGrapheme)
    }

    pub const fn property(property: Property) -> Self {
        Self::new(ClassKind::Property(property))
    }

    /// Flip the inversion flag.
    pub const fn inverted(self) -> Self {
        Self {
            kind: self.kind,
            inverted: !self.inverted,
        }
    }

    /// Whether a successful test always consumes a whole grapheme cluster,
    /// regardless of the requested match level.
    pub fn consumes_grapheme(&self) -> bool {
        self.kind == ClassKind::AnyGrapheme
    }

    /// Test a single scalar.
    pub fn matches_scalar(&self, c: char) -> bool {
        let hit = match self.kind {
            ClassKind::AnyScalar | ClassKind::AnyGrapheme => true,
            ClassKind::Digit => c.is_numeric(),
            ClassKind::HexDigit => c.is_ascii_hexdigit(),
            ClassKind::Whitespace => c.is_whitespace(),
            ClassKind::HorizontalWhitespace => is_horizontal_space(c),
            ClassKind::VerticalWhitespace | ClassKind::NewlineSequence => is_vertical_space(c),
            ClassKind::Word => c.is_alphanumeric() || c == '_',
            ClassKind::Property(p) => p.matches(c),
        };
        hit != self.inverted
    }

    /// Test a grapheme cluster by its first scalar.
    pub fn matches_grapheme(&self, grapheme: &str) -> bool {
        grapheme
            .chars()
            .next()
            .is_some_and(|c| self.matches_scalar(c))
    }
}

fn is_horizontal_space(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

fn is_vertical_space(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{B}' | '\u{C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl fmt::Display for ClassPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = self.inverted;
        match self.kind {
            ClassKind::AnyScalar if inv => f.write_str("[^.]"),
            ClassKind::AnyScalar => f.write_str("."),
            ClassKind::AnyGrapheme if inv => f.write_str("[^\\X]"),
            ClassKind::AnyGrapheme => f.write_str("\\X"),
            ClassKind::Digit => f.write_str(if inv { "\\D" } else { "\\d" }),
            ClassKind::HexDigit => f.write_str(if inv { "[:^xdigit:]" } else { "[:xdigit:]" }),
            ClassKind::Whitespace => f.write_str(if inv { "\\S" } else { "\\s" }),
            ClassKind::HorizontalWhitespace => f.write_str(if inv { "\\H" } else { "\\h" }),
            ClassKind::VerticalWhitespace => f.write_str(if inv { "\\V" } else { "\\v" }),
            ClassKind::NewlineSequence => f.write_str(if inv { "\\N" } else { "\\R" }),
            ClassKind::Word => f.write_str(if inv { "\\W" } else { "\\w" }),
            ClassKind::Property(p) => {
                let escape = if inv { 'P' } else { 'p' };
                write!(f, "\\{escape}{{{}}}", p.name())
            }
        }
    }
}
