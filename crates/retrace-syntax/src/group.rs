//! Group kinds and inline matching options.

use std::fmt;

use crate::ast::Ast;

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub kind: GroupKind,
    pub child: Box<Ast>,
}

impl Group {
    pub fn new(kind: GroupKind, child: Ast) -> Self {
        Self {
            kind,
            child: Box::new(child),
        }
    }

    pub fn dump_base(&self) -> String {
        format!("group_{}", self.kind.dump_base())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `(...)`
    Capture,
    /// `(?<name>...)`, `(?'name'...)`, `(?P<name>...)`
    NamedCapture(String),
    /// `(?:...)`
    NonCapture,
    /// `(?|...)`
    NonCaptureReset,
    /// `(?>...)`
    Atomic,
    /// `(?=...)`
    Lookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?*...)`
    NonAtomicLookahead,
    /// `(?<=...)`
    Lookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
    /// `(?<*...)`
    NonAtomicLookbehind,
    /// `(*sr:...)`
    ScriptRun,
    /// `(*asr:...)`
    AtomicScriptRun,
    /// `(?i:...)`, or `(?i)` scoping the rest of the enclosing group.
    ChangeMatchingOptions {
        options: MatchingOptionSequence,
        implicit_scope: bool,
    },
}

impl GroupKind {
    pub fn is_capturing(&self) -> bool {
        matches!(self, GroupKind::Capture | GroupKind::NamedCapture(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GroupKind::NamedCapture(name) => Some(name),
            _ => None,
        }
    }

    pub fn dump_base(&self) -> String {
        match self {
            GroupKind::Capture => "capture".to_string(),
            GroupKind::NamedCapture(name) => format!("capture<{name}>"),
            GroupKind::NonCapture => "nonCapture".to_string(),
            GroupKind::NonCaptureReset => "nonCaptureReset".to_string(),
            GroupKind::Atomic => "atomicNonCapturing".to_string(),
            GroupKind::Lookahead => "lookahead".to_string(),
            GroupKind::NegativeLookahead => "negativeLookahead".to_string(),
            GroupKind::NonAtomicLookahead => "nonAtomicLookahead".to_string(),
            GroupKind::Lookbehind => "lookbehind".to_string(),
            GroupKind::NegativeLookbehind => "negativeLookbehind".to_string(),
            GroupKind::NonAtomicLookbehind => "nonAtomicLookbehind".to_string(),
            GroupKind::ScriptRun => "scriptRun".to_string(),
            GroupKind::AtomicScriptRun => "atomicScriptRun".to_string(),
            GroupKind::ChangeMatchingOptions {
                options,
                implicit_scope,
            } => format!("changeMatchingOptions<{options}, {implicit_scope}>"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchingOption {
    /// `i`
    CaseInsensitive,
    /// `J`
    AllowDuplicateGroupNames,
    /// `m`
    Multiline,
    /// `n`
    NamedCapturesOnly,
    /// `s`
    SingleLine,
    /// `U`
    ReluctantByDefault,
    /// `x`
    Extended,
    /// `xx`
    ExtraExtended,
    /// `w`
    UnicodeWordBoundaries,
    /// `D`
    AsciiOnlyDigit,
    /// `P`
    AsciiOnlyPosixProps,
    /// `S`
    AsciiOnlySpace,
    /// `W`
    AsciiOnlyWord,
    /// `y{g}`
    TextSegmentGraphemeMode,
    /// `y{w}`
    TextSegmentWordMode,
}

impl MatchingOption {
    /// Option spelled by a single letter, excluding `xx` and `y{..}`.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'i' => MatchingOption::CaseInsensitive,
            'J' => MatchingOption::AllowDuplicateGroupNames,
            'm' => MatchingOption::Multiline,
            'n' => MatchingOption::NamedCapturesOnly,
            's' => MatchingOption::SingleLine,
            'U' => MatchingOption::ReluctantByDefault,
            'x' => MatchingOption::Extended,
            'w' => MatchingOption::UnicodeWordBoundaries,
            'D' => MatchingOption::AsciiOnlyDigit,
            'P' => MatchingOption::AsciiOnlyPosixProps,
            'S' => MatchingOption::AsciiOnlySpace,
            'W' => MatchingOption::AsciiOnlyWord,
            _ => return None,
        })
    }

    pub fn is_text_segment_mode(self) -> bool {
        matches!(
            self,
            MatchingOption::TextSegmentGraphemeMode | MatchingOption::TextSegmentWordMode
        )
    }
}

impl fmt::Display for MatchingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchingOption::CaseInsensitive => "i",
            MatchingOption::AllowDuplicateGroupNames => "J",
            MatchingOption::Multiline => "m",
            MatchingOption::NamedCapturesOnly => "n",
            MatchingOption::SingleLine => "s",
            MatchingOption::ReluctantByDefault => "U",
            MatchingOption::Extended => "x",
            MatchingOption::ExtraExtended => "xx",
            MatchingOption::UnicodeWordBoundaries => "w",
            MatchingOption::AsciiOnlyDigit => "D",
            MatchingOption::AsciiOnlyPosixProps => "P",
            MatchingOption::AsciiOnlySpace => "S",
            MatchingOption::AsciiOnlyWord => "W",
            MatchingOption::TextSegmentGraphemeMode => "y{g}",
            MatchingOption::TextSegmentWordMode => "y{w}",
        })
    }
}

/// `(?^adding-removing)`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchingOptionSequence {
    /// `^` resets options to their defaults before applying `adding`.
    pub caret: bool,
    pub adding: Vec<MatchingOption>,
    pub removing: Vec<MatchingOption>,
}

impl fmt::Display for MatchingOptionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.caret {
            f.write_str("^")?;
        }
        for opt in &self.adding {
            write!(f, "{opt}")?;
        }
        if !self.removing.is_empty() {
            f.write_str("-")?;
            for opt in &self.removing {
                write!(f, "{opt}")?;
            }
        }
        Ok(())
    }
}
