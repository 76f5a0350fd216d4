//! The pattern tree.
//!
//! Nodes are plain values: rewrites build new trees and never mutate shared
//! subtrees, so a tree can be compiled any number of times.

use std::fmt;
use std::sync::Arc;

use retrace_core::{ClassPredicate, MatchLevel};

use crate::group::{Group, GroupKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// `a|b|c` - first matching alternative wins. Never empty.
    Alternation(Vec<Ast>),
    /// `abc` - all children in order. Never empty.
    Concatenation(Vec<Ast>),
    Group(Group),
    /// A group whose matched text feeds a value transform.
    GroupTransform(Group, Transform),
    Quantification(Quantification),
    /// `\Q...\E` - text matched verbatim.
    Quote(String),
    /// Comments and non-semantic whitespace.
    Trivia(String),
    Atom(Atom),
    CharacterClass(CharacterClass),
    CustomCharacterClass(CustomCharacterClass),
    Empty,
}

impl Ast {
    /// Build an alternation; no children collapses to [`Ast::Empty`].
    pub fn alternation(children: Vec<Ast>) -> Ast {
        if children.is_empty() {
            return Ast::Empty;
        }
        Ast::Alternation(children)
    }

    /// Build a concatenation; no children collapses to [`Ast::Empty`] and a
    /// single child stands for itself.
    pub fn concatenation(mut children: Vec<Ast>) -> Ast {
        match children.len() {
            0 => Ast::Empty,
            1 => children.pop().unwrap_or(Ast::Empty),
            _ => Ast::Concatenation(children),
        }
    }

    pub fn group(kind: GroupKind, child: Ast) -> Ast {
        Ast::Group(Group::new(kind, child))
    }

    pub fn quantification(amount: Amount, kind: QuantKind, child: Ast) -> Ast {
        Ast::Quantification(Quantification {
            amount,
            kind,
            child: Box::new(child),
        })
    }

    /// A literal grapheme cluster.
    pub fn char(grapheme: impl Into<String>) -> Ast {
        Ast::Atom(Atom::Char(grapheme.into()))
    }

    /// Short tag describing this node, used in dumps and error messages.
    pub fn dump_base(&self) -> String {
        match self {
            Ast::Alternation(_) => "alternation".to_string(),
            Ast::Concatenation(_) => "concatenation".to_string(),
            Ast::Group(g) => g.dump_base(),
            Ast::GroupTransform(g, t) => format!("groupTransform<{}> {}", t.name(), g.dump_base()),
            Ast::Quantification(q) => format!("quant_{}{}", q.amount, q.kind),
            Ast::Quote(text) => format!("quote {text:?}"),
            Ast::Trivia(text) => format!("trivia {text:?}"),
            Ast::Atom(a) => format!("atom {}", a.dump_base()),
            Ast::CharacterClass(cc) => cc.dump_base(),
            Ast::CustomCharacterClass(cc) => cc.dump_base(),
            Ast::Empty => "empty".to_string(),
        }
    }
}

// ============================================================================
// Atoms
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Atom {
    /// A literal grapheme cluster.
    Char(String),
    /// A scalar written as an escape (`\u{301}`, `\n`, ...).
    Scalar(char),
    /// `.`
    Any,
    /// A built-in class escape (`\d`, `\p{L}`, ...).
    Class(ClassPredicate),
    /// `\p{..}` naming a property the engine cannot evaluate.
    Property { name: String, inverted: bool },
    Anchor(Anchor),
    Backreference(Reference),
}

impl Atom {
    /// The exact text this atom matches, if it matches exactly one character.
    pub fn single_character(&self) -> Option<String> {
        match self {
            Atom::Char(g) => Some(g.clone()),
            Atom::Scalar(c) => Some(c.to_string()),
            _ => None,
        }
    }

    /// The predicate this atom degrades to, if it is class-like.
    pub fn character_class(&self) -> Option<ClassPredicate> {
        match self {
            Atom::Class(p) => Some(*p),
            _ => None,
        }
    }

    pub fn dump_base(&self) -> String {
        match self {
            Atom::Char(g) => format!("char {g:?}"),
            Atom::Scalar(c) => format!("scalar U+{:04X}", *c as u32),
            Atom::Any => "any".to_string(),
            Atom::Class(p) => format!("class {p}"),
            Atom::Property { name, inverted } => {
                let escape = if *inverted { 'P' } else { 'p' };
                format!("property \\{escape}{{{name}}}")
            }
            Atom::Anchor(a) => format!("anchor {a}"),
            Atom::Backreference(r) => format!("backreference {r}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `^`
    StartOfLine,
    /// `$`
    EndOfLine,
    /// `\A`
    StartOfSubject,
    /// `\z`
    EndOfSubject,
    /// `\Z`
    EndOfSubjectBeforeNewline,
    /// `\b`
    WordBoundary,
    /// `\B`
    NotWordBoundary,
    /// `\G`
    FirstMatchingPosition,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Anchor::StartOfLine => "^",
            Anchor::EndOfLine => "$",
            Anchor::StartOfSubject => "\\A",
            Anchor::EndOfSubject => "\\z",
            Anchor::EndOfSubjectBeforeNewline => "\\Z",
            Anchor::WordBoundary => "\\b",
            Anchor::NotWordBoundary => "\\B",
            Anchor::FirstMatchingPosition => "\\G",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reference {
    Absolute(u32),
    Relative(i32),
    Named(String),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Absolute(n) => write!(f, "\\{n}"),
            Reference::Relative(n) => write!(f, "\\g{{{n:+}}}"),
            Reference::Named(name) => write!(f, "\\k<{name}>"),
        }
    }
}

// ============================================================================
// Character classes
// ============================================================================

/// A built-in class together with the granularity it is tested at.
///
/// `match_level` is `None` until match-level propagation tags the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharacterClass {
    pub predicate: ClassPredicate,
    pub match_level: Option<MatchLevel>,
}

impl CharacterClass {
    pub fn new(predicate: ClassPredicate) -> Self {
        Self {
            predicate,
            match_level: None,
        }
    }

    pub fn with_level(predicate: ClassPredicate, level: MatchLevel) -> Self {
        Self {
            predicate,
            match_level: Some(level),
        }
    }

    pub fn dump_base(&self) -> String {
        match self.match_level {
            Some(level) => format!("characterClass {} @{level}", self.predicate),
            None => format!("characterClass {}", self.predicate),
        }
    }
}

/// `[...]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomCharacterClass {
    pub inverted: bool,
    pub members: Vec<ClassMember>,
}

impl CustomCharacterClass {
    pub fn dump_base(&self) -> String {
        if self.inverted {
            "customCharacterClass(inverted)".to_string()
        } else {
            "customCharacterClass".to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassMember {
    Atom(Atom),
    /// `a-z`; both ends are single characters.
    Range(Atom, Atom),
    Custom(CustomCharacterClass),
    Posix(PosixSet),
    Quote(String),
}

/// `[:alpha:]` or `[:^alpha:]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PosixSet {
    pub name: String,
    pub inverted: bool,
}

// ============================================================================
// Quantification
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Quantification {
    pub amount: Amount,
    pub kind: QuantKind,
    pub child: Box<Ast>,
}

/// How a quantifier trades repetitions against the rest of the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuantKind {
    /// Prefer more repetitions, give them back on backtrack.
    #[default]
    Eager,
    /// Prefer fewer repetitions, take more on backtrack.
    Reluctant,
    /// Take as many as possible and never give them back.
    Possessive,
}

impl fmt::Display for QuantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuantKind::Eager => "",
            QuantKind::Reluctant => "?",
            QuantKind::Possessive => "+",
        })
    }
}

/// Repetition bounds as written in the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    NOrMore(u32),
    /// `{,m}`
    UpToN(u32),
    /// `{n,m}`
    Range(u32, u32),
}

impl Amount {
    /// `(at_least, at_most)`; `at_most` is `None` when unbounded.
    pub fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Amount::ZeroOrMore => (0, None),
            Amount::OneOrMore => (1, None),
            Amount::ZeroOrOne => (0, Some(1)),
            Amount::Exactly(n) => (n, Some(n)),
            Amount::NOrMore(n) => (n, None),
            Amount::UpToN(m) => (0, Some(m)),
            Amount::Range(n, m) => (n, Some(m)),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::ZeroOrMore => f.write_str("*"),
            Amount::OneOrMore => f.write_str("+"),
            Amount::ZeroOrOne => f.write_str("?"),
            Amount::Exactly(n) => write!(f, "{{{n}}}"),
            Amount::NOrMore(n) => write!(f, "{{{n},}}"),
            Amount::UpToN(m) => write!(f, "{{,{m}}}"),
            Amount::Range(n, m) => write!(f, "{{{n},{m}}}"),
        }
    }
}

// ============================================================================
// Value transforms
// ============================================================================

type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// Post-match value transform attached to a group.
///
/// Opaque to compilation; two transforms are equal when they share a name
/// and the same underlying function.
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: Arc<TransformFn>,
}

impl Transform {
    pub fn new(name: impl Into<String>, func: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, matched: &str) -> String {
        (self.func)(matched)
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}
