//! Match-level propagation.
//!
//! Rebuilds a tree so every character-class leaf carries the granularity it
//! will be tested at. Atoms that reduce to a class become class nodes.

use retrace_core::MatchLevel;

use crate::ast::{Ast, CharacterClass, Quantification};
use crate::group::Group;

/// A construct that the current pipeline cannot handle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported construct: {construct}")]
pub struct Unsupported {
    /// Dump tag of the offending node.
    pub construct: String,
}

impl Unsupported {
    pub fn new(construct: impl Into<String>) -> Self {
        Self {
            construct: construct.into(),
        }
    }
}

impl Ast {
    /// Return a copy of this tree with every character class tagged `level`.
    pub fn with_match_level(&self, level: MatchLevel) -> Result<Ast, Unsupported> {
        Ok(match self {
            Ast::Alternation(children) => Ast::Alternation(propagate_all(children, level)?),
            Ast::Concatenation(children) => Ast::Concatenation(propagate_all(children, level)?),
            Ast::Group(group) => Ast::Group(propagate_group(group, level)?),
            Ast::GroupTransform(group, transform) => {
                Ast::GroupTransform(propagate_group(group, level)?, transform.clone())
            }
            Ast::Quantification(q) => Ast::Quantification(Quantification {
                amount: q.amount,
                kind: q.kind,
                child: Box::new(q.child.with_match_level(level)?),
            }),
            Ast::CharacterClass(cc) => {
                Ast::CharacterClass(CharacterClass::with_level(cc.predicate, level))
            }
            Ast::Atom(atom) => match atom.character_class() {
                Some(predicate) => Ast::CharacterClass(CharacterClass::with_level(predicate, level)),
                None => self.clone(),
            },
            Ast::CustomCharacterClass(cc) => return Err(Unsupported::new(cc.dump_base())),
            Ast::Quote(_) | Ast::Trivia(_) | Ast::Empty => self.clone(),
        })
    }
}

fn propagate_all(children: &[Ast], level: MatchLevel) -> Result<Vec<Ast>, Unsupported> {
    children
        .iter()
        .map(|child| child.with_match_level(level))
        .collect()
}

fn propagate_group(group: &Group, level: MatchLevel) -> Result<Group, Unsupported> {
    Ok(Group::new(group.kind.clone(), group.child.with_match_level(level)?))
}
