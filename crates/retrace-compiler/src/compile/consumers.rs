use retrace_core::{ClassPredicate, MatchLevel};
use retrace_syntax::{Ast, Atom};

use super::compiler::Compiler;
use super::error::{CompileError, CompileResult};

impl Compiler<'_> {
    /// Lower a leaf that consumes one unit by predicate.
    pub(super) fn emit_consumer(&mut self, node: &Ast) -> CompileResult<()> {
        let Some((predicate, level)) = self.consumer(node) else {
            return Err(CompileError::Unsupported(node.dump_base()));
        };
        self.builder.build_consume(predicate, level);
        Ok(())
    }

    /// The predicate and granularity `node` consumes by, if it is such a leaf.
    fn consumer(&self, node: &Ast) -> Option<(ClassPredicate, MatchLevel)> {
        match node {
            Ast::CharacterClass(cc) => {
                Some((cc.predicate, cc.match_level.unwrap_or(self.match_level)))
            }
            Ast::Atom(Atom::Any) => Some((any_unit(self.match_level), self.match_level)),
            Ast::Atom(atom) => atom
                .character_class()
                .map(|predicate| (predicate, self.match_level)),
            _ => None,
        }
    }
}

fn any_unit(level: MatchLevel) -> ClassPredicate {
    match level {
        MatchLevel::GraphemeCluster => ClassPredicate::any_grapheme(),
        MatchLevel::UnicodeScalar => ClassPredicate::any_scalar(),
    }
}
