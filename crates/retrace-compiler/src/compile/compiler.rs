//! Compiler state and entry points.

use retrace_bytecode::{Program, ProgramBuilder};
use retrace_core::MatchLevel;
use retrace_syntax::{Ast, Atom};

use super::error::CompileResult;

/// Walks one tree and emits one program.
///
/// ```
/// use retrace_compiler::Compiler;
/// use retrace_syntax::{SyntaxOptions, parse};
///
/// let ast = parse("ab|c", SyntaxOptions::TRADITIONAL).unwrap();
/// let program = Compiler::new(&ast).emit().unwrap();
/// assert_eq!(program.len(), 6);
/// ```
pub struct Compiler<'a> {
    ast: &'a Ast,
    pub(super) match_level: MatchLevel,
    pub(super) builder: ProgramBuilder,
}

impl<'a> Compiler<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            match_level: MatchLevel::default(),
            builder: ProgramBuilder::new(),
        }
    }

    /// Granularity for nodes the propagator did not tag.
    pub fn match_level(mut self, level: MatchLevel) -> Self {
        self.match_level = level;
        self
    }

    /// Lower the tree, append `accept` and assemble.
    pub fn emit(mut self) -> CompileResult<Program> {
        let ast = self.ast;
        self.emit_node(ast)?;
        self.builder.build_accept();
        Ok(self.builder.assemble())
    }

    pub(super) fn emit_node(&mut self, node: &Ast) -> CompileResult<()> {
        match node {
            Ast::Atom(Atom::Any) if self.match_level.is_grapheme() => {
                self.builder.build_advance(1);
            }
            Ast::Alternation(children) => self.emit_alternation(children)?,
            Ast::Concatenation(children) => self.emit_concatenation(children)?,
            Ast::GroupTransform(group, _) => self.emit_node(&group.child)?,
            Ast::Group(group) => self.emit_group(group)?,
            Ast::Quantification(quant) => self.emit_quantification(quant)?,
            Ast::Trivia(_) | Ast::Empty => {}
            Ast::Quote(text) => self.builder.build_match_sequence(text, self.match_level),
            Ast::Atom(atom) => match atom.single_character() {
                Some(text) => self.builder.build_match(text, self.match_level),
                None => self.emit_consumer(node)?,
            },
            Ast::CharacterClass(_) | Ast::CustomCharacterClass(_) => self.emit_consumer(node)?,
        }
        Ok(())
    }
}

/// Tag `ast` with `level`, then compile it.
pub fn compile(ast: &Ast, level: MatchLevel) -> CompileResult<Program> {
    let tagged = ast.with_match_level(level)?;
    Compiler::new(&tagged).match_level(level).emit()
}
