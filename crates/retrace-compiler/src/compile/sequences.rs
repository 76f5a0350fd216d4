use retrace_syntax::Ast;

use super::compiler::Compiler;
use super::error::CompileResult;

impl Compiler<'_> {
    /// Sequencing is structural: children back to back.
    pub(super) fn emit_concatenation(&mut self, children: &[Ast]) -> CompileResult<()> {
        for child in children {
            self.emit_node(child)?;
        }
        Ok(())
    }

    /// Ordered choice, leftmost alternative first.
    ///
    /// ```text
    ///     save next_1
    ///     <p0>
    ///     branch done
    ///   next_1:
    ///     save next_2
    ///     <p1>
    ///     branch done
    ///   ...
    ///   next_n:
    ///     <pn>
    ///   done:
    /// ```
    pub(super) fn emit_alternation(&mut self, children: &[Ast]) -> CompileResult<()> {
        let Some((last, rest)) = children.split_last() else {
            return Ok(());
        };

        let done = self.builder.make_address();
        for child in rest {
            let next = self.builder.make_address();
            self.builder.build_save(next);
            self.emit_node(child)?;
            self.builder.build_branch(done);
            self.builder.label(next);
        }
        self.emit_node(last)?;
        self.builder.label(done);
        Ok(())
    }
}
