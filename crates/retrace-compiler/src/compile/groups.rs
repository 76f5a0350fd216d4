use retrace_syntax::{Group, GroupKind};

use super::compiler::Compiler;
use super::error::{CompileError, CompileResult};

impl Compiler<'_> {
    /// Capturing and option groups are transparent; captures are not
    /// recorded by the VM. Atomic groups and lookahead fence their body:
    ///
    /// ```text
    /// (?>X)   fence; X; cut
    /// (?=X)   fence; X; cut restore
    /// (?!X)   save pass; fence; X; cut; clear; fail; pass:
    /// ```
    pub(super) fn emit_group(&mut self, group: &Group) -> CompileResult<()> {
        match &group.kind {
            GroupKind::Capture
            | GroupKind::NamedCapture(_)
            | GroupKind::NonCapture
            | GroupKind::NonCaptureReset
            | GroupKind::ChangeMatchingOptions { .. } => self.emit_node(&group.child),

            GroupKind::Atomic => {
                self.builder.build_fence();
                self.emit_node(&group.child)?;
                self.builder.build_cut(false);
                Ok(())
            }

            GroupKind::Lookahead => {
                self.builder.build_fence();
                self.emit_node(&group.child)?;
                self.builder.build_cut(true);
                Ok(())
            }

            GroupKind::NegativeLookahead => {
                let pass = self.builder.make_address();
                self.builder.build_save(pass);
                self.builder.build_fence();
                self.emit_node(&group.child)?;
                self.builder.build_cut(false);
                self.builder.build_clear();
                self.builder.build_fail();
                self.builder.label(pass);
                Ok(())
            }

            GroupKind::NonAtomicLookahead
            | GroupKind::Lookbehind
            | GroupKind::NegativeLookbehind
            | GroupKind::NonAtomicLookbehind
            | GroupKind::ScriptRun
            | GroupKind::AtomicScriptRun => Err(CompileError::Unsupported(group.dump_base())),
        }
    }
}
