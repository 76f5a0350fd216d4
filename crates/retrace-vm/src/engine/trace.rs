//! Tracing infrastructure for debugging VM execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! With `NoopTracer` every trait method is an `#[inline(always)]` empty
//! function, so the compiler drops the calls and their arguments. No
//! tracing state lives in the VM itself.
//!
//! `PrintTracer` collects one line per executed instruction plus indented
//! sub-lines for what the instruction did:
//!
//! ```text
//!   0   match "a"
//!     ● "a"
//!   1   split @0, save @2
//!   2   accept
//!     ◼ @1
//! ```

use retrace_bytecode::{Address, Instruction, Program, width_for_count};
use retrace_core::Colors;

use super::checkpoint::CheckpointKind;

const INSTRUCTION: &str = " ";
const CONSUME_SUCCESS: &str = "●";
const CONSUME_FAILURE: &str = "○";
const CHECKPOINT: &str = "+";
const CUT: &str = "✂";
const DONE: &str = "◼";
const BACKTRACK: &str = "❮❮❮";

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: instructions, consumed text, backtracks, outcome.
    #[default]
    Default,
    /// Verbose (-v): also checkpoint pushes and cuts.
    Verbose,
    /// Very verbose (-vv): also the input position on every instruction.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_instruction` - before executing an instruction
/// - `trace_consume` - after input was consumed
/// - `trace_consume_failure` - when input did not match
/// - `trace_checkpoint_created` - when a checkpoint is pushed
/// - `trace_backtrack` - when resuming from a checkpoint
/// - `trace_cut` - when a `cut` drops checkpoints down to a fence
/// - `trace_accept` - when the program accepts
/// - `trace_no_match` - when backtracking runs out of checkpoints
pub trait Tracer {
    /// Called before executing an instruction.
    fn trace_instruction(&mut self, ip: Address, instr: &Instruction, pos: usize);

    /// Called with the consumed input slice.
    fn trace_consume(&mut self, text: &str);

    /// Called when the input at `pos` does not match.
    fn trace_consume_failure(&mut self, pos: usize);

    /// Called after a checkpoint is pushed; `depth` is the new stack size.
    fn trace_checkpoint_created(&mut self, kind: CheckpointKind, depth: usize);

    /// Called when execution resumes from a checkpoint.
    fn trace_backtrack(&mut self, resume: Address, pos: usize);

    /// Called after a `cut`; `dropped` excludes the fence itself.
    fn trace_cut(&mut self, dropped: usize, pos: usize);

    /// Called when the program accepts with input consumed up to `end`.
    fn trace_accept(&mut self, end: usize);

    /// Called when no checkpoint is left to resume.
    fn trace_no_match(&mut self);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _ip: Address, _instr: &Instruction, _pos: usize) {}

    #[inline(always)]
    fn trace_consume(&mut self, _text: &str) {}

    #[inline(always)]
    fn trace_consume_failure(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_checkpoint_created(&mut self, _kind: CheckpointKind, _depth: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _resume: Address, _pos: usize) {}

    #[inline(always)]
    fn trace_cut(&mut self, _dropped: usize, _pos: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _end: usize) {}

    #[inline(always)]
    fn trace_no_match(&mut self) {}
}

/// Tracer that collects execution trace for debugging.
pub struct PrintTracer {
    /// Verbosity level for output filtering.
    verbosity: Verbosity,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Digits of the widest instruction index.
    step_width: usize,
    /// Color palette.
    colors: Colors,
}

impl PrintTracer {
    pub fn new(program: &Program, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            step_width: width_for_count(program.len()),
            colors,
        }
    }

    /// Collected lines, without trailing newlines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each ending in a newline.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// Add a line in the step column.
    fn add_step(&mut self, ip: Address, symbol: &str, content: &str) {
        let c = self.colors;
        let line = format!(
            "  {}{:0sw$}{} {symbol} {content}",
            c.dim,
            ip.index(),
            c.reset,
            sw = self.step_width
        );
        self.lines.push(line);
    }

    /// Add a sub-line (blank step area + symbol + content).
    fn add_subline(&mut self, symbol: &str, content: &str) {
        let step_area = 2 + self.step_width + 1;
        self.lines.push(format!("{:step_area$}{symbol} {content}", ""));
    }

    fn format_pos(&self, pos: usize) -> String {
        let c = self.colors;
        format!("{}@{pos}{}", c.dim, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_instruction(&mut self, ip: Address, instr: &Instruction, pos: usize) {
        let content = if self.verbosity == Verbosity::VeryVerbose {
            format!("{instr}  {}", self.format_pos(pos))
        } else {
            instr.to_string()
        };
        self.add_step(ip, INSTRUCTION, &content);
    }

    fn trace_consume(&mut self, text: &str) {
        let c = self.colors;
        let content = format!("{}{text:?}{}", c.green, c.reset);
        self.add_subline(CONSUME_SUCCESS, &content);
    }

    fn trace_consume_failure(&mut self, pos: usize) {
        let c = self.colors;
        let symbol = format!("{}{CONSUME_FAILURE}{}", c.red, c.reset);
        let content = self.format_pos(pos);
        self.add_subline(&symbol, &content);
    }

    fn trace_checkpoint_created(&mut self, kind: CheckpointKind, depth: usize) {
        // Checkpoint sub-lines hidden in default verbosity
        if self.verbosity == Verbosity::Default {
            return;
        }

        let what = match kind {
            CheckpointKind::Resume(ip) => format!("resume {ip}"),
            CheckpointKind::Placeholder => "placeholder".to_string(),
            CheckpointKind::Fence => "fence".to_string(),
        };
        self.add_subline(CHECKPOINT, &format!("{what} (depth {depth})"));
    }

    fn trace_backtrack(&mut self, resume: Address, pos: usize) {
        let c = self.colors;
        let symbol = format!("{}{BACKTRACK}{}", c.red, c.reset);
        let content = self.format_pos(pos);
        self.add_step(resume, &symbol, &content);
    }

    fn trace_cut(&mut self, dropped: usize, pos: usize) {
        // Cut sub-lines hidden in default verbosity
        if self.verbosity == Verbosity::Default {
            return;
        }

        let content = format!("dropped {dropped}, {}", self.format_pos(pos));
        self.add_subline(CUT, &content);
    }

    fn trace_accept(&mut self, end: usize) {
        let content = self.format_pos(end);
        self.add_subline(DONE, &content);
    }

    fn trace_no_match(&mut self) {
        let c = self.colors;
        let content = format!("{}no match{}", c.red, c.reset);
        self.add_subline(DONE, &content);
    }
}
