//! Compiled patterns and the matching entry points.

use std::ops::Range;

use retrace_bytecode::Program;
use retrace_compiler::compile;
use retrace_core::MatchLevel;
use retrace_core::text::grapheme_boundaries;
use retrace_syntax::parser::DEFAULT_MAX_DEPTH;
use retrace_syntax::{Parser, SyntaxOptions};
use retrace_vm::{FuelLimits, Tracer, VM};

use crate::Result;

/// Parse and compile `pattern` with default settings.
///
/// The `syntax` selector picks traditional or experimental surface syntax;
/// matching happens at grapheme-cluster level.
pub fn compile_regex(pattern: &str, syntax: SyntaxOptions) -> Result<Regex> {
    RegexBuilder::new(pattern).syntax(syntax).build()
}

/// Builder for [`Regex`].
pub struct RegexBuilder<'p> {
    pattern: &'p str,
    syntax: SyntaxOptions,
    match_level: MatchLevel,
    limits: FuelLimits,
    max_depth: u32,
}

impl<'p> RegexBuilder<'p> {
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            syntax: SyntaxOptions::TRADITIONAL,
            match_level: MatchLevel::default(),
            limits: FuelLimits::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn syntax(mut self, syntax: SyntaxOptions) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn match_level(mut self, level: MatchLevel) -> Self {
        self.match_level = level;
        self
    }

    /// Limits applied to every match attempt.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Maximum group and class nesting accepted by the parser.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Result<Regex> {
        let ast = Parser::new(self.pattern)
            .syntax(self.syntax)
            .max_depth(self.max_depth)
            .parse()?;
        let program = compile(&ast, self.match_level)?;
        Ok(Regex {
            pattern: self.pattern.to_string(),
            program,
            match_level: self.match_level,
            limits: self.limits,
        })
    }
}

/// A compiled pattern.
///
/// Matching never mutates the regex, so one instance can serve many
/// subjects (and threads) at once.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    program: Program,
    match_level: MatchLevel,
    limits: FuelLimits,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder<'_> {
        RegexBuilder::new(pattern)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn match_level(&self) -> MatchLevel {
        self.match_level
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// End offset of a match anchored at byte offset `start`.
    ///
    /// A `start` that is not a char boundary of `subject` never matches.
    pub fn matches_at(&self, subject: &str, start: usize) -> Result<Option<usize>> {
        if !subject.is_char_boundary(start) {
            return Ok(None);
        }
        let end = VM::new(subject, self.limits).execute(&self.program, start)?;
        Ok(end)
    }

    /// Like [`Regex::matches_at`], reporting every step to `tracer`.
    pub fn trace_at<T: Tracer>(
        &self,
        subject: &str,
        start: usize,
        tracer: &mut T,
    ) -> Result<Option<usize>> {
        if !subject.is_char_boundary(start) {
            return Ok(None);
        }
        let end = VM::new(subject, self.limits).execute_with(&self.program, start, tracer)?;
        Ok(end)
    }

    /// Leftmost match, trying each of [`Regex::start_positions`] in order.
    pub fn find(&self, subject: &str) -> Result<Option<Range<usize>>> {
        for start in self.start_positions(subject) {
            if let Some(end) = self.matches_at(subject, start)? {
                return Ok(Some(start..end));
            }
        }
        Ok(None)
    }

    pub fn is_match(&self, subject: &str) -> Result<bool> {
        Ok(self.find(subject)?.is_some())
    }

    /// Whether some path through the pattern consumes all of `subject`.
    pub fn whole_match(&self, subject: &str) -> Result<bool> {
        let end = VM::builder(subject)
            .limits(self.limits)
            .accept_at_end(true)
            .build()
            .execute(&self.program, 0)?;
        Ok(end.is_some())
    }

    /// Offsets [`Regex::find`] tries, in order.
    ///
    /// Grapheme boundaries at grapheme level, scalar boundaries at scalar
    /// level. Both include `subject.len()`.
    pub fn start_positions(&self, subject: &str) -> Vec<usize> {
        match self.match_level {
            MatchLevel::GraphemeCluster => grapheme_boundaries(subject),
            MatchLevel::UnicodeScalar => subject
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(subject.len()))
                .collect(),
        }
    }
}
