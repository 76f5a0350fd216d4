//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use retrace_lib::{MatchLevel, SyntaxOptions, Verbosity};

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::pattern::PatternInput;
use crate::commands::trace::TraceArgs;

/// Pattern and compile settings shared by every command.
#[derive(Debug, PartialEq, Eq)]
pub struct PatternParams {
    pub pattern: String,
    pub syntax: SyntaxOptions,
    pub level: MatchLevel,
}

impl PatternParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            syntax: parse_syntax(m),
            level: parse_level(m),
        }
    }
}

impl From<PatternParams> for PatternInput {
    fn from(p: PatternParams) -> Self {
        Self {
            pattern: p.pattern,
            syntax: p.syntax,
            level: p.level,
        }
    }
}

pub struct AstParams {
    pub pattern: PatternParams,
    pub color: ColorChoice,
    // Note: subject, fuel, verbose, whole are parsed but not extracted (unified flags)
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.pattern.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: PatternParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.pattern.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern: PatternParams,
    pub subject_text: Option<String>,
    pub subject_path: Option<PathBuf>,
    pub fuel: u32,
    pub whole: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            subject_text: m.get_one::<String>("subject").cloned(),
            subject_path: m.get_one::<PathBuf>("subject_file").cloned(),
            fuel: parse_fuel(m),
            whole: m.get_flag("whole"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            input: p.pattern.into(),
            subject_text: p.subject_text,
            subject_path: p.subject_path,
            fuel: p.fuel,
            whole: p.whole,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: PatternParams,
    pub subject_text: Option<String>,
    pub subject_path: Option<PathBuf>,
    pub fuel: u32,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: whole is parsed but not extracted (unified flag)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            subject_text: m.get_one::<String>("subject").cloned(),
            subject_path: m.get_one::<PathBuf>("subject_file").cloned(),
            fuel: parse_fuel(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: p.pattern.into(),
            subject_text: p.subject_text,
            subject_path: p.subject_path,
            fuel: p.fuel,
            verbosity: verbosity_for(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

fn verbosity_for(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_syntax(m: &ArgMatches) -> SyntaxOptions {
    match m.get_one::<String>("syntax").map(|s| s.as_str()) {
        Some("experimental") => SyntaxOptions::EXPERIMENTAL,
        _ => SyntaxOptions::TRADITIONAL,
    }
}

fn parse_level(m: &ArgMatches) -> MatchLevel {
    match m.get_one::<String>("level").map(|s| s.as_str()) {
        Some("scalar") => MatchLevel::UnicodeScalar,
        _ => MatchLevel::GraphemeCluster,
    }
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000)
}
