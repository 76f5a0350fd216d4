//! Shared pattern and subject loading for all commands.
//!
//! Failures are reported on stderr and end the process: exit code 1 for bad
//! input, 2 for runtime errors.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use retrace_lib::{Ast, Error, FuelLimits, MatchLevel, Regex, RegexBuilder, SyntaxOptions};
use retrace_syntax::Parser;

pub struct PatternInput {
    pub pattern: String,
    pub syntax: SyntaxOptions,
    pub level: MatchLevel,
}

impl PatternInput {
    /// Parse the pattern or exit with a rendered diagnostic.
    pub fn parse(&self, color: bool) -> Ast {
        match Parser::new(&self.pattern).syntax(self.syntax).parse() {
            Ok(ast) => ast,
            Err(e) => {
                eprint!("{}", e.render(&self.pattern, color));
                std::process::exit(1);
            }
        }
    }

    /// Compile the pattern or exit with a diagnostic.
    pub fn compile(&self, fuel: u32, color: bool) -> Regex {
        let built = RegexBuilder::new(&self.pattern)
            .syntax(self.syntax)
            .match_level(self.level)
            .limits(FuelLimits::new().exec_fuel(fuel))
            .build();
        match built {
            Ok(regex) => regex,
            Err(Error::Parse(e)) => {
                eprint!("{}", e.render(&self.pattern, color));
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("no subject given (pass SUBJECT or --subject-file)")]
    MissingSubject,
}

/// Subject from inline text, a file, or stdin (`-`).
pub fn load_subject(text: Option<&str>, path: Option<&Path>) -> Result<String, InputError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    let Some(path) = path else {
        return Err(InputError::MissingSubject);
    };

    let read_err = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

/// Load the subject or exit with an error.
pub fn require_subject(text: Option<&str>, path: Option<&Path>) -> String {
    match load_subject(text, path) {
        Ok(subject) => subject,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
