use crate::ast::Ast;
use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::group::{GroupKind, MatchingOption, MatchingOptionSequence};
use crate::parser::Parser;
use crate::parser::cursor::single_char;
use crate::parser::expressions::Operand;

impl Parser<'_> {
    /// `(` specifier? alternation `)`
    pub(crate) fn parse_group(&mut self) -> Result<Operand, ParseError> {
        let start = self.offset();
        self.bump(); // (

        let kind = if self.eat("?") {
            if self.eat("#") {
                return self.parse_comment(start);
            }
            match self.parse_group_specifier(start)? {
                Specifier::Kind(kind) => kind,
                Specifier::Isolated(options) => {
                    return Ok(Operand::ScopeRest(GroupKind::ChangeMatchingOptions {
                        options,
                        implicit_scope: true,
                    }));
                }
            }
        } else if self.eat("*") {
            if self.eat_seq("sr:") {
                GroupKind::ScriptRun
            } else if self.eat_seq("asr:") {
                GroupKind::AtomicScriptRun
            } else {
                return Err(self.error_from(ParseErrorKind::ExpectedGroupSpecifier, start));
            }
        } else {
            GroupKind::Capture
        };

        self.enter_nesting(start)?;
        let child = self.parse_alternation()?;
        self.exit_nesting();

        if !self.eat(")") {
            return Err(self.error_from(ParseErrorKind::Expected(")".to_string()), start));
        }
        Ok(Operand::Node(Ast::group(kind, child)))
    }

    /// `(?#...)`
    fn parse_comment(&mut self, start: usize) -> Result<Operand, ParseError> {
        let text = self.eat_while(|u| u != ")");
        if !self.eat(")") {
            return Err(self.error_from(ParseErrorKind::Expected(")".to_string()), start));
        }
        Ok(Operand::Node(Ast::Trivia(text.to_string())))
    }

    /// Everything between `(?` and the group body.
    fn parse_group_specifier(&mut self, start: usize) -> Result<Specifier, ParseError> {
        let kind = match self.peek() {
            Some(":") => GroupKind::NonCapture,
            Some("|") => GroupKind::NonCaptureReset,
            Some(">") => GroupKind::Atomic,
            Some("=") => GroupKind::Lookahead,
            Some("!") => GroupKind::NegativeLookahead,
            Some("*") => GroupKind::NonAtomicLookahead,
            Some("<") => {
                self.bump();
                let kind = if self.eat("=") {
                    GroupKind::Lookbehind
                } else if self.eat("!") {
                    GroupKind::NegativeLookbehind
                } else if self.eat("*") {
                    GroupKind::NonAtomicLookbehind
                } else {
                    let name = self.lex_group_name(start)?;
                    self.expect(">")?;
                    GroupKind::NamedCapture(name)
                };
                return Ok(Specifier::Kind(kind));
            }
            Some("'") => {
                self.bump();
                let name = self.lex_group_name(start)?;
                self.expect("'")?;
                return Ok(Specifier::Kind(GroupKind::NamedCapture(name)));
            }
            Some("P") if self.peek_nth(1) == Some("<") => {
                self.pos += 2;
                let name = self.lex_group_name(start)?;
                self.expect(">")?;
                return Ok(Specifier::Kind(GroupKind::NamedCapture(name)));
            }
            _ => return self.parse_matching_options(start),
        };

        self.bump();
        Ok(Specifier::Kind(kind))
    }

    /// `^`? options (`-` options)? followed by `:` or `)`.
    fn parse_matching_options(&mut self, start: usize) -> Result<Specifier, ParseError> {
        let mut options = MatchingOptionSequence {
            caret: self.eat("^"),
            ..Default::default()
        };

        while let Some(option) = self.lex_matching_option()? {
            options.adding.push(option);
        }

        if self.at("-") {
            if options.caret {
                return Err(self.error_here(ParseErrorKind::Misc(
                    "cannot remove options after '^'".to_string(),
                )));
            }
            self.bump();
            loop {
                let option_start = self.offset();
                let Some(option) = self.lex_matching_option()? else {
                    break;
                };
                if option.is_text_segment_mode() {
                    return Err(self.error_from(
                        ParseErrorKind::CannotRemoveTextSegmentOptions,
                        option_start,
                    ));
                }
                options.removing.push(option);
            }
        }

        if !options.caret && options.adding.is_empty() && options.removing.is_empty() {
            return Err(self.error_from(ParseErrorKind::ExpectedGroupSpecifier, start));
        }

        if self.eat(":") {
            return Ok(Specifier::Kind(GroupKind::ChangeMatchingOptions {
                options,
                implicit_scope: false,
            }));
        }
        if self.eat(")") {
            return Ok(Specifier::Isolated(options));
        }
        Err(self.error_here(ParseErrorKind::Expected(":".to_string())))
    }

    fn lex_matching_option(&mut self) -> Result<Option<MatchingOption>, ParseError> {
        let Some(c) = self.peek().and_then(single_char) else {
            return Ok(None);
        };

        if c == 'x' {
            self.bump();
            if self.eat("x") {
                return Ok(Some(MatchingOption::ExtraExtended));
            }
            return Ok(Some(MatchingOption::Extended));
        }

        if c == 'y' {
            self.bump();
            self.expect("{")?;
            let option = if self.eat("g") {
                MatchingOption::TextSegmentGraphemeMode
            } else if self.eat("w") {
                MatchingOption::TextSegmentWordMode
            } else {
                return Err(self.error_here(ParseErrorKind::Misc(
                    "unknown text segment mode".to_string(),
                )));
            };
            self.expect("}")?;
            return Ok(Some(option));
        }

        let Some(option) = MatchingOption::from_letter(c) else {
            return Ok(None);
        };
        self.bump();
        Ok(Some(option))
    }
}

enum Specifier {
    Kind(GroupKind),
    /// `(?i)`: options with no body of their own.
    Isolated(MatchingOptionSequence),
}
