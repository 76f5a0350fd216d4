use crate::ast::{Anchor, Ast, Atom};
use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::group::GroupKind;
use crate::parser::Parser;
use crate::parser::cursor::single_char;

/// Result of parsing one operand.
pub(crate) enum Operand {
    Node(Ast),
    /// `(?i)`: the options apply to the rest of the enclosing concatenation.
    ScopeRest(GroupKind),
}

impl Parser<'_> {
    /// `a|b|c`
    pub(crate) fn parse_alternation(&mut self) -> Result<Ast, ParseError> {
        let mut branches = vec![self.parse_concatenation()?];
        while self.eat("|") {
            branches.push(self.parse_concatenation()?);
        }

        if branches.len() == 1 {
            return Ok(branches.pop().unwrap_or(Ast::Empty));
        }
        Ok(Ast::Alternation(branches))
    }

    /// Operands up to the next `|`, `)` or end of input.
    pub(crate) fn parse_concatenation(&mut self) -> Result<Ast, ParseError> {
        let mut children = Vec::new();

        while let Some(unit) = self.peek() {
            if unit == "|" || unit == ")" {
                break;
            }

            if self.syntax.whitespace_is_trivia && is_whitespace(unit) {
                let text = self.eat_while(is_whitespace);
                children.push(Ast::Trivia(text.to_string()));
                continue;
            }

            match self.parse_operand()? {
                Operand::Node(node) => {
                    let node = self.parse_quantifiers(node)?;
                    children.push(node);
                }
                Operand::ScopeRest(kind) => {
                    let rest = self.parse_concatenation()?;
                    children.push(Ast::group(kind, rest));
                    break;
                }
            }
        }

        Ok(Ast::concatenation(children))
    }

    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let start = self.offset();
        let Some(unit) = self.peek() else {
            return Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput));
        };

        let node = match unit {
            "(" => return self.parse_group(),
            "[" => self.parse_custom_character_class()?,
            "\\" => self.parse_escape()?,
            "." => {
                self.bump();
                Ast::Atom(Atom::Any)
            }
            "^" => {
                self.bump();
                Ast::Atom(Atom::Anchor(Anchor::StartOfLine))
            }
            "$" => {
                self.bump();
                Ast::Atom(Atom::Anchor(Anchor::EndOfLine))
            }
            "*" | "+" | "?" => {
                return Err(self.error_here(ParseErrorKind::Misc(
                    "quantifier without operand".to_string(),
                )));
            }
            "{" if self.at_bound() => {
                return Err(self.error_here(ParseErrorKind::Misc(
                    "quantifier without operand".to_string(),
                )));
            }
            "\"" if self.syntax.quoted_literals => {
                self.bump();
                let text = self.eat_while(|u| u != "\"");
                if !self.eat("\"") {
                    return Err(self.error_from(ParseErrorKind::Expected("\"".to_string()), start));
                }
                Ast::Quote(text.to_string())
            }
            _ => {
                self.bump();
                Ast::char(unit)
            }
        };

        Ok(Operand::Node(node))
    }
}

fn is_whitespace(unit: &str) -> bool {
    single_char(unit).is_some_and(char::is_whitespace) || unit == "\r\n"
}
