use crate::ast::{Ast, Atom, ClassMember, CustomCharacterClass, PosixSet};
use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::parser::Parser;
use crate::parser::atoms::Escape;

const POSIX_SET_NAMES: &[&str] = &[
    "alnum", "alpha", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

impl Parser<'_> {
    /// `[...]` or `[^...]`
    pub(crate) fn parse_custom_character_class(&mut self) -> Result<Ast, ParseError> {
        Ok(Ast::CustomCharacterClass(self.lex_custom_class()?))
    }

    fn lex_custom_class(&mut self) -> Result<CustomCharacterClass, ParseError> {
        let start = self.offset();
        self.bump(); // [
        self.enter_nesting(start)?;

        let inverted = self.eat("^");
        let mut members = Vec::new();

        loop {
            match self.peek() {
                None => {
                    return Err(self.error_from(ParseErrorKind::Expected("]".to_string()), start));
                }
                Some("]") => break,
                Some(_) => members.push(self.parse_class_member()?),
            }
        }

        if members.is_empty() {
            return Err(self.error_here(ParseErrorKind::ExpectedCustomCharacterClassMembers));
        }
        self.bump(); // ]
        self.exit_nesting();

        Ok(CustomCharacterClass { inverted, members })
    }

    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.offset();

        if self.at("[") {
            if self.peek_nth(1) == Some(":") {
                return Ok(ClassMember::Posix(self.lex_posix_set()?));
            }
            return Ok(ClassMember::Custom(self.lex_custom_class()?));
        }

        let low = match self.lex_class_atom()? {
            Escape::Atom(atom) => atom,
            Escape::Quote(text) => return Ok(ClassMember::Quote(text)),
        };

        // A trailing '-' is a literal.
        let is_range = self.at("-") && !matches!(self.peek_nth(1), None | Some("]"));
        if !is_range {
            return Ok(ClassMember::Atom(low));
        }
        self.bump(); // -

        let high = match self.lex_class_atom()? {
            Escape::Atom(atom) => atom,
            Escape::Quote(_) => {
                return Err(self.error_from(ParseErrorKind::InvalidCharacterClassRangeOperand, start));
            }
        };
        if low.single_character().is_none() || high.single_character().is_none() {
            return Err(self.error_from(ParseErrorKind::InvalidCharacterClassRangeOperand, start));
        }

        Ok(ClassMember::Range(low, high))
    }

    fn lex_class_atom(&mut self) -> Result<Escape, ParseError> {
        if self.at("\\") {
            return self.lex_escape(true);
        }
        if self.at("[") {
            return Err(self.error_here(ParseErrorKind::InvalidCharacterClassRangeOperand));
        }
        let unit = self.bump_or_eof()?;
        Ok(Escape::Atom(Atom::Char(unit.to_string())))
    }

    /// `[:name:]` or `[:^name:]`
    fn lex_posix_set(&mut self) -> Result<PosixSet, ParseError> {
        let start = self.offset();
        self.pos += 2; // [:

        let inverted = self.eat("^");
        let name = self.eat_while(|u| u != ":" && u != "]");
        if !self.eat_seq(":]") {
            return Err(self.error_here(ParseErrorKind::Expected(":]".to_string())));
        }

        let normalized = name.to_ascii_lowercase();
        if !POSIX_SET_NAMES.contains(&normalized.as_str()) {
            return Err(self.error_from(
                ParseErrorKind::InvalidPosixSetName(name.to_string()),
                start,
            ));
        }

        Ok(PosixSet {
            name: normalized,
            inverted,
        })
    }
}
