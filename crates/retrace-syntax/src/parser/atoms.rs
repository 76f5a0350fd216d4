use retrace_core::{ClassKind, ClassPredicate, Property};

use crate::ast::{Anchor, Ast, Atom, Reference};
use crate::diagnostics::{ParseError, ParseErrorKind, Radix};
use crate::parser::Parser;
use crate::parser::cursor::{is_digit, is_name_char, parse_number, single_char};

/// What a backslash escape stands for.
pub(crate) enum Escape {
    Atom(Atom),
    /// `\Q...\E`
    Quote(String),
}

impl Parser<'_> {
    /// `\d`, `\x41`, `\Q..\E`, ... outside a custom class.
    pub(crate) fn parse_escape(&mut self) -> Result<Ast, ParseError> {
        Ok(match self.lex_escape(false)? {
            Escape::Atom(atom) => Ast::Atom(atom),
            Escape::Quote(text) => Ast::Quote(text),
        })
    }

    pub(crate) fn lex_escape(&mut self, in_class: bool) -> Result<Escape, ParseError> {
        let start = self.offset();
        self.bump(); // backslash

        let Some(unit) = self.bump() else {
            return Err(self.error_from(ParseErrorKind::UnexpectedEndOfInput, start));
        };
        let Some(c) = single_char(unit) else {
            return Ok(Escape::Atom(Atom::Char(unit.to_string())));
        };

        let atom = match c {
            'd' => class(ClassKind::Digit, false),
            'D' => class(ClassKind::Digit, true),
            'w' => class(ClassKind::Word, false),
            'W' => class(ClassKind::Word, true),
            's' => class(ClassKind::Whitespace, false),
            'S' => class(ClassKind::Whitespace, true),
            'h' => class(ClassKind::HorizontalWhitespace, false),
            'H' => class(ClassKind::HorizontalWhitespace, true),
            'v' => class(ClassKind::VerticalWhitespace, false),
            'V' => class(ClassKind::VerticalWhitespace, true),
            'R' => class(ClassKind::NewlineSequence, false),
            'N' => class(ClassKind::NewlineSequence, true),
            'X' => class(ClassKind::AnyGrapheme, false),

            'n' => Atom::Scalar('\n'),
            't' => Atom::Scalar('\t'),
            'r' => Atom::Scalar('\r'),
            'f' => Atom::Scalar('\u{c}'),
            'e' => Atom::Scalar('\u{1b}'),
            'a' => Atom::Scalar('\u{7}'),
            'b' if in_class => Atom::Scalar('\u{8}'),
            '0' => {
                let digits = self.lex_digits(Radix::Octal, 2);
                let value = if digits.is_empty() {
                    0
                } else {
                    self.number(digits, Radix::Octal, start)?
                };
                Atom::Scalar(self.scalar(value, start)?)
            }
            'x' => Atom::Scalar(self.lex_hex_scalar(2, start)?),
            'u' => Atom::Scalar(self.lex_hex_scalar(4, start)?),
            'U' => Atom::Scalar(self.lex_fixed_scalar(Radix::Hex, 8, start)?),
            'o' => {
                self.expect("{")?;
                Atom::Scalar(self.lex_braced_scalar(Radix::Octal, start)?)
            }
            'c' => Atom::Scalar(self.lex_control(start)?),
            'p' => self.lex_property(false, start)?,
            'P' => self.lex_property(true, start)?,

            'A' | 'z' | 'Z' | 'b' | 'B' | 'G' | 'k' | 'g' | '1'..='9' if in_class => {
                return Err(self.error_from(
                    ParseErrorKind::Misc(format!("'\\{c}' is not allowed in a custom character class")),
                    start,
                ));
            }
            'A' => Atom::Anchor(Anchor::StartOfSubject),
            'z' => Atom::Anchor(Anchor::EndOfSubject),
            'Z' => Atom::Anchor(Anchor::EndOfSubjectBeforeNewline),
            'b' => Atom::Anchor(Anchor::WordBoundary),
            'B' => Atom::Anchor(Anchor::NotWordBoundary),
            'G' => Atom::Anchor(Anchor::FirstMatchingPosition),
            '1'..='9' => {
                self.pos -= 1;
                let digits = self.lex_digits(Radix::Decimal, usize::MAX);
                let n = self.number(digits, Radix::Decimal, start)?;
                Atom::Backreference(Reference::Absolute(n))
            }
            'k' => Atom::Backreference(self.lex_named_reference(start)?),
            'g' => Atom::Backreference(self.lex_g_reference(start)?),

            'Q' => return Ok(Escape::Quote(self.lex_quote())),

            c if c.is_ascii_alphanumeric() => {
                return Err(self.error_from(
                    ParseErrorKind::Misc(format!("invalid escape sequence '\\{c}'")),
                    start,
                ));
            }
            _ => Atom::Char(unit.to_string()),
        };

        Ok(Escape::Atom(atom))
    }

    fn number(&self, digits: &str, radix: Radix, start: usize) -> Result<u32, ParseError> {
        parse_number(digits, radix).map_err(|kind| self.error_from(kind, start))
    }

    fn scalar(&self, value: u32, start: usize) -> Result<char, ParseError> {
        char::from_u32(value).ok_or_else(|| {
            self.error_from(
                ParseErrorKind::Misc(format!("invalid scalar value {value:#X}")),
                start,
            )
        })
    }

    /// `{H..}` or exactly `count` hex digits.
    fn lex_hex_scalar(&mut self, count: usize, start: usize) -> Result<char, ParseError> {
        if self.eat("{") {
            return self.lex_braced_scalar(Radix::Hex, start);
        }
        self.lex_fixed_scalar(Radix::Hex, count, start)
    }

    fn lex_fixed_scalar(
        &mut self,
        radix: Radix,
        count: usize,
        start: usize,
    ) -> Result<char, ParseError> {
        let digits = self.lex_digits(radix, count);
        if digits.len() < count {
            return Err(self.error_from(
                ParseErrorKind::ExpectedNumDigits(digits.to_string(), count),
                start,
            ));
        }
        let value = self.number(digits, radix, start)?;
        self.scalar(value, start)
    }

    /// Digits up to `}`; the opening brace is already consumed.
    fn lex_braced_scalar(&mut self, radix: Radix, start: usize) -> Result<char, ParseError> {
        let text = self.eat_while(|u| u != "}");
        self.expect("}")?;

        let digits = text.trim();
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.value())) {
            return Err(self.error_from(
                ParseErrorKind::ExpectedNumber(text.to_string(), radix),
                start,
            ));
        }
        let value = self.number(digits, radix, start)?;
        self.scalar(value, start)
    }

    /// `\cX`
    fn lex_control(&mut self, start: usize) -> Result<char, ParseError> {
        let Some(unit) = self.bump() else {
            return Err(self.error_from(ParseErrorKind::UnexpectedEndOfInput, start));
        };
        match single_char(unit) {
            Some(c) if c.is_ascii() => Ok(((c.to_ascii_uppercase() as u8) ^ 0x40) as char),
            _ => {
                let c = unit.chars().next().unwrap_or_default();
                Err(self.error_from(ParseErrorKind::ExpectedAscii(c), start))
            }
        }
    }

    /// `\p{Name}`, `\pL`, `\p{^Name}`
    fn lex_property(&mut self, inverted: bool, start: usize) -> Result<Atom, ParseError> {
        let name = if self.eat("{") {
            let name = self.eat_while(|u| u != "}");
            self.expect("}")?;
            name
        } else {
            match self.bump() {
                Some(unit) => unit,
                None => return Err(self.error_from(ParseErrorKind::UnexpectedEndOfInput, start)),
            }
        };

        let (name, inverted) = match name.strip_prefix('^') {
            Some(rest) => (rest.trim(), !inverted),
            None => (name.trim(), inverted),
        };
        if name.is_empty() {
            return Err(self.error_from(ParseErrorKind::EmptyProperty, start));
        }

        Ok(match Property::from_name(name) {
            Some(property) => {
                let predicate = ClassPredicate::property(property);
                Atom::Class(if inverted { predicate.inverted() } else { predicate })
            }
            None => Atom::Property {
                name: name.to_string(),
                inverted,
            },
        })
    }

    /// `\k<name>`, `\k{name}`, `\k'name'`
    fn lex_named_reference(&mut self, start: usize) -> Result<Reference, ParseError> {
        let close = match self.peek() {
            Some("<") => ">",
            Some("{") => "}",
            Some("'") => "'",
            _ => return Err(self.error_here(ParseErrorKind::Expected("<".to_string()))),
        };
        self.bump();
        let name = self.lex_group_name(start)?;
        self.expect(close)?;
        Ok(Reference::Named(name))
    }

    /// `\g1`, `\g-1`, `\g{2}`, `\g{-1}`, `\g{+1}`, `\g{name}`
    fn lex_g_reference(&mut self, start: usize) -> Result<Reference, ParseError> {
        let braced = self.eat("{");

        let reference = match self.peek() {
            Some("-") | Some("+") => {
                let negative = self.at("-");
                self.bump();
                let digits = self.lex_digits(Radix::Decimal, usize::MAX);
                let n = self.number(digits, Radix::Decimal, start)?;
                let n = i32::try_from(n).map_err(|_| {
                    self.error_from(ParseErrorKind::NumberOverflow(digits.to_string()), start)
                })?;
                Reference::Relative(if negative { -n } else { n })
            }
            Some(unit) if is_digit(unit, Radix::Decimal) => {
                let digits = self.lex_digits(Radix::Decimal, usize::MAX);
                Reference::Absolute(self.number(digits, Radix::Decimal, start)?)
            }
            _ if braced => Reference::Named(self.lex_group_name(start)?),
            _ => return Err(self.error_here(ParseErrorKind::Expected("{".to_string()))),
        };

        if braced {
            self.expect("}")?;
        }
        Ok(reference)
    }

    pub(crate) fn lex_group_name(&mut self, start: usize) -> Result<String, ParseError> {
        let name = self.eat_while(is_name_char);
        if name.is_empty() {
            return Err(self.error_from(
                ParseErrorKind::Misc("expected group name".to_string()),
                start,
            ));
        }
        Ok(name.to_string())
    }

    /// Text after `\Q` up to `\E` or the end of input.
    fn lex_quote(&mut self) -> String {
        let begin = self.offset();
        loop {
            let end = self.offset();
            if self.at_end() || self.eat_seq("\\E") {
                return self.source[begin..end].to_string();
            }
            self.bump();
        }
    }
}

fn class(kind: ClassKind, inverted: bool) -> Atom {
    let predicate = ClassPredicate::new(kind);
    Atom::Class(if inverted { predicate.inverted() } else { predicate })
}
