use crate::diagnostics::{ParseError, ParseErrorKind, Radix};
use crate::parser::Parser;

impl<'src> Parser<'src> {
    pub(crate) fn peek(&self) -> Option<&'src str> {
        self.peek_nth(0)
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<&'src str> {
        self.units.get(self.pos + n).map(|&(_, unit)| unit)
    }

    pub(crate) fn at(&self, text: &str) -> bool {
        self.peek() == Some(text)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.units.len()
    }

    /// Byte offset of the next unit, or the source length at the end.
    pub(crate) fn offset(&self) -> usize {
        self.units
            .get(self.pos)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    pub(crate) fn bump(&mut self) -> Option<&'src str> {
        let unit = self.peek()?;
        self.pos += 1;
        Some(unit)
    }

    pub(crate) fn bump_or_eof(&mut self) -> Result<&'src str, ParseError> {
        match self.bump() {
            Some(unit) => Ok(unit),
            None => Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput)),
        }
    }

    pub(crate) fn eat(&mut self, text: &str) -> bool {
        if self.at(text) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consume `text` if the next units spell it exactly, one scalar per unit.
    pub(crate) fn eat_seq(&mut self, text: &str) -> bool {
        let matches = text.chars().enumerate().all(|(i, c)| {
            self.peek_nth(i)
                .is_some_and(|unit| single_char(unit) == Some(c))
        });
        if matches {
            self.pos += text.chars().count();
        }
        matches
    }

    pub(crate) fn expect(&mut self, text: &str) -> Result<(), ParseError> {
        if self.eat(text) {
            return Ok(());
        }
        Err(self.error_here(ParseErrorKind::Expected(text.to_string())))
    }

    /// Consume units while `pred` holds and return the covered source text.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(&str) -> bool) -> &'src str {
        let start = self.offset();
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.source[start..self.offset()]
    }

    /// Like [`Self::eat_while`] but stops after `max` units.
    pub(crate) fn eat_up_to(&mut self, max: usize, pred: impl Fn(&str) -> bool) -> &'src str {
        let start = self.offset();
        let mut taken = 0;
        while taken < max && self.peek().is_some_and(&pred) {
            self.pos += 1;
            taken += 1;
        }
        &self.source[start..self.offset()]
    }

    /// Error spanning from `start` to the current offset.
    pub(crate) fn error_from(&self, kind: ParseErrorKind, start: usize) -> ParseError {
        ParseError::new(kind, start..self.offset().max(start))
    }

    /// Error covering the next unit, or the end of input.
    pub(crate) fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        let start = self.offset();
        let end = self.peek().map_or(start, |unit| start + unit.len());
        ParseError::new(kind, start..end)
    }

    pub(crate) fn enter_nesting(&mut self, start: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error_from(
                ParseErrorKind::Misc(format!("pattern nested deeper than {} levels", self.max_depth)),
                start,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_nesting(&mut self) {
        assert!(self.depth > 0, "exit_nesting: unbalanced nesting");
        self.depth -= 1;
    }

    /// Digits of `radix`, at most `max` of them.
    pub(crate) fn lex_digits(&mut self, radix: Radix, max: usize) -> &'src str {
        self.eat_up_to(max, |unit| is_digit(unit, radix))
    }
}

/// The scalar of a unit that holds exactly one.
pub(crate) fn single_char(unit: &str) -> Option<char> {
    let mut chars = unit.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

pub(crate) fn is_digit(unit: &str, radix: Radix) -> bool {
    single_char(unit).is_some_and(|c| c.is_digit(radix.value()))
}

pub(crate) fn is_name_char(unit: &str) -> bool {
    single_char(unit).is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Parse `digits` in `radix`.
pub(crate) fn parse_number(digits: &str, radix: Radix) -> Result<u32, ParseErrorKind> {
    if digits.is_empty() {
        return Err(ParseErrorKind::ExpectedNumber(digits.to_string(), radix));
    }
    u32::from_str_radix(digits, radix.value())
        .map_err(|_| ParseErrorKind::NumberOverflow(digits.to_string()))
}
