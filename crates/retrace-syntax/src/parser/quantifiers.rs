use crate::ast::{Amount, Ast, QuantKind};
use crate::diagnostics::{ParseError, Radix};
use crate::parser::Parser;
use crate::parser::cursor::{is_digit, parse_number};

impl Parser<'_> {
    /// Wrap `node` in every quantifier that follows it.
    pub(crate) fn parse_quantifiers(&mut self, mut node: Ast) -> Result<Ast, ParseError> {
        loop {
            let amount = match self.peek() {
                Some("*") => {
                    self.bump();
                    Amount::ZeroOrMore
                }
                Some("+") => {
                    self.bump();
                    Amount::OneOrMore
                }
                Some("?") => {
                    self.bump();
                    Amount::ZeroOrOne
                }
                Some("{") if self.at_bound() => self.parse_bound()?,
                _ => return Ok(node),
            };

            let kind = if self.eat("?") {
                QuantKind::Reluctant
            } else if self.eat("+") {
                QuantKind::Possessive
            } else {
                QuantKind::Eager
            };

            node = Ast::quantification(amount, kind, node);
        }
    }

    /// Whether the next units form `{n}`, `{n,}`, `{,m}` or `{n,m}`.
    ///
    /// Anything else starting with `{` is a literal brace.
    pub(crate) fn at_bound(&self) -> bool {
        if !self.at("{") {
            return false;
        }

        let mut i = 1;
        let mut digits = 0;
        let mut skip_digits = |i: &mut usize| {
            while self.peek_nth(*i).is_some_and(|u| is_digit(u, Radix::Decimal)) {
                *i += 1;
                digits += 1;
            }
        };

        skip_digits(&mut i);
        if self.peek_nth(i) == Some(",") {
            i += 1;
            skip_digits(&mut i);
        }

        digits > 0 && self.peek_nth(i) == Some("}")
    }

    fn parse_bound(&mut self) -> Result<Amount, ParseError> {
        let start = self.offset();
        self.bump(); // {
        let low = self.lex_digits(Radix::Decimal, usize::MAX);
        let comma = self.eat(",");
        let high = self.lex_digits(Radix::Decimal, usize::MAX);
        self.bump(); // }

        let number = |digits: &str| {
            parse_number(digits, Radix::Decimal).map_err(|kind| self.error_from(kind, start))
        };

        Ok(match (low.is_empty(), comma, high.is_empty()) {
            (false, false, _) => Amount::Exactly(number(low)?),
            (false, true, true) => Amount::NOrMore(number(low)?),
            (false, true, false) => Amount::Range(number(low)?, number(high)?),
            (true, _, _) => Amount::UpToN(number(high)?),
        })
    }
}
