use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser that matches an exact byte sequence at the start of the input
///
/// The matched value is a sub-slice of the *input*, not of the literal, so it lives as long as
/// the parsed data. An empty literal always matches and consumes nothing.
#[derive(Debug, Clone, Copy)]
pub struct Literal<'lit> {
    expected: &'lit [u8],
}

impl<'lit> Literal<'lit> {
    pub fn new(expected: &'lit [u8]) -> Self {
        Literal { expected }
    }
}

impl<'code, 'lit> Parser<'code> for Literal<'lit> {
    type Output = Input<'code>;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        if input.starts_with(self.expected) {
            let (matched, tail) = input.split_at(self.expected.len());
            Ok(Outcome::Matched(matched, tail))
        } else {
            Ok(Outcome::NoMatch)
        }
    }
}

/// Convenience function to create a Literal parser
///
/// Accepts anything that views as bytes: `&str`, `&[u8]` or a byte-string literal.
///
/// ```
/// use bytecomb::{Outcome, Parser, string};
///
/// let outcome = string("let").parse(b"let x").unwrap();
/// assert_eq!(outcome, Outcome::Matched(&b"let"[..], &b" x"[..]));
/// assert_eq!(string("let").parse(b"fn x").unwrap(), Outcome::NoMatch);
/// ```
pub fn string<L>(literal: &L) -> Literal<'_>
where
    L: AsRef<[u8]> + ?Sized,
{
    Literal::new(literal.as_ref())
}
