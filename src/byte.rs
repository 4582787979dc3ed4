use crate::lookahead::{NotFollowedBy, not_followed_by};
use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser that consumes and returns a single byte
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

/// Convenience function to create a ByteParser
pub fn byte() -> ByteParser {
    ByteParser::new()
}

impl<'code> Parser<'code> for ByteParser {
    type Output = u8;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match input.split_first() {
            Some((&byte, tail)) => Ok(Outcome::Matched(byte, tail)),
            None => Ok(Outcome::NoMatch),
        }
    }
}

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy)]
pub struct IsByteParser {
    expected: u8,
}

impl IsByteParser {
    pub fn new(expected: u8) -> Self {
        IsByteParser { expected }
    }
}

impl<'code> Parser<'code> for IsByteParser {
    type Output = u8;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match input.split_first() {
            Some((&byte, tail)) if byte == self.expected => Ok(Outcome::Matched(byte, tail)),
            _ => Ok(Outcome::NoMatch),
        }
    }
}

/// Convenience function to create an IsByteParser
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser::new(expected)
}

/// Parser that matches one byte accepted by a predicate
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match input.split_first() {
            Some((&byte, tail)) if (self.predicate)(byte) => Ok(Outcome::Matched(byte, tail)),
            _ => Ok(Outcome::NoMatch),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(u8) -> bool,
{
    Satisfy::new(predicate)
}

/// Matches only when no input is left
pub type End = NotFollowedBy<ByteParser>;

/// Parser that succeeds with `()` at the end of input and consumes nothing
pub fn end() -> End {
    not_followed_by(byte())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_parser_sequence() {
        let parser = byte();

        let (b1, input) = parser.parse(b"abc").unwrap().into_option().unwrap();
        let (b2, input) = parser.parse(input).unwrap().into_option().unwrap();
        let (b3, input) = parser.parse(input).unwrap().into_option().unwrap();
        assert_eq!([b1, b2, b3], *b"abc");
        assert!(input.is_empty());

        assert_eq!(parser.parse(input).unwrap(), Outcome::NoMatch);
    }

    #[test]
    fn test_is_byte_success() {
        let outcome = is_byte(b'h').parse(b"hello").unwrap();
        assert_eq!(outcome, Outcome::Matched(b'h', &b"ello"[..]));
    }

    #[test]
    fn test_is_byte_failure() {
        assert_eq!(is_byte(b'h').parse(b"world").unwrap(), Outcome::NoMatch);
        assert_eq!(is_byte(b'h').parse(b"").unwrap(), Outcome::NoMatch);
    }

    #[test]
    fn test_is_byte_non_utf8() {
        let outcome = is_byte(0xFF).parse(&[0xFF, 0xFE]).unwrap();
        assert_eq!(outcome, Outcome::Matched(0xFF, &[0xFEu8][..]));
    }

    #[test]
    fn test_satisfy_range() {
        let digit = satisfy(|b| (b'0'..=b'9').contains(&b));
        assert_eq!(
            digit.parse(b"5abc").unwrap(),
            Outcome::Matched(b'5', &b"abc"[..])
        );
        // '/' sits just below '0' and ':' just above '9'
        assert_eq!(digit.parse(b"/").unwrap(), Outcome::NoMatch);
        assert_eq!(digit.parse(b":").unwrap(), Outcome::NoMatch);
        assert_eq!(digit.parse(b"").unwrap(), Outcome::NoMatch);
    }

    #[test]
    fn test_end() {
        assert_eq!(end().parse(b"").unwrap(), Outcome::Matched((), &b""[..]));
        assert_eq!(end().parse(b"x").unwrap(), Outcome::NoMatch);
    }
}
