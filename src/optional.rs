use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Behaves like `choice((p.map(Some), empty().map(|()| None)))`: `Some(value)` with the inner
/// tail when the parser matches, `None` with the untouched input when it does not. Never
/// `NoMatch`; hard errors still propagate.
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input)? {
            Outcome::Matched(value, tail) => Ok(Outcome::Matched(Some(value), tail)),
            Outcome::NoMatch => Ok(Outcome::Matched(None, input)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
