use crate::error::Error;
use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The tail is left exactly as the inner parser returned it. `NoMatch` and hard errors pass
/// through without calling the mapper.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parser.parse(input)?.map(&self.mapper))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator whose mapping function may fail
///
/// A failing transform is a hard error. It is never turned into `NoMatch`, so an enclosing
/// choice will not try another alternative.
#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, Error>,
{
    type Output = U;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input)? {
            Outcome::Matched(value, tail) => Ok(Outcome::Matched((self.mapper)(value)?, tail)),
            Outcome::NoMatch => Ok(Outcome::NoMatch),
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, Error>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Error>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
