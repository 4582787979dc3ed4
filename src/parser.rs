use crate::error::Error;
use std::rc::Rc;
use std::sync::Arc;

/// Immutable view of the bytes still to be parsed
///
/// Every tail handed out by a parser is a sub-slice of the input it was given. Nothing is ever
/// copied, so many views may alias the same buffer.
pub type Input<'code> = &'code [u8];

/// Result of a parse attempt that did not hit a hard error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'code, T> {
    /// The parser matched, producing a value and the unconsumed suffix of its input
    Matched(T, Input<'code>),
    /// The parser does not apply at this position
    NoMatch,
}

impl<'code, T> Outcome<'code, T> {
    /// Transform the matched value, leaving the tail untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'code, U> {
        match self {
            Outcome::Matched(value, tail) => Outcome::Matched(f(value), tail),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(..))
    }

    /// The remaining input after a match
    pub fn tail(&self) -> Option<Input<'code>> {
        match self {
            Outcome::Matched(_, tail) => Some(*tail),
            Outcome::NoMatch => None,
        }
    }

    pub fn into_option(self) -> Option<(T, Input<'code>)> {
        match self {
            Outcome::Matched(value, tail) => Some((value, tail)),
            Outcome::NoMatch => None,
        }
    }
}

impl<'code, T> From<Outcome<'code, T>> for Option<(T, Input<'code>)> {
    fn from(outcome: Outcome<'code, T>) -> Self {
        outcome.into_option()
    }
}

/// What every parser returns: a match outcome, or a hard error in the `Err` arm
pub type ParseResult<'code, T> = Result<Outcome<'code, T>, Error>;

/// Core parser trait for parser combinators
///
/// Implementations must be pure: parsing the same input twice yields the same result, and a
/// failed attempt leaves nothing behind. Choice relies on this to retry alternatives on the
/// original input.
///
/// Custom primitives report "does not apply here" as `Ok(Outcome::NoMatch)`. `Err` is reserved
/// for conditions that must abort the whole parse.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Type-erased parser, needed for recursive grammars whose types would otherwise be infinite
pub type BoxedParser<'a, 'code, T> = Box<dyn Parser<'code, Output = T> + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
