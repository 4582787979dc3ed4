use crate::alloc::{Allocator, Growable};
use crate::error::Error;
use crate::fold::{fold_one, fold_zero};
use crate::parser::{Input, Outcome, ParseResult, Parser};
use tracing::trace;

fn append<T, S>(mut seq: S, value: T) -> Result<S, Error>
where
    S: Growable<T>,
{
    seq.push(value)?;
    Ok(seq)
}

/// Parser combinator that collects zero or more matches into a sequence
///
/// A specialized fold: the seed is a fresh sequence from the allocator, each match is appended,
/// and the finished sequence is frozen into the allocator's result type (`Box<[T]>` for
/// [`Heap`](crate::Heap) and [`Bounded`](crate::Bounded), `&'bump [T]` for
/// [`Arena`](crate::Arena)). On a hard error, including an allocation failure, the partly filled
/// sequence is dropped and nothing is returned.
///
/// The repeated parser must consume input on every success, or the loop never ends.
#[derive(Debug, Clone)]
pub struct ZeroOrMore<A, P> {
    allocator: A,
    parser: P,
}

impl<A, P> ZeroOrMore<A, P> {
    pub fn new(allocator: A, parser: P) -> Self {
        ZeroOrMore { allocator, parser }
    }
}

impl<'code, A, P> Parser<'code> for ZeroOrMore<A, P>
where
    A: Allocator<P::Output>,
    P: Parser<'code>,
{
    type Output = <A::Seq as Growable<P::Output>>::Frozen;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        let seq = self.allocator.allocate()?;
        let combine = append::<P::Output, A::Seq>;
        let (seq, tail) = fold_zero(&self.parser, &combine, seq, input)?;
        trace!(items = seq.len(), "sequence finished");
        Ok(Outcome::Matched(seq.finish(), tail))
    }
}

/// Convenience function to create a ZeroOrMore parser
///
/// ```
/// use bytecomb::{Heap, Outcome, Parser, string, zero_or_more};
///
/// let parser = zero_or_more(Heap, string("ab"));
/// let (items, tail) = parser.parse(b"ababcd").unwrap().into_option().unwrap();
/// assert_eq!(&*items, [&b"ab"[..], &b"ab"[..]]);
/// assert_eq!(tail, b"cd");
/// ```
pub fn zero_or_more<'code, A, P>(allocator: A, parser: P) -> ZeroOrMore<A, P>
where
    A: Allocator<P::Output>,
    P: Parser<'code>,
{
    ZeroOrMore::new(allocator, parser)
}

/// Parser combinator that collects one or more matches into a sequence
///
/// `NoMatch` when the first application does not match.
#[derive(Debug, Clone)]
pub struct OneOrMore<A, P> {
    allocator: A,
    parser: P,
}

impl<A, P> OneOrMore<A, P> {
    pub fn new(allocator: A, parser: P) -> Self {
        OneOrMore { allocator, parser }
    }
}

impl<'code, A, P> Parser<'code> for OneOrMore<A, P>
where
    A: Allocator<P::Output>,
    P: Parser<'code>,
{
    type Output = <A::Seq as Growable<P::Output>>::Frozen;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        let seq = self.allocator.allocate()?;
        let combine = append::<P::Output, A::Seq>;
        let outcome = fold_one(&self.parser, &combine, seq, input)?;
        Ok(outcome.map(|seq| {
            trace!(items = seq.len(), "sequence finished");
            seq.finish()
        }))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, A, P>(allocator: A, parser: P) -> OneOrMore<A, P>
where
    A: Allocator<P::Output>,
    P: Parser<'code>,
{
    OneOrMore::new(allocator, parser)
}
