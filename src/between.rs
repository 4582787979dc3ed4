use crate::parser::{Input, ParseResult, Parser};
use crate::sequence::Sequence;

/// Parser combinator that parses content between an opening and a closing delimiter
///
/// Runs `open`, `parser` and `close` in sequence and keeps only the middle value. `NoMatch` when
/// any of the three does not match.
#[derive(Debug, Clone, Copy)]
pub struct Between<O, P, C> {
    inner: Sequence<(O, P, C)>,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, parser: P, close: C) -> Self {
        Between {
            inner: Sequence::new((open, parser, close)),
        }
    }
}

impl<'code, O, P, C> Parser<'code> for Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.inner.parse(input)?.map(|(_, value, _)| value))
    }
}

/// Convenience function to create a Between parser
///
/// ```
/// use bytecomb::{Heap, Outcome, Parser, between, one_or_more, satisfy, string};
///
/// let quoted = between(string("\""), one_or_more(Heap, satisfy(|b| b != b'"')), string("\""));
/// let (text, tail) = quoted.parse(b"\"hi\" rest").unwrap().into_option().unwrap();
/// assert_eq!(&*text, b"hi");
/// assert_eq!(tail, b" rest");
/// ```
pub fn between<'code, O, P, C>(open: O, parser: P, close: C) -> Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    Between::new(open, parser, close)
}
