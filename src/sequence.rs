use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser combinator that runs a tuple of parsers one after another
///
/// Each parser starts where the previous one stopped. The output is the flat tuple of every
/// sub-result, in order. The first `NoMatch` short-circuits the rest and makes the whole
/// sequence `NoMatch`; since the input is an immutable view, nothing partial is observable.
///
/// Implemented for tuples of up to twelve parsers, and for the empty tuple, which is
/// [`empty`].
///
/// ```
/// use bytecomb::{Outcome, Parser, sequence, string};
///
/// let parser = sequence((string("ab"), string("c")));
/// let outcome = parser.parse(b"abcd").unwrap();
/// assert_eq!(outcome, Outcome::Matched((&b"ab"[..], &b"c"[..]), &b"d"[..]));
/// assert_eq!(parser.parse(b"ab").unwrap(), Outcome::NoMatch);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sequence<T>(T);

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Sequence(parsers)
    }
}

/// Zero-width parser that always matches with `()` and consumes nothing
pub type Empty = Sequence<()>;

impl<'code> Parser<'code> for Sequence<()> {
    type Output = ();

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        Ok(Outcome::Matched((), input))
    }
}

macro_rules! sequence_impls {
    ($($acc:ident)+; $head:ident $($tail:ident)*) => {
        sequence_impls!($($acc)+;);
        sequence_impls!($($acc)+ $head; $($tail)*);
    };
    ($($parser:ident)+;) => {
        #[allow(non_snake_case)]
        impl<'code, $($parser: Parser<'code>),+> Parser<'code> for Sequence<($($parser,)+)> {
            type Output = ($($parser::Output,)+);

            fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
                let Sequence(($($parser,)+)) = self;
                $(
                    let Outcome::Matched($parser, input) = $parser.parse(input)? else {
                        return Ok(Outcome::NoMatch);
                    };
                )+
                Ok(Outcome::Matched(($($parser,)+), input))
            }
        }
    };
}

sequence_impls!(P1; P2 P3 P4 P5 P6 P7 P8 P9 P10 P11 P12);

/// Convenience function to create a Sequence parser from a tuple of parsers
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence::new(parsers)
}

/// The identity parser: `Matched((), input)` for every input
pub fn empty() -> Empty {
    Sequence(())
}

/// Extension trait to add .and() method support for parsers
///
/// Chaining `.and()` nests pairs, `((a, b), c)`; use [`sequence`] for a flat tuple.
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> Sequence<(Self, P)>
    where
        P: Parser<'code>,
    {
        Sequence((self, other))
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
