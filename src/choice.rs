use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser combinator that tries a tuple of alternatives in order
///
/// Every alternative runs on the original input, so an alternative that fails never affects the
/// next one. The first match wins and is returned unchanged. `NoMatch` only when every
/// alternative is `NoMatch`. A hard error from any alternative aborts immediately and the
/// remaining alternatives are never tried.
///
/// All alternatives must produce the same output type; map them to a common type first.
#[derive(Debug, Clone, Copy)]
pub struct Choice<T>(T);

impl<T> Choice<T> {
    pub fn new(alternatives: T) -> Self {
        Choice(alternatives)
    }
}

macro_rules! choice_impls {
    ($($acc:ident)+; $head:ident $($tail:ident)*) => {
        choice_impls!($($acc)+;);
        choice_impls!($($acc)+ $head; $($tail)*);
    };
    ($($parser:ident)+;) => {
        #[allow(non_snake_case)]
        impl<'code, O, $($parser: Parser<'code, Output = O>),+> Parser<'code>
            for Choice<($($parser,)+)>
        {
            type Output = O;

            fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
                let Choice(($($parser,)+)) = self;
                $(
                    if let matched @ Outcome::Matched(..) = $parser.parse(input)? {
                        return Ok(matched);
                    }
                )+
                Ok(Outcome::NoMatch)
            }
        }
    };
}

choice_impls!(P1; P2 P3 P4 P5 P6 P7 P8 P9 P10 P11 P12);

/// Convenience function to create a Choice parser from a tuple of alternatives
///
/// ```
/// use bytecomb::{MapExt, Outcome, Parser, choice, string};
///
/// let boolean = choice((
///     string("true").map(|_| true),
///     string("false").map(|_| false),
/// ));
/// assert_eq!(boolean.parse(b"false;").unwrap(), Outcome::Matched(false, &b";"[..]));
/// assert_eq!(boolean.parse(b"maybe").unwrap(), Outcome::NoMatch);
/// ```
pub fn choice<T>(alternatives: T) -> Choice<T> {
    Choice::new(alternatives)
}

/// Extension trait to add .or() method support for parsers
pub trait ChoiceExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Choice<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Choice((self, other))
    }
}

/// Implement ChoiceExt for all parsers
impl<'code, P> ChoiceExt<'code> for P where P: Parser<'code> {}
