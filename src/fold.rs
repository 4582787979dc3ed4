//! Accumulating repetition
//!
//! Both folds apply their parser until it reports `NoMatch`, threading an accumulator through
//! `combine`. `NoMatch` is the only way out of the loop. A parser that can match without
//! consuming input therefore never terminates: every parser handed to a fold must consume at
//! least one byte on each success.
//!
//! On a hard error from `init`, the parser, or `combine`, the fold returns the error and the
//! partial accumulator is dropped on the way out. Accumulators that own resources release them
//! through `Drop`.

use crate::error::Error;
use crate::parser::{Input, Outcome, ParseResult, Parser};
use tracing::trace;

/// Run `parser` until it stops matching, folding each value into `acc`
pub(crate) fn fold_zero<'code, P, C, A>(
    parser: &P,
    combine: &C,
    mut acc: A,
    mut input: Input<'code>,
) -> Result<(A, Input<'code>), Error>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
{
    let mut iterations = 0usize;
    while let Outcome::Matched(value, tail) = parser.parse(input)? {
        debug_assert!(tail.len() <= input.len(), "tail must be a suffix of the input");
        acc = combine(acc, value)?;
        input = tail;
        iterations += 1;
    }
    trace!(iterations, remaining = input.len(), "fold stopped");
    Ok((acc, input))
}

/// Like [`fold_zero`] but the first application must match
pub(crate) fn fold_one<'code, P, C, A>(
    parser: &P,
    combine: &C,
    acc: A,
    input: Input<'code>,
) -> ParseResult<'code, A>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
{
    let Outcome::Matched(first, tail) = parser.parse(input)? else {
        trace!(remaining = input.len(), "fold rejected, first attempt did not match");
        return Ok(Outcome::NoMatch);
    };
    let acc = combine(acc, first)?;
    let (acc, tail) = fold_zero(parser, combine, acc, tail)?;
    Ok(Outcome::Matched(acc, tail))
}

/// Parser combinator that folds zero or more matches into an accumulator
#[derive(Clone)]
pub struct FoldZeroOrMore<P, C, I> {
    parser: P,
    combine: C,
    init: I,
}

impl<P, C, I> FoldZeroOrMore<P, C, I> {
    pub fn new(parser: P, combine: C, init: I) -> Self {
        FoldZeroOrMore {
            parser,
            combine,
            init,
        }
    }
}

impl<'code, P, C, I, A> Parser<'code> for FoldZeroOrMore<P, C, I>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
    I: Fn() -> Result<A, Error>,
{
    type Output = A;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        let seed = (self.init)()?;
        let (acc, tail) = fold_zero(&self.parser, &self.combine, seed, input)?;
        Ok(Outcome::Matched(acc, tail))
    }
}

/// Convenience function to create a FoldZeroOrMore parser
///
/// `init` builds a fresh accumulator once per parse, so accumulators never leak state between
/// unrelated parses.
///
/// ```
/// use bytecomb::{Outcome, Parser, fold_zero_or_more, satisfy};
///
/// let number = fold_zero_or_more(
///     satisfy(|b| b.is_ascii_digit()),
///     |acc: u32, digit| Ok(acc * 10 + u32::from(digit - b'0')),
///     || Ok(0),
/// );
/// assert_eq!(number.parse(b"1234x").unwrap(), Outcome::Matched(1234, &b"x"[..]));
/// assert_eq!(number.parse(b"x").unwrap(), Outcome::Matched(0, &b"x"[..]));
/// ```
pub fn fold_zero_or_more<'code, P, C, I, A>(
    parser: P,
    combine: C,
    init: I,
) -> FoldZeroOrMore<P, C, I>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
    I: Fn() -> Result<A, Error>,
{
    FoldZeroOrMore::new(parser, combine, init)
}

/// Parser combinator that folds one or more matches into an accumulator
///
/// `NoMatch` when the very first application does not match; it never falls back to the seed.
#[derive(Clone)]
pub struct FoldOneOrMore<P, C, I> {
    parser: P,
    combine: C,
    init: I,
}

impl<P, C, I> FoldOneOrMore<P, C, I> {
    pub fn new(parser: P, combine: C, init: I) -> Self {
        FoldOneOrMore {
            parser,
            combine,
            init,
        }
    }
}

impl<'code, P, C, I, A> Parser<'code> for FoldOneOrMore<P, C, I>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
    I: Fn() -> Result<A, Error>,
{
    type Output = A;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        let seed = (self.init)()?;
        fold_one(&self.parser, &self.combine, seed, input)
    }
}

/// Convenience function to create a FoldOneOrMore parser
pub fn fold_one_or_more<'code, P, C, I, A>(
    parser: P,
    combine: C,
    init: I,
) -> FoldOneOrMore<P, C, I>
where
    P: Parser<'code>,
    C: Fn(A, P::Output) -> Result<A, Error>,
    I: Fn() -> Result<A, Error>,
{
    FoldOneOrMore::new(parser, combine, init)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{is_byte, satisfy};
    use crate::choice::ChoiceExt;
    use crate::map::MapExt;
    use crate::string::string;
    use ntest::timeout;
    use std::cell::Cell;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    fn count(acc: usize, _: Input<'_>) -> Result<usize, Error> {
        Ok(acc + 1)
    }

    fn zero() -> Result<usize, Error> {
        Ok(0)
    }

    #[test]
    #[timeout(1000)]
    fn test_zero_iterations_returns_seed() {
        init_tracing();
        let parser = fold_zero_or_more(string("ab"), count, zero);
        assert_eq!(parser.parse(b"cd").unwrap(), Outcome::Matched(0, &b"cd"[..]));
        assert_eq!(parser.parse(b"").unwrap(), Outcome::Matched(0, &b""[..]));
    }

    #[test]
    #[timeout(1000)]
    fn test_counts_maximal_run() {
        init_tracing();
        let parser = fold_zero_or_more(string("ab"), count, zero);
        assert_eq!(
            parser.parse(b"abababx").unwrap(),
            Outcome::Matched(3, &b"x"[..])
        );
        // A trailing partial match is not consumed
        assert_eq!(parser.parse(b"ababa").unwrap(), Outcome::Matched(2, &b"a"[..]));
    }

    #[test]
    #[timeout(1000)]
    fn test_one_or_more_requires_first_match() {
        init_tracing();
        let parser = fold_one_or_more(string("ab"), count, zero);
        assert_eq!(parser.parse(b"cd").unwrap(), Outcome::NoMatch);
        assert_eq!(parser.parse(b"").unwrap(), Outcome::NoMatch);
        assert_eq!(parser.parse(b"abcd").unwrap(), Outcome::Matched(1, &b"cd"[..]));
        assert_eq!(parser.parse(b"ababab").unwrap(), Outcome::Matched(3, &b""[..]));
    }

    #[test]
    #[timeout(1000)]
    fn test_init_called_once_per_parse() {
        let inits = Cell::new(0);
        let parser = fold_zero_or_more(
            is_byte(b'a'),
            |mut acc: Vec<u8>, b| {
                acc.push(b);
                Ok(acc)
            },
            || {
                inits.set(inits.get() + 1);
                Ok(Vec::new())
            },
        );

        let (first, _) = parser.parse(b"aab").unwrap().into_option().unwrap();
        let (second, _) = parser.parse(b"ab").unwrap().into_option().unwrap();
        assert_eq!(first, vec![b'a', b'a']);
        // A fresh accumulator per parse: nothing left over from the first run
        assert_eq!(second, vec![b'a']);
        assert_eq!(inits.get(), 2);
    }

    #[test]
    #[timeout(1000)]
    fn test_left_fold_order() {
        let parser = fold_one_or_more(
            satisfy(|b| b.is_ascii_lowercase()),
            |mut acc: String, b| {
                acc.push(char::from(b));
                Ok(acc)
            },
            || Ok(String::from(">")),
        );
        let (text, tail) = parser.parse(b"abc1").unwrap().into_option().unwrap();
        assert_eq!(text, ">abc");
        assert_eq!(tail, b"1");
    }

    #[test]
    #[timeout(1000)]
    fn test_init_error_aborts() {
        let parser = fold_zero_or_more(string("a"), count, || Err(Error::custom("no seed")));
        assert_eq!(parser.parse(b"aaa").unwrap_err().to_string(), "no seed");
    }

    #[test]
    #[timeout(1000)]
    fn test_combine_error_aborts() {
        let applied = Cell::new(0);
        let parser = fold_zero_or_more(
            is_byte(b'a'),
            |acc: usize, _| {
                applied.set(applied.get() + 1);
                if acc == 2 {
                    Err(Error::custom("too many"))
                } else {
                    Ok(acc + 1)
                }
            },
            zero,
        );

        assert_eq!(parser.parse(b"aa").unwrap(), Outcome::Matched(2, &b""[..]));
        applied.set(0);
        assert!(parser.parse(b"aaaaaa").is_err());
        // The loop stops at the failing combine; later matches are never folded
        assert_eq!(applied.get(), 3);
    }

    #[test]
    #[timeout(1000)]
    fn test_parser_error_aborts_one_or_more() {
        let parser = fold_one_or_more(
            string("a").try_map(|_| Err::<(), _>(Error::custom("bad element"))),
            |acc: usize, ()| Ok(acc + 1),
            zero,
        );
        assert!(matches!(parser.parse(b"a"), Err(Error::Custom(_))));
        // NoMatch on the first attempt is still NoMatch
        assert_eq!(parser.parse(b"b").unwrap(), Outcome::NoMatch);
    }

    #[test]
    #[timeout(1000)]
    fn test_partial_accumulator_is_dropped_on_error() {
        struct Tracked<'c>(&'c Cell<usize>);

        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let dropped = Cell::new(0);
        let parser = fold_zero_or_more(
            is_byte(b'a').or(is_byte(b'!')),
            |mut acc: Vec<_>, b| {
                if b == b'!' {
                    return Err(Error::custom("bang"));
                }
                acc.push(Tracked(&dropped));
                Ok(acc)
            },
            || Ok(Vec::new()),
        );

        assert!(parser.parse(b"aaa!").is_err());
        assert_eq!(dropped.get(), 3);
    }
}
