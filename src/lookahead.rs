use crate::parser::{Input, Outcome, ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with `()` if the given parser does not match at the current position, and is
/// `NoMatch` if it does. Never consumes input, whatever the inner parser would have consumed.
/// Hard errors from the inner parser propagate unchanged.
#[derive(Debug, Clone, Copy)]
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<'code, P> Parser<'code> for NotFollowedBy<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input)? {
            Outcome::Matched(..) => Ok(Outcome::NoMatch),
            Outcome::NoMatch => Ok(Outcome::Matched((), input)),
        }
    }
}

/// Positive lookahead, built as the negation of a negation
pub type FollowedBy<P> = NotFollowedBy<NotFollowedBy<P>>;

/// Convenience function to create a NotFollowedBy parser for negative lookahead
pub fn not_followed_by<'code, P>(parser: P) -> NotFollowedBy<P>
where
    P: Parser<'code>,
{
    NotFollowedBy::new(parser)
}

/// Succeeds with `()` iff `parser` matches here, without advancing
pub fn followed_by<'code, P>(parser: P) -> FollowedBy<P>
where
    P: Parser<'code>,
{
    not_followed_by(not_followed_by(parser))
}

/// Extension trait to add .not() and .peek() method support for parsers
pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn not(self) -> NotFollowedBy<Self> {
        not_followed_by(self)
    }

    fn peek(self) -> FollowedBy<Self> {
        followed_by(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}
