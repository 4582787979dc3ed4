use crate::parser::{Input, ParseResult, Parser};
use tracing::trace;

/// A lazy parser that defers the construction of the actual parser until parse time
///
/// A grammar that refers to itself cannot be built eagerly: its type and its value would both
/// be infinite. `Lazy` holds a factory instead and builds the inner parser on every call. Pair it
/// with [`BoxedParser`](crate::BoxedParser) to give the recursive rule a nameable type.
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Input<'code>) -> ParseResult<'code, Self::Output> {
        trace!(remaining = input.len(), "building lazy parser");
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
