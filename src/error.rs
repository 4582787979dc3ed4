use std::collections::TryReserveError;
use thiserror::Error;

/// Failure to obtain storage for a growable sequence
///
/// Raised by [`Allocator`](crate::alloc::Allocator) implementations and surfaced to callers as
/// [`Error::Alloc`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The heap refused to grow the sequence
    #[error("failed to reserve sequence storage: {0}")]
    Reserve(#[from] TryReserveError),
    /// A bounded sequence already holds its configured number of elements
    #[error("sequence limit of {limit} elements exceeded")]
    LimitExceeded { limit: usize },
    /// The bump arena could not grow the sequence
    #[error("arena could not grow sequence storage")]
    Arena,
}

/// Unrecoverable parse failure
///
/// This is the hard-error channel. No combinator in this crate ever catches it: it travels
/// through `?` to the top-level caller and aborts the whole parse attempt. The expected
/// "did not match here" case is [`Outcome::NoMatch`](crate::Outcome::NoMatch), never an `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// A repetition combinator could not grow its sequence
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),
    /// Failure raised by user code: a `try_map` transform, a fold's `init` or `combine`, or a
    /// custom primitive parser
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap any error (or a plain message) as a hard error
    ///
    /// ```
    /// use bytecomb::Error;
    ///
    /// let err = Error::custom("integer literal out of range");
    /// assert_eq!(err.to_string(), "integer literal out of range");
    /// ```
    pub fn custom(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Error::Custom(error.into())
    }

    /// Returns the allocation failure, if this is one
    pub fn as_alloc(&self) -> Option<&AllocError> {
        match self {
            Error::Alloc(e) => Some(e),
            Error::Custom(_) => None,
        }
    }
}
