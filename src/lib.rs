//! # bytecomb - Byte-Level Parser Combinators
//!
//! A parser combinator library over immutable byte slices. Small parsers are combined into
//! larger ones; every parser is a plain value that can be reused for any number of parses.
//!
//! A parse produces one of three results:
//!
//! - `Ok(Outcome::Matched(value, tail))`: the parser accepted a prefix of the input and `tail`
//!   is the rest
//! - `Ok(Outcome::NoMatch)`: the input does not fit, which alternatives and repetitions use to
//!   backtrack or stop
//! - `Err(Error)`: a hard failure, such as an allocation failure or a user-raised error, that
//!   aborts the entire parse
//!
//! Combinators only ever recover from `NoMatch`. Hard errors pass through every combinator
//! unchanged.
//!
//! ```
//! use bytecomb::{Error, Heap, MapExt, Outcome, Parser, choice, satisfy, sequence, string,
//!     zero_or_more};
//!
//! #[derive(Debug, PartialEq)]
//! enum Token<'code> {
//!     Word(Box<[u8]>),
//!     Arrow(&'code [u8]),
//! }
//!
//! let word = sequence((
//!     satisfy(|b| b.is_ascii_alphabetic()),
//!     zero_or_more(Heap, satisfy(|b| b.is_ascii_alphanumeric())),
//! ))
//! .map(|(first, rest)| {
//!     let mut word = vec![first];
//!     word.extend_from_slice(&rest);
//!     Token::Word(word.into_boxed_slice())
//! });
//! let token = choice((string("->").map(Token::Arrow), word));
//!
//! let outcome = token.parse(b"x1 -> y").unwrap();
//! assert_eq!(outcome, Outcome::Matched(Token::Word(Box::from(&b"x1"[..])), &b" -> y"[..]));
//! assert_eq!(token.parse(b"->y").unwrap().tail(), Some(&b"y"[..]));
//! assert_eq!(token.parse(b"1").unwrap(), Outcome::NoMatch);
//!
//! let strict = token.try_map(|t| match t {
//!     Token::Word(w) if &*w == b"panic" => Err(Error::custom("reserved word")),
//!     other => Ok(other),
//! });
//! assert!(strict.parse(b"panic").is_err());
//! ```

pub use bumpalo;

pub mod alloc;
pub mod between;
pub mod byte;
pub mod choice;
pub mod error;
pub mod fold;
pub mod lazy;
pub mod lookahead;
pub mod map;
pub mod optional;
pub mod parser;
pub mod repeat;
pub mod sequence;
pub mod string;

pub use alloc::{Allocator, Arena, Bounded, Growable, Heap};
pub use between::between;
pub use byte::{byte, end, is_byte, satisfy};
pub use choice::{ChoiceExt, choice};
pub use error::{AllocError, Error};
pub use fold::{fold_one_or_more, fold_zero_or_more};
pub use lazy::lazy;
pub use lookahead::{LookaheadExt, followed_by, not_followed_by};
pub use map::{MapExt, map, try_map};
pub use optional::{OptionalExt, optional};
pub use parser::{BoxedExt, BoxedParser, Input, Outcome, ParseResult, Parser};
pub use repeat::{one_or_more, zero_or_more};
pub use sequence::{SequenceExt, empty, sequence};
pub use string::string;
