//! Storage for the sequences built by [`zero_or_more`](crate::zero_or_more) and
//! [`one_or_more`](crate::one_or_more)
//!
//! An [`Allocator`] hands out empty [`Growable`] sequences. The repetition combinators push
//! matched values into one and, when the loop ends, [`finish`](Growable::finish) it into the
//! allocator's frozen form: a boxed slice for the heap allocators, a slice borrowed from the
//! arena for [`Arena`]. If the parse aborts with a hard error the sequence is dropped instead,
//! which releases everything pushed so far.

use crate::error::AllocError;
use bumpalo::Bump;
use tracing::debug;

/// A mutable, ordered sequence under construction
pub trait Growable<T> {
    /// Immutable result handed to the caller once the sequence is complete
    type Frozen;

    /// Append a value, or fail without modifying the sequence
    fn push(&mut self, value: T) -> Result<(), AllocError>;

    fn len(&self) -> usize;

    /// Freeze the sequence, transferring its contents to the caller
    fn finish(self) -> Self::Frozen;
}

/// Capability that creates fresh growable sequences of `T`
///
/// Supplied once when a repetition combinator is built and asked for a new sequence on every
/// parse. An allocator used from several threads at once must be `Sync`. [`Heap`] and
/// [`Bounded`] are; [`Arena`] is not, since a bump arena is single-threaded.
pub trait Allocator<T> {
    type Seq: Growable<T>;

    fn allocate(&self) -> Result<Self::Seq, AllocError>;
}

impl<T, A> Allocator<T> for &A
where
    A: Allocator<T> + ?Sized,
{
    type Seq = A::Seq;

    fn allocate(&self) -> Result<Self::Seq, AllocError> {
        (**self).allocate()
    }
}

impl<T> Growable<T> for Vec<T> {
    type Frozen = Box<[T]>;

    fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.try_reserve(1)?;
        Vec::push(self, value);
        Ok(())
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn finish(self) -> Box<[T]> {
        self.into_boxed_slice()
    }
}

/// Allocates from the global heap, reporting exhaustion instead of aborting
#[derive(Debug, Clone, Copy, Default)]
pub struct Heap;

impl<T> Allocator<T> for Heap {
    type Seq = Vec<T>;

    fn allocate(&self) -> Result<Self::Seq, AllocError> {
        Ok(Vec::new())
    }
}

/// Heap allocator whose sequences refuse to grow past a fixed number of elements
///
/// Useful to put a ceiling on untrusted input: the parse fails with
/// [`AllocError::LimitExceeded`] instead of growing without bound.
#[derive(Debug, Clone, Copy)]
pub struct Bounded {
    limit: usize,
}

impl Bounded {
    pub fn new(limit: usize) -> Self {
        Bounded { limit }
    }
}

impl<T> Allocator<T> for Bounded {
    type Seq = BoundedVec<T>;

    fn allocate(&self) -> Result<Self::Seq, AllocError> {
        Ok(BoundedVec {
            items: Vec::new(),
            limit: self.limit,
        })
    }
}

/// Sequence handed out by [`Bounded`]
#[derive(Debug)]
pub struct BoundedVec<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> Growable<T> for BoundedVec<T> {
    type Frozen = Box<[T]>;

    fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.items.len() >= self.limit {
            debug!(limit = self.limit, "bounded sequence is full");
            return Err(AllocError::LimitExceeded { limit: self.limit });
        }
        Growable::push(&mut self.items, value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn finish(self) -> Box<[T]> {
        self.items.into_boxed_slice()
    }
}

/// Builds sequences inside a caller-owned [`bumpalo::Bump`]
///
/// Finished sequences are `&'bump [T]` slices living in the arena, so a whole parse result can
/// be freed at once by resetting or dropping the arena. Values in a finished slice are never
/// dropped; values of a sequence abandoned by a hard error are.
///
/// ```
/// use bytecomb::bumpalo::Bump;
/// use bytecomb::{Arena, Parser, string, zero_or_more};
///
/// let bump = Bump::new();
/// let parser = zero_or_more(Arena::new(&bump), string("ab"));
/// let (items, tail) = parser.parse(b"ababx").unwrap().into_option().unwrap();
/// let items: &[&[u8]] = items;
/// assert_eq!(items, [&b"ab"[..], &b"ab"[..]]);
/// assert_eq!(tail, b"x");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Arena<'bump> {
    bump: &'bump Bump,
}

impl<'bump> Arena<'bump> {
    pub fn new(bump: &'bump Bump) -> Self {
        Arena { bump }
    }
}

impl<'bump, T: 'bump> Allocator<T> for Arena<'bump> {
    type Seq = bumpalo::collections::Vec<'bump, T>;

    fn allocate(&self) -> Result<Self::Seq, AllocError> {
        Ok(bumpalo::collections::Vec::new_in(self.bump))
    }
}

impl<'bump, T: 'bump> Growable<T> for bumpalo::collections::Vec<'bump, T> {
    type Frozen = &'bump [T];

    fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.try_reserve(1).map_err(|_| AllocError::Arena)?;
        bumpalo::collections::Vec::push(self, value);
        Ok(())
    }

    fn len(&self) -> usize {
        bumpalo::collections::Vec::len(self)
    }

    fn finish(self) -> &'bump [T] {
        self.into_bump_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_push_and_finish() {
        let mut seq = Allocator::<u8>::allocate(&Heap).unwrap();
        assert!(seq.is_empty());
        Growable::push(&mut seq, 1).unwrap();
        Growable::push(&mut seq, 2).unwrap();
        assert_eq!(Growable::len(&seq), 2);
        assert_eq!(&*seq.finish(), [1, 2]);
    }

    #[test]
    fn test_fresh_sequence_per_allocation() {
        let heap = Heap;
        let mut first = Allocator::<u8>::allocate(&heap).unwrap();
        Growable::push(&mut first, 9).unwrap();
        let second = Allocator::<u8>::allocate(&heap).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_bounded_rejects_past_limit() {
        let allocator = Bounded::new(2);
        let mut seq = Allocator::<&str>::allocate(&allocator).unwrap();
        seq.push("a").unwrap();
        seq.push("b").unwrap();
        assert_eq!(
            seq.push("c"),
            Err(AllocError::LimitExceeded { limit: 2 })
        );
        // The failed push left the sequence as it was
        assert_eq!(seq.len(), 2);
        assert_eq!(&*seq.finish(), ["a", "b"]);
    }

    #[test]
    fn test_bounded_zero_limit() {
        let mut seq = Allocator::<u8>::allocate(&Bounded::new(0)).unwrap();
        assert!(seq.push(1).is_err());
        assert!(seq.finish().is_empty());
    }

    #[test]
    fn test_arena_finish_lives_in_bump() {
        let bump = Bump::new();
        let mut seq = Allocator::<u32>::allocate(&Arena::new(&bump)).unwrap();
        Growable::push(&mut seq, 7).unwrap();
        Growable::push(&mut seq, 8).unwrap();
        assert_eq!(Growable::len(&seq), 2);

        let frozen: &[u32] = seq.finish();
        assert_eq!(frozen, [7, 8]);
        assert!(bump.allocated_bytes() > 0);
    }

    fn fill<A: Allocator<u8>>(
        allocator: A,
        values: &[u8],
    ) -> Result<<A::Seq as Growable<u8>>::Frozen, AllocError> {
        let mut seq = allocator.allocate()?;
        for &value in values {
            seq.push(value)?;
        }
        Ok(seq.finish())
    }

    #[test]
    fn test_allocator_by_reference() {
        let allocator = Bounded::new(1);
        assert_eq!(&*fill(&allocator, &[1]).unwrap(), [1]);
        assert!(fill(&allocator, &[1, 2]).is_err());
        assert_eq!(&*fill(&Heap, &[1, 2]).unwrap(), [1, 2]);

        let bump = Bump::new();
        let arena = Arena::new(&bump);
        assert_eq!(fill(&arena, &[3, 4]).unwrap(), [3, 4]);
    }
}
