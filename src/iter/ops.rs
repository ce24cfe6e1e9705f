//! `advance`, `distance`, `next` and `prev`, dispatched on the cursor's
//! category tag.

use super::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use super::tags::{
    BidirectionalIteratorTag, DerivedFrom, ForwardIteratorTag, InputIteratorTag,
    RandomAccessIteratorTag,
};

/// The per-category algorithm, implemented on the tag types.
///
/// Output cursors have no implementation, so `advance` over one does not
/// compile.
pub trait Advance<C: Cursor> {
    fn advance(it: &mut C, n: isize);
    fn distance(first: C, last: &C) -> isize;
}

macro_rules! impl_single_pass {
    ($($Tag:ident),*) => {$(
        impl<C: Cursor> Advance<C> for $Tag {
            /// Negative offsets are ignored.
            #[inline]
            fn advance(it: &mut C, n: isize) {
                for _ in 0..n.max(0) {
                    it.increment();
                }
            }

            #[inline]
            fn distance(mut first: C, last: &C) -> isize {
                let mut n = 0;
                while first != *last {
                    first.increment();
                    n += 1;
                }
                n
            }
        }
    )*};
}

impl_single_pass!(InputIteratorTag, ForwardIteratorTag);

impl<C: BidirectionalCursor> Advance<C> for BidirectionalIteratorTag {
    fn advance(it: &mut C, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                it.increment();
            }
        } else {
            for _ in n..0 {
                it.decrement();
            }
        }
    }

    #[inline]
    fn distance(first: C, last: &C) -> isize {
        <InputIteratorTag as Advance<C>>::distance(first, last)
    }
}

impl<C: RandomAccessCursor> Advance<C> for RandomAccessIteratorTag {
    #[inline]
    fn advance(it: &mut C, n: isize) {
        it.jump(n);
    }

    #[inline]
    fn distance(first: C, last: &C) -> isize {
        first.offset_to(last)
    }
}

/// Moves `it` by `n` steps.
#[inline]
pub fn advance<C>(it: &mut C, n: isize)
where
    C: Cursor,
    C::Category: Advance<C>,
{
    <C::Category as Advance<C>>::advance(it, n)
}

/// Number of steps from `first` to `last`.
#[inline]
pub fn distance<C>(first: C, last: &C) -> isize
where
    C: Cursor,
    C::Category: Advance<C>,
{
    <C::Category as Advance<C>>::distance(first, last)
}

/// `it` moved `n` steps forward.
#[inline]
pub fn next<C>(mut it: C, n: isize) -> C
where
    C: Cursor,
    C::Category: DerivedFrom<InputIteratorTag> + Advance<C>,
{
    advance(&mut it, n);
    it
}

/// `it` moved `n` steps back.
///
/// ```compile_fail
/// use tola_meta::iter::{Cursor, ForwardIteratorTag, prev};
///
/// #[derive(Clone, PartialEq)]
/// struct Countdown(u32);
///
/// impl Cursor for Countdown {
///     type Category = ForwardIteratorTag;
///     type Value = u32;
///     fn increment(&mut self) { self.0 -= 1; }
/// }
///
/// prev(Countdown(3), 1);
/// ```
#[inline]
pub fn prev<C>(mut it: C, n: isize) -> C
where
    C: Cursor,
    C::Category: DerivedFrom<BidirectionalIteratorTag> + Advance<C>,
{
    advance(&mut it, -n);
    it
}
