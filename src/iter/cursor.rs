//! `iterator_traits`: cursors and their categories.
//!
//! A cursor is a position, not a sequence: it is compared against an end
//! position rather than returning `None`. Distances are `isize`.

use core::mem;

use super::tags::{IteratorTag, RandomAccessIteratorTag};

/// A position that can step forward.
pub trait Cursor: Clone + PartialEq {
    /// Strongest category the cursor supports.
    type Category: IteratorTag;
    type Value;

    /// `++it`.
    fn increment(&mut self);
}

/// A cursor that can also step back.
pub trait BidirectionalCursor: Cursor {
    /// `--it`.
    fn decrement(&mut self);
}

/// A cursor that can move any distance in one step.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// `it += n`.
    fn jump(&mut self, n: isize);

    /// `other - self`.
    fn offset_to(&self, other: &Self) -> isize;
}

pub type IteratorCategory<C> = <C as Cursor>::Category;
pub type IteratorValue<C> = <C as Cursor>::Value;

// Raw pointers move with wrapping arithmetic. Only dereferencing needs the
// position to be in bounds.

macro_rules! impl_pointer_cursor {
    ($($ptr:tt),*) => {$(
        impl<T> Cursor for *$ptr T {
            type Category = RandomAccessIteratorTag;
            type Value = T;

            #[inline]
            fn increment(&mut self) {
                *self = self.wrapping_add(1);
            }
        }

        impl<T> BidirectionalCursor for *$ptr T {
            #[inline]
            fn decrement(&mut self) {
                *self = self.wrapping_sub(1);
            }
        }

        impl<T> RandomAccessCursor for *$ptr T {
            #[inline]
            fn jump(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline]
            fn offset_to(&self, other: &Self) -> isize {
                let bytes = other.addr().wrapping_sub(self.addr()) as isize;
                bytes / mem::size_of::<T>().max(1) as isize
            }
        }
    )*};
}

impl_pointer_cursor!(const, mut);
