//! # Iterator categories
//!
//! - `tags.rs`: `InputIteratorTag` .. `RandomAccessIteratorTag` and the
//!   `DerivedFrom` lattice.
//! - `cursor.rs`: `Cursor`, `BidirectionalCursor`, `RandomAccessCursor`;
//!   raw pointers are random-access cursors.
//! - `ops.rs`: `advance`, `distance`, `next`, `prev`.
//!
//! The algorithm is picked from the cursor's `Category` at compile time:
//! random-access cursors jump, the rest step one at a time.

pub mod cursor;
pub mod ops;
pub mod tags;

pub use cursor::{BidirectionalCursor, Cursor, IteratorCategory, IteratorValue, RandomAccessCursor};
pub use ops::{Advance, advance, distance, next, prev};
pub use tags::{
    BidirectionalIteratorTag, DerivedFrom, ForwardIteratorTag, InputIteratorTag, IteratorTag,
    OutputIteratorTag, RandomAccessIteratorTag,
};
