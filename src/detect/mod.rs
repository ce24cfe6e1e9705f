//! # Layer 2: Member detection
//!
//! "Use the member if the type has it, otherwise a default." Rust has no
//! substitution failure, so the protocol is split across three tools:
//!
//! ```text
//! +--------------------+-----------------------------------------------+
//! | Tool               | Answers                                       |
//! +--------------------+-----------------------------------------------+
//! | #[pointer_like]    | probes an impl block member by member, fills  |
//! | #[allocator]       | absent associated types with their defaults,  |
//! | #[deleter]         | records what was present in `MEMBERS`         |
//! +--------------------+-----------------------------------------------+
//! | MemberSet          | the recorded descriptor, queryable in const   |
//! +--------------------+-----------------------------------------------+
//! | has_impl!          | does a concrete type implement a trait        |
//! | is_*! probes       | supported operations (default, copy, ...)     |
//! +--------------------+-----------------------------------------------+
//! ```
//!
//! Each member is probed independently; there is no bulk query. A member
//! the impl does not mention is never an error.
//!
//! ```
//! use tola_meta::prelude::*;
//!
//! use core::marker::PhantomData;
//!
//! struct Pool<T>(PhantomData<T>);
//!
//! impl<T> Clone for Pool<T> {
//!     fn clone(&self) -> Self { Pool(PhantomData) }
//! }
//!
//! impl<T> Default for Pool<T> {
//!     fn default() -> Self { Pool(PhantomData) }
//! }
//!
//! #[allocator]
//! impl<T> Allocator for Pool<T> {
//!     type Value = T;
//!     fn allocate(&mut self, _n: usize) -> Result<*mut T, AllocError> {
//!         Err(AllocError::CapacityOverflow)
//!     }
//!     unsafe fn deallocate(&mut self, _p: *mut T, _n: usize) {}
//!     fn max_size(&self) -> usize { 16 }
//! }
//!
//! assert!(<Pool<u8> as Allocator>::MEMBERS.contains(MemberSet::MAX_SIZE));
//! assert!(!<Pool<u8> as Allocator>::MEMBERS.contains(MemberSet::CONSTRUCT));
//! ```

pub mod members;
pub mod operations;
pub mod probe;

pub use members::MemberSet;
pub use operations::Detect;
