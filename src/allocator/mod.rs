//! # Layer 4: Allocator traits
//!
//! - `traits.rs`: `Allocator` (what users implement) and `AllocatorTraits`
//!   (the normalized view), plus the member aliases.
//! - `std_alloc.rs`: `StdAllocator`, the global-allocator default.
//! - `error.rs`: `AllocError`.
//!
//! ```text
//!   impl Allocator for A  --#[allocator]-->  every member present
//!                                            MEMBERS = what was written
//!   AllocatorTraits<A>    --------------->   allocate / construct / ...
//! ```

pub mod error;
#[cfg(feature = "alloc")]
pub mod std_alloc;
pub mod traits;

pub use error::AllocError;
#[cfg(feature = "alloc")]
pub use std_alloc::StdAllocator;
pub use traits::{
    Allocator, AllocatorTraits, ConstPointerOf, ConstVoidPointerOf, DifferenceTypeOf, PointerOf,
    RebindAlloc, RebindTraits, SizeTypeOf, ValueOf, VoidPointerOf,
};

/// Complete an `impl Allocator` block with the member defaults.
pub use macros::allocator;
