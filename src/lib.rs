#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: StdAllocator, UniquePtr::new and the Box conversions in no_std

//! # tola-meta
//!
//! Compile-time type traits, member detection, `pointer_traits`,
//! `allocator_traits` and `unique_ptr` for Rust.
//!
//! **Type-level introspection, standard-library style.**
//!
//! ## Architecture
//!
//! Every type that takes part in classification implements [`TypeInfo`]:
//! a table of its category, cv qualification and the types its
//! transformations produce. Predicates and transformations read that table.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Conditional, EnableIf, NumericLimits        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Type traits                                             |
//! |  - TypeInfo, is_* classifiers, Remove*/Add*/Decay, MakeSigned     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Member detection                                        |
//! |  - MemberSet, #[pointer_like] / #[allocator] / #[deleter]         |
//! |  - has_impl!, is_default_constructible!, ...                      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3-5: pointer_traits, allocator_traits, unique_ptr          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Type model
//!
//! | C++             | Rust                          |
//! |-----------------|-------------------------------|
//! | `void`          | `()`                          |
//! | `T*`            | `*mut T`                      |
//! | `const T*`      | `*const T`                    |
//! | `T&` / `T&&`    | `&T` / `&mut T`               |
//! | `const T`       | `Const<T>`                    |
//! | `T C::*`        | `MemberPointer<C, T>`         |
//! | `nullptr_t`     | `NullPtr`                     |
//!
//! ## Quick Start
//!
//! ```
//! use tola_meta::prelude::*;
//! use tola_meta::traits::{Decay, is_pointer};
//!
//! tola_meta::assert_same!(Decay<&'static [u8; 4]>, *mut u8);
//! assert!(is_pointer::<Decay<&'static [u8; 4]>>());
//!
//! let mut owner = UniquePtr::new(String::from("tola"));
//! assert_eq!(owner.as_ref().map(String::len), Some(4));
//! owner.clear();
//! assert!(owner.is_null());
//! ```

// Allow `::tola_meta` to work inside the crate itself
extern crate self as tola_meta;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the declarative probes
pub use paste;

// Re-export the proc-macro crate for generated code
pub use macros;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Type traits
// =============================================================================
pub mod traits;

// =============================================================================
// Layer 2: Member detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3-5: Pointer traits, allocator traits, ownership
// =============================================================================
pub mod allocator;
pub mod owned;
pub mod ptr;

// =============================================================================
// Iterator categories
// =============================================================================
pub mod iter;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, False, True};
pub use traits::TypeInfo;

/// Common items for the trait engine.
pub mod prelude {
    pub use crate::primitives::{Bool, Conditional, EnableIf, EnableIfT, False, NumericLimits, True};
    pub use crate::traits::{Const, MemberPointer, NullPtr, TypeInfo, Volatile};

    pub use crate::detect::MemberSet;
    pub use crate::ptr::{ConvertHandle, NullablePointer, PointerTo, PointerTraits, pointer_like};

    pub use crate::allocator::{AllocError, Allocator, AllocatorTraits, allocator};
    #[cfg(feature = "alloc")]
    pub use crate::allocator::StdAllocator;

    pub use crate::owned::{DefaultDelete, Deleter, FnDeleter, UniquePtr, deleter};
}
