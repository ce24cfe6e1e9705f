//! # Layer 3: Pointer traits
//!
//! - `traits.rs`: `PointerTraits` (element type, difference type, rebind),
//!   `PointerTo`, `addressof`.
//! - `nullable.rs`: `NullablePointer`, the handle contract owners rely on,
//!   and `ConvertHandle` for converting owners.
//!
//! ```text
//!   P<T, Rest..>  --ElementType-->     T
//!                 --DifferenceType-->  isize
//!                 --Rebind<U>-->       P<U, Rest..>
//! ```

pub mod nullable;
pub mod traits;

pub use nullable::{ConvertHandle, NullablePointer};
pub use traits::{PointerTo, PointerTraits, addressof, addressof_mut};

/// Complete an `impl PointerTraits` block with the structural defaults.
pub use macros::pointer_like;

/// `pointer_traits<P>::rebind<U>`.
pub type Rebind<P, U> = <P as PointerTraits>::Rebind<U>;

/// `pointer_traits<P>::element_type`.
pub type ElementType<P> = <P as PointerTraits>::ElementType;

/// `pointer_traits<P>::difference_type`.
pub type DifferenceType<P> = <P as PointerTraits>::DifferenceType;
