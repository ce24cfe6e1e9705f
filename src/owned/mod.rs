//! # Layer 5: Single ownership
//!
//! - `deleter.rs`: `Deleter` (handle type plus release), `DefaultDelete`,
//!   `FnDeleter`, and borrowed deleters.
//! - `unique.rs`: `UniquePtr`, the empty/owning state machine.
//!
//! The handle type comes from the deleter: `D::Pointer` if the deleter
//! names one, `*mut T` otherwise (filled in by `#[deleter]`).

pub mod deleter;
pub mod unique;

pub use deleter::{DefaultDelete, Deleter, FnDeleter, deleter};
pub use unique::UniquePtr;
