//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeInfo)]` | on struct/enum/union | Register with the trait engine |
//! | `#[pointer_like]` | on `impl PointerTraits` | Pointer member defaults |
//! | `#[allocator]` | on `impl Allocator` | Allocator member defaults |
//! | `#[deleter]` | on `impl Deleter<T>` | Handle type default |

mod allocator;
mod deleter;
mod pointer_like;
mod type_info;

pub use allocator::expand_allocator;
pub use deleter::expand_deleter;
pub use pointer_like::expand_pointer_like;
pub use type_info::expand_derive_type_info;
