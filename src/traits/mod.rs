//! # Layer 1: Type traits
//!
//! Classifiers, properties and transformations over [`TypeInfo`] types.
//!
//! ```text
//! +------------------------------------------------------------+
//! |  category.rs    Kind markers, Category, Branch             |
//! |  info.rs        TypeInfo table, Const/Volatile/NullPtr     |
//! |  std_impls.rs   primitives, tuples, core/alloc/std types   |
//! +------------------------------------------------------------+
//!                               |
//!                               v
//! +------------------------------------------------------------+
//! |  classify.rs    is_void .. is_member_function_pointer      |
//! |                 is_arithmetic, is_scalar, is_object, ...   |
//! |  properties.rs  is_const, is_signed, rank, extent, ...     |
//! |  transform.rs   RemoveCv, AddPointer, Decay, MakeSigned    |
//! |  relations.rs   is_same, SameAs                            |
//! +------------------------------------------------------------+
//! ```
//!
//! ## Example
//!
//! ```
//! use tola_meta::traits::*;
//!
//! assert!(is_integral::<Const<u8>>());
//! assert!(is_pointer::<*const i32>());
//! assert!(!is_pointer::<&'static i32>());
//! assert_eq!(extent::<[[u8; 2]; 5]>(0), 5);
//! ```

pub mod category;
pub mod classify;
pub mod info;
pub mod properties;
pub mod relations;
mod std_impls;
pub mod transform;

pub use category::*;
pub use classify::*;
pub use info::{Const, MemberPointer, NullPtr, TypeInfo, Volatile};
pub use properties::*;
pub use relations::{SameAs, is_same};
pub use transform::*;

/// Derive `TypeInfo`: struct → class, enum → enum, union → union.
pub use macros::TypeInfo;
