//! Procedural macros for tola-meta
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(TypeInfo)]` | struct/enum/union | Register a type with the trait engine |
//! | `#[pointer_like]` | `impl PointerTraits` | Fill absent pointer members |
//! | `#[allocator]` | `impl Allocator` | Fill absent allocator members |
//! | `#[deleter]` | `impl Deleter<T>` | Fill the absent handle type |
//! | `impl_*_type_info!()` | - | Built-in `TypeInfo` tables (internal) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone)]
//! struct Arena<T>(PhantomData<T>);
//!
//! #[allocator]
//! impl<T> Allocator for Arena<T> {
//!     type Value = T;
//!     fn allocate(&mut self, n: usize) -> Result<*mut T, AllocError> { .. }
//!     unsafe fn deallocate(&mut self, p: *mut T, n: usize) { .. }
//! }
//! // Pointer = *mut T, SizeType = usize, Rebind<U> = Arena<U>, ...
//! ```

use proc_macro::TokenStream;
use syn::{ItemImpl, parse_macro_input};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// `TypeInfo` for primitives and `core` types.
#[proc_macro]
pub fn impl_core_type_info(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_core_type_info().into()
}

/// `TypeInfo` for `alloc` types.
#[proc_macro]
pub fn impl_alloc_type_info(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_alloc_type_info().into()
}

/// `TypeInfo` for `std` types.
#[proc_macro]
pub fn impl_std_type_info(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_type_info().into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Register a user type with the trait engine.
///
/// Structs are classes, enums are enums and unions are unions.
///
/// ```ignore
/// #[derive(TypeInfo)]
/// enum Color { Red, Green }
///
/// assert!(is_enum::<Color>());
/// assert!(!is_unsigned::<Color>());
/// ```
#[proc_macro_derive(TypeInfo)]
pub fn derive_type_info(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_info(input).into()
}

/// Complete an `impl PointerTraits` block.
///
/// ```ignore
/// #[pointer_like]
/// impl<T, Tag> PointerTraits for Tagged<T, Tag> {}
/// // ElementType = T, DifferenceType = isize,
/// // Rebind<U> = Tagged<U, Tag>, RebindConst<U> = Tagged<Const<U>, Tag>
/// ```
#[proc_macro_attribute]
pub fn pointer_like(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_impl_attr(attr, item, user::expand_pointer_like)
}

/// Complete an `impl Allocator` block.
///
/// Absent associated types get their defaults, and a `MEMBERS`
/// descriptor records what the impl provided. An absent `rebind` is
/// default-constructed, which is an error when the impl declares
/// `IS_ALWAYS_EQUAL = false`.
#[proc_macro_attribute]
pub fn allocator(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_impl_attr(attr, item, user::expand_allocator)
}

/// Complete an `impl Deleter<T>` block with `type Pointer = *mut T`.
#[proc_macro_attribute]
pub fn deleter(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_impl_attr(attr, item, user::expand_deleter)
}

fn expand_impl_attr(
    attr: TokenStream,
    item: TokenStream,
    expand: fn(ItemImpl) -> syn::Result<proc_macro2::TokenStream>,
) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "this attribute takes no arguments")
            .to_compile_error()
            .into();
    }
    let item = parse_macro_input!(item as ItemImpl);
    expand(item).unwrap_or_else(syn::Error::into_compile_error).into()
}
