//! Standard library type table for `TypeInfo` generation.
//!
//! Each entry names a type, its generic parameters and its primary
//! category. The generated impls all delegate to `__plain_type_info!`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Concrete,
    Generic(&'static str),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Void,
    Signed,
    Unsigned,
    Float,
    Enum,
    Class,
}

use Category::*;
use TypeKind::*;

/// Primitive types (always available).
pub const PRIMITIVE_TYPES: &[(&str, TypeKind, Category)] = &[
    ("()", Concrete, Void),
    ("bool", Concrete, Unsigned),
    ("char", Concrete, Unsigned),

    // Unsigned integers
    ("u8", Concrete, Unsigned),
    ("u16", Concrete, Unsigned),
    ("u32", Concrete, Unsigned),
    ("u64", Concrete, Unsigned),
    ("u128", Concrete, Unsigned),
    ("usize", Concrete, Unsigned),

    // Signed integers
    ("i8", Concrete, Signed),
    ("i16", Concrete, Signed),
    ("i32", Concrete, Signed),
    ("i64", Concrete, Signed),
    ("i128", Concrete, Signed),
    ("isize", Concrete, Signed),

    // Floats
    ("f32", Concrete, Float),
    ("f64", Concrete, Float),

    // Text
    ("str", Concrete, Class),
];

pub const CORE_TYPES: &[(&str, TypeKind, Category)] = &[
    // Sum types
    ("Option<T>", Generic("T"), Enum),
    ("Result<T, E>", Generic("T, E"), Enum),
    ("core::cmp::Ordering", Concrete, Enum),
    ("core::convert::Infallible", Concrete, Enum),
    ("core::ops::Bound<T>", Generic("T"), Enum),
    ("core::task::Poll<T>", Generic("T"), Enum),
    ("core::num::FpCategory", Concrete, Enum),
    ("core::sync::atomic::Ordering", Concrete, Enum),

    // NonZero
    ("core::num::NonZeroU8", Concrete, Class),
    ("core::num::NonZeroU16", Concrete, Class),
    ("core::num::NonZeroU32", Concrete, Class),
    ("core::num::NonZeroU64", Concrete, Class),
    ("core::num::NonZeroU128", Concrete, Class),
    ("core::num::NonZeroUsize", Concrete, Class),
    ("core::num::NonZeroI8", Concrete, Class),
    ("core::num::NonZeroI16", Concrete, Class),
    ("core::num::NonZeroI32", Concrete, Class),
    ("core::num::NonZeroI64", Concrete, Class),
    ("core::num::NonZeroI128", Concrete, Class),
    ("core::num::NonZeroIsize", Concrete, Class),

    // Cell types
    ("core::cell::Cell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::RefCell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::UnsafeCell<T>", Generic("T: ?Sized"), Class),
    ("core::cell::OnceCell<T>", Generic("T"), Class),

    // Memory types
    ("core::mem::ManuallyDrop<T>", Generic("T: ?Sized"), Class),
    ("core::mem::MaybeUninit<T>", Generic("T"), Class),
    ("core::ptr::NonNull<T>", Generic("T: ?Sized"), Class),
    ("core::alloc::Layout", Concrete, Class),
    ("core::pin::Pin<T>", Generic("T"), Class),

    // Marker types
    ("core::marker::PhantomData<T>", Generic("T: ?Sized"), Class),
    ("core::marker::PhantomPinned", Concrete, Class),

    // Range types
    ("core::ops::Range<T>", Generic("T"), Class),
    ("core::ops::RangeFrom<T>", Generic("T"), Class),
    ("core::ops::RangeTo<T>", Generic("T"), Class),
    ("core::ops::RangeInclusive<T>", Generic("T"), Class),
    ("core::ops::RangeToInclusive<T>", Generic("T"), Class),
    ("core::ops::RangeFull", Concrete, Class),

    // Time
    ("core::time::Duration", Concrete, Class),

    // Numeric wrappers
    ("core::num::Wrapping<T>", Generic("T"), Class),
    ("core::num::Saturating<T>", Generic("T"), Class),

    // Atomics
    ("core::sync::atomic::AtomicBool", Concrete, Class),
    ("core::sync::atomic::AtomicI32", Concrete, Class),
    ("core::sync::atomic::AtomicI64", Concrete, Class),
    ("core::sync::atomic::AtomicIsize", Concrete, Class),
    ("core::sync::atomic::AtomicU32", Concrete, Class),
    ("core::sync::atomic::AtomicU64", Concrete, Class),
    ("core::sync::atomic::AtomicUsize", Concrete, Class),
    ("core::sync::atomic::AtomicPtr<T>", Generic("T"), Class),
];

/// Alloc library types (requires "alloc" feature).
pub const ALLOC_TYPES: &[(&str, TypeKind, Category)] = &[
    // Strings
    ("alloc::string::String", Concrete, Class),
    ("alloc::ffi::CString", Concrete, Class),

    // Smart pointers
    ("alloc::boxed::Box<T>", Generic("T: ?Sized"), Class),
    ("alloc::rc::Rc<T>", Generic("T: ?Sized"), Class),
    ("alloc::sync::Arc<T>", Generic("T: ?Sized"), Class),
    ("alloc::rc::Weak<T>", Generic("T: ?Sized"), Class),
    ("alloc::sync::Weak<T>", Generic("T: ?Sized"), Class),

    // Collections
    ("alloc::vec::Vec<T>", Generic("T"), Class),
    ("alloc::collections::VecDeque<T>", Generic("T"), Class),
    ("alloc::collections::LinkedList<T>", Generic("T"), Class),
    ("alloc::collections::BinaryHeap<T>", Generic("T"), Class),
    ("alloc::collections::BTreeMap<K, V>", Generic("K, V"), Class),
    ("alloc::collections::BTreeSet<T>", Generic("T"), Class),

    // Cow
    ("alloc::borrow::Cow<'a, B>", Generic("'a, B: ?Sized + alloc::borrow::ToOwned + 'a"), Enum),
];

/// Std library types (requires "std" feature).
pub const STD_TYPES: &[(&str, TypeKind, Category)] = &[
    ("std::collections::HashMap<K, V, S>", Generic("K, V, S"), Class),
    ("std::collections::HashSet<T, S>", Generic("T, S"), Class),
    ("std::ffi::OsString", Concrete, Class),
    ("std::path::PathBuf", Concrete, Class),
    ("std::fs::File", Concrete, Class),
    ("std::sync::Mutex<T>", Generic("T: ?Sized"), Class),
    ("std::sync::RwLock<T>", Generic("T: ?Sized"), Class),
    ("std::time::Instant", Concrete, Class),
    ("std::time::SystemTime", Concrete, Class),
    ("std::io::ErrorKind", Concrete, Enum),
];

fn category_tokens(category: Category) -> (TokenStream, bool) {
    let (kind, signed) = match category {
        Void => ("VoidKind", false),
        Signed => ("IntegralKind", true),
        Unsigned => ("IntegralKind", false),
        Float => ("FloatingPointKind", true),
        Enum => ("EnumKind", false),
        Class => ("ClassKind", false),
    };
    let kind = format_ident!("{}", kind);
    (quote! { ::tola_meta::traits::#kind }, signed)
}

fn expand_table(table: &[(&str, TypeKind, Category)]) -> TokenStream {
    let mut impls = Vec::new();

    for (path, kind, category) in table {
        let ty: TokenStream = match path.parse() {
            Ok(ty) => ty,
            Err(e) => return syn::Error::new(proc_macro2::Span::call_site(), e).to_compile_error(),
        };
        let generics: TokenStream = match kind {
            Concrete => TokenStream::new(),
            Generic(g) => match g.parse() {
                Ok(g) => g,
                Err(e) => {
                    return syn::Error::new(proc_macro2::Span::call_site(), e).to_compile_error();
                }
            },
        };
        let (category, signed) = category_tokens(*category);

        impls.push(quote! {
            impl<#generics> ::tola_meta::traits::TypeInfo for #ty {
                ::tola_meta::__plain_type_info!(#category, signed: #signed);
            }
        });
    }

    quote! { #(#impls)* }
}

/// `TypeInfo` for primitives and `core` types.
pub fn expand_core_type_info() -> TokenStream {
    let primitives = expand_table(PRIMITIVE_TYPES);
    let core = expand_table(CORE_TYPES);
    quote! {
        #primitives
        #core
    }
}

/// `TypeInfo` for `alloc` types (Vec, Box, String, etc).
pub fn expand_alloc_type_info() -> TokenStream {
    expand_table(ALLOC_TYPES)
}

/// `TypeInfo` for `std` types.
pub fn expand_std_type_info() -> TokenStream {
    expand_table(STD_TYPES)
}
