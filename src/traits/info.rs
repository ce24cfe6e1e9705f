//! # The `TypeInfo` table
//!
//! One trait carries every per-type fact the classifiers and
//! transformations need. Each type answers once, in its own impl, and
//! the public predicates and aliases are thin projections over it.
//!
//! ```text
//! +------------------+---------------------------------------------+
//! | Item             | Meaning                                     |
//! +------------------+---------------------------------------------+
//! | Category         | primary category marker (looks through cv)  |
//! | IsConst/Volatile | top-level cv qualification                  |
//! | Remove*/Add*     | transformation results                      |
//! | Decay            | by-value passing type                       |
//! | RANK / EXTENT    | array dimensions                            |
//! +------------------+---------------------------------------------+
//! ```
//!
//! cv-qualification is modelled with the phantom markers [`Const`] and
//! [`Volatile`]. The canonical form of `const volatile T` is
//! `Const<Volatile<T>>`; the `Add*`/`Remove*` projections preserve it.

use core::marker::PhantomData;

use crate::primitives::{False, True};
use crate::traits::category::{
    ArrayKind, Branch, Category, FunctionKind, LvalueReferenceKind, MemberFunctionPointerKind,
    MemberObjectPointerKind, NullPointerKind, PointerKind, RvalueReferenceKind,
};

/// Per-type facts for the trait engine.
///
/// Implemented for primitives, raw pointers, references, arrays, slices,
/// function pointers, tuples and library types. User types opt in with
/// `#[derive(TypeInfo)]`.
pub trait TypeInfo {
    type Category: Category;

    type IsConst: Branch;
    type IsVolatile: Branch;

    type RemoveConst: ?Sized + TypeInfo;
    type RemoveVolatile: ?Sized + TypeInfo;
    type AddConst: ?Sized + TypeInfo;
    type AddVolatile: ?Sized + TypeInfo;

    type RemoveReference: ?Sized + TypeInfo;
    /// `T&` with reference collapsing.
    type AddLvalueReference<'__ref>: ?Sized + TypeInfo
    where
        Self: '__ref;
    /// `T&&` with reference collapsing.
    type AddRvalueReference<'__ref>: ?Sized + TypeInfo
    where
        Self: '__ref;

    type RemovePointer: ?Sized + TypeInfo;
    type AddPointer: TypeInfo;

    type RemoveExtent: ?Sized + TypeInfo;
    type RemoveAllExtents: ?Sized + TypeInfo;

    type Decay: ?Sized + TypeInfo;

    /// Number of array dimensions.
    const RANK: usize;
    /// Extent of the outermost dimension; 0 for non-arrays and slices.
    const EXTENT: usize;
    /// Arithmetic and `T(-1) < T(0)`.
    const IS_SIGNED: bool;
}

// =============================================================================
// Qualifier and marker types
// =============================================================================

/// `const T`.
pub struct Const<T: ?Sized>(PhantomData<*const T>);

/// `volatile T`.
pub struct Volatile<T: ?Sized>(PhantomData<*const T>);

/// `std::nullptr_t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullPtr;

/// `M C::*`: a pointer to a member of `C` of type `M`.
///
/// When `M` is a function type this is a member function pointer.
pub struct MemberPointer<C: ?Sized, M: ?Sized>(PhantomData<*const C>, PhantomData<*const M>);

// =============================================================================
// Item generators
// =============================================================================

/// Items of an unqualified, non-reference, non-array type.
#[macro_export]
#[doc(hidden)]
macro_rules! __type_info_items {
    (
        category: $category:ty,
        signed: $signed:expr,
        remove_pointer: $remove_pointer:ty,
        add_pointer: $add_pointer:ty,
        decay: $decay:ty $(,)?
    ) => {
        type Category = $category;
        type IsConst = $crate::primitives::False;
        type IsVolatile = $crate::primitives::False;
        type RemoveConst = Self;
        type RemoveVolatile = Self;
        type AddConst = $crate::traits::Const<Self>;
        type AddVolatile = $crate::traits::Volatile<Self>;
        type RemoveReference = Self;
        type AddLvalueReference<'__ref> = &'__ref Self where Self: '__ref;
        type AddRvalueReference<'__ref> = &'__ref mut Self where Self: '__ref;
        type RemovePointer = $remove_pointer;
        type AddPointer = $add_pointer;
        type RemoveExtent = Self;
        type RemoveAllExtents = Self;
        type Decay = $decay;
        const RANK: usize = 0;
        const EXTENT: usize = 0;
        const IS_SIGNED: bool = $signed;
    };
}

/// Items of a plain object type of the given category.
#[macro_export]
#[doc(hidden)]
macro_rules! __plain_type_info {
    ($category:ty) => {
        $crate::__plain_type_info!($category, signed: false);
    };
    ($category:ty, signed: $signed:expr) => {
        $crate::__type_info_items! {
            category: $category,
            signed: $signed,
            remove_pointer: Self,
            add_pointer: *mut Self,
            decay: Self,
        }
    };
}

// =============================================================================
// Compound types
// =============================================================================

impl TypeInfo for NullPtr {
    crate::__plain_type_info!(NullPointerKind);
}

impl<T: ?Sized + TypeInfo> TypeInfo for *mut T {
    crate::__type_info_items! {
        category: PointerKind,
        signed: false,
        remove_pointer: T,
        add_pointer: *mut Self,
        decay: Self,
    }
}

impl<T: ?Sized + TypeInfo> TypeInfo for *const T {
    crate::__type_info_items! {
        category: PointerKind,
        signed: false,
        remove_pointer: Const<T>,
        add_pointer: *mut Self,
        decay: Self,
    }
}

impl<C: ?Sized, M: ?Sized + TypeInfo> TypeInfo for MemberPointer<C, M> {
    crate::__plain_type_info!(
        <crate::traits::IsFunction<M> as Branch>::IfCategory<
            MemberFunctionPointerKind,
            MemberObjectPointerKind,
        >
    );
}

macro_rules! impl_reference {
    ($ref_ty:ty, $category:ty) => {
        impl<'b, T: ?Sized + TypeInfo> TypeInfo for $ref_ty {
            type Category = $category;
            type IsConst = False;
            type IsVolatile = False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            // cv applied to a reference is ignored
            type AddConst = Self;
            type AddVolatile = Self;
            type RemoveReference = T;
            type AddLvalueReference<'__ref> = &'b T where Self: '__ref;
            type AddRvalueReference<'__ref> = Self where Self: '__ref;
            type RemovePointer = Self;
            type AddPointer = T::AddPointer;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            type Decay = T::Decay;
            const RANK: usize = 0;
            const EXTENT: usize = 0;
            const IS_SIGNED: bool = false;
        }
    };
}

impl_reference!(&'b T, LvalueReferenceKind);
impl_reference!(&'b mut T, RvalueReferenceKind);

macro_rules! impl_array {
    ([$($generics:tt)*] $array_ty:ty, $extent:expr) => {
        impl<$($generics)*> TypeInfo for $array_ty {
            type Category = ArrayKind;
            type IsConst = False;
            type IsVolatile = False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type AddConst = Const<Self>;
            type AddVolatile = Volatile<Self>;
            type RemoveReference = Self;
            type AddLvalueReference<'__ref> = &'__ref Self where Self: '__ref;
            type AddRvalueReference<'__ref> = &'__ref mut Self where Self: '__ref;
            type RemovePointer = Self;
            type AddPointer = *mut Self;
            type RemoveExtent = T;
            type RemoveAllExtents = T::RemoveAllExtents;
            type Decay = T::AddPointer;
            const RANK: usize = 1 + T::RANK;
            const EXTENT: usize = $extent;
            const IS_SIGNED: bool = false;
        }
    };
}

impl_array!([T: TypeInfo, const N: usize] [T; N], N);
impl_array!([T: TypeInfo] [T], 0);

// =============================================================================
// cv-qualified types
// =============================================================================

type IsArrayOf<T> = <<T as TypeInfo>::Category as Category>::Array;
type IsPointerOf<T> = <<T as TypeInfo>::Category as Category>::Pointer;

impl<T: ?Sized + TypeInfo> TypeInfo for Const<T> {
    type Category = T::Category;
    type IsConst = True;
    type IsVolatile = T::IsVolatile;
    type RemoveConst = T;
    type RemoveVolatile = Const<T::RemoveVolatile>;
    type AddConst = Self;
    type AddVolatile = Const<T::AddVolatile>;
    type RemoveReference = Self;
    type AddLvalueReference<'__ref> = &'__ref Self where Self: '__ref;
    type AddRvalueReference<'__ref> = &'__ref mut Self where Self: '__ref;
    // `T* const` still points at `T`
    type RemovePointer = <IsPointerOf<T> as Branch>::IfInfo<T::RemovePointer, Self>;
    type AddPointer = *const T;
    // `const T[N]` is an array of `const T`
    type RemoveExtent =
        <IsArrayOf<T> as Branch>::IfInfo<<T::RemoveExtent as TypeInfo>::AddConst, Self>;
    type RemoveAllExtents =
        <IsArrayOf<T> as Branch>::IfInfo<<T::RemoveAllExtents as TypeInfo>::AddConst, Self>;
    type Decay = <IsArrayOf<T> as Branch>::IfInfo<
        <<T::RemoveExtent as TypeInfo>::AddConst as TypeInfo>::AddPointer,
        T::Decay,
    >;
    const RANK: usize = T::RANK;
    const EXTENT: usize = T::EXTENT;
    const IS_SIGNED: bool = T::IS_SIGNED;
}

impl<T: ?Sized + TypeInfo> TypeInfo for Volatile<T> {
    type Category = T::Category;
    type IsConst = False;
    type IsVolatile = True;
    type RemoveConst = Self;
    type RemoveVolatile = T;
    type AddConst = Const<Self>;
    type AddVolatile = Self;
    type RemoveReference = Self;
    type AddLvalueReference<'__ref> = &'__ref Self where Self: '__ref;
    type AddRvalueReference<'__ref> = &'__ref mut Self where Self: '__ref;
    type RemovePointer = <IsPointerOf<T> as Branch>::IfInfo<T::RemovePointer, Self>;
    type AddPointer = *mut Self;
    type RemoveExtent =
        <IsArrayOf<T> as Branch>::IfInfo<<T::RemoveExtent as TypeInfo>::AddVolatile, Self>;
    type RemoveAllExtents =
        <IsArrayOf<T> as Branch>::IfInfo<<T::RemoveAllExtents as TypeInfo>::AddVolatile, Self>;
    type Decay = <IsArrayOf<T> as Branch>::IfInfo<
        <<T::RemoveExtent as TypeInfo>::AddVolatile as TypeInfo>::AddPointer,
        T::Decay,
    >;
    const RANK: usize = T::RANK;
    const EXTENT: usize = T::EXTENT;
    const IS_SIGNED: bool = T::IS_SIGNED;
}

// =============================================================================
// Function types
// =============================================================================

// A function type decays to, and adds a pointer as, itself.
macro_rules! impl_fn {
    (@each $args:tt $($fn_ty:ty),*) => {
        $( impl_fn!(@one $args $fn_ty); )*
    };
    (@one [$($arg:ident),*] $fn_ty:ty) => {
        impl<R $(, $arg)*> TypeInfo for $fn_ty {
            crate::__type_info_items! {
                category: FunctionKind,
                signed: false,
                remove_pointer: Self,
                add_pointer: Self,
                decay: Self,
            }
        }
    };
    ($($arg:ident),*) => {
        impl_fn!(@each [$($arg),*]
            fn($($arg),*) -> R,
            unsafe fn($($arg),*) -> R,
            extern "C" fn($($arg),*) -> R,
            unsafe extern "C" fn($($arg),*) -> R
        );
    };
}

macro_rules! impl_variadic_fn {
    ($($arg:ident),+) => {
        impl_fn!(@each [$($arg),+] unsafe extern "C" fn($($arg),+, ...) -> R);
    };
}

impl_fn!();
impl_fn!(A0);
impl_fn!(A0, A1);
impl_fn!(A0, A1, A2);
impl_fn!(A0, A1, A2, A3);
impl_fn!(A0, A1, A2, A3, A4);
impl_fn!(A0, A1, A2, A3, A4, A5);
impl_fn!(A0, A1, A2, A3, A4, A5, A6);
impl_fn!(A0, A1, A2, A3, A4, A5, A6, A7);

impl_variadic_fn!(A0);
impl_variadic_fn!(A0, A1);
impl_variadic_fn!(A0, A1, A2);
impl_variadic_fn!(A0, A1, A2, A3);
