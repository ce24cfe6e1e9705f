//! Supported-operation probes.
//!
//! Implements the "Inherent Const Fallback" pattern for the operations a
//! type supports:
//! 1. A fallback trait carries `const IS_X: bool = false`
//! 2. It is implemented for `Detect<T>` for all `T`
//! 3. An inherent `IS_X = true` exists for `Detect<T>` where `T` supports X
//!
//! Resolving `Detect::<Concrete>::IS_X` finds the inherent const when the
//! bound holds and the trait const otherwise. Like [`has_impl!`] this only
//! answers for concrete types named at the call site.

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

macro_rules! impl_detect {
    ($($(#[$meta:meta])* $name:ident => $Trait:path;)*) => {
        ::paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$name:camel Fallback>] {
                    const $name: bool = false;
                }

                impl<T: ?Sized> [<$name:camel Fallback>] for Detect<T> {}

                impl<T: $Trait> Detect<T> {
                    $(#[$meta])*
                    pub const $name: bool = true;
                }
            )*
        }
    };
}

impl_detect! {
    /// `T()` is well-formed.
    IS_DEFAULT_CONSTRUCTIBLE => Default;
    /// `T(const T&)` is well-formed.
    IS_COPY_CONSTRUCTIBLE => Clone;
    /// Copies are bitwise.
    IS_TRIVIALLY_COPYABLE => Copy;
    /// `a == b` is well-formed.
    IS_EQUALITY_COMPARABLE => PartialEq;
}

/// `is_default_constructible<T>::value` for a concrete `T`.
///
/// ```
/// use tola_meta::is_default_constructible;
///
/// assert!(is_default_constructible!(Vec<u8>));
/// assert!(is_default_constructible!(&'static str));
/// ```
#[macro_export]
macro_rules! is_default_constructible {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::operations::*;
        $crate::detect::operations::Detect::<$T>::IS_DEFAULT_CONSTRUCTIBLE
    }};
}

/// `is_copy_constructible<T>::value` for a concrete `T`.
#[macro_export]
macro_rules! is_copy_constructible {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::operations::*;
        $crate::detect::operations::Detect::<$T>::IS_COPY_CONSTRUCTIBLE
    }};
}

/// `is_trivially_copyable<T>::value` for a concrete `T`.
#[macro_export]
macro_rules! is_trivially_copyable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::operations::*;
        $crate::detect::operations::Detect::<$T>::IS_TRIVIALLY_COPYABLE
    }};
}

/// `a == b` is well-formed for a concrete `T`.
#[macro_export]
macro_rules! is_equality_comparable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::operations::*;
        $crate::detect::operations::Detect::<$T>::IS_EQUALITY_COMPARABLE
    }};
}

/// `is_convertible<From, To>::value` for concrete types.
///
/// ```
/// use tola_meta::is_convertible;
///
/// assert!(is_convertible!(u8 => u32));
/// assert!(!is_convertible!(u32 => u8));
/// ```
#[macro_export]
macro_rules! is_convertible {
    ($From:ty => $To:ty) => {
        $crate::has_impl!($From, ::core::convert::Into<$To>)
    };
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    struct Opaque;

    #[test]
    fn test_operations() {
        assert!(is_default_constructible!(u32));
        assert!(!is_default_constructible!(Opaque));
        assert!(is_copy_constructible!(Cell<u8>));
        assert!(!is_trivially_copyable!(Cell<Opaque>));
        assert!(is_trivially_copyable!(*const Opaque));
        assert!(is_equality_comparable!(&'static str));
        assert!(!is_equality_comparable!(Opaque));
    }

    #[test]
    fn test_convertible() {
        assert!(is_convertible!(u16 => i32));
        assert!(!is_convertible!(i32 => u16));
        assert!(is_convertible!(Opaque => Opaque));
    }
}
