//! Pointer-like handles with an empty value.

use core::ptr::{self, NonNull};

/// A copyable, comparable handle with a distinguished empty value.
///
/// The empty value is what a default-constructed handle holds; an owner
/// holding it owns nothing.
pub trait NullablePointer: Copy + PartialEq {
    fn null() -> Self;

    #[inline]
    fn is_null(&self) -> bool {
        *self == Self::null()
    }
}

impl<T> NullablePointer for *mut T {
    #[inline]
    fn null() -> Self {
        ptr::null_mut()
    }
}

impl<T> NullablePointer for *const T {
    #[inline]
    fn null() -> Self {
        ptr::null()
    }
}

impl<T> NullablePointer for *mut [T] {
    #[inline]
    fn null() -> Self {
        ptr::slice_from_raw_parts_mut(ptr::null_mut(), 0)
    }

    #[inline]
    fn is_null(&self) -> bool {
        (*self).cast::<T>().is_null()
    }
}

impl<T> NullablePointer for *const [T] {
    #[inline]
    fn null() -> Self {
        ptr::slice_from_raw_parts(ptr::null(), 0)
    }

    #[inline]
    fn is_null(&self) -> bool {
        (*self).cast::<T>().is_null()
    }
}

/// Implicit handle conversion, the `is_convertible<P, Q>` that converting
/// owners require of their handles.
///
/// Every handle converts to itself. Raw pointers also convert from
/// `*mut` to `*const` and from an array to a slice of the same elements.
/// A custom handle type may add its own conversions.
pub trait ConvertHandle<To: NullablePointer>: NullablePointer {
    fn convert(self) -> To;
}

impl<P: NullablePointer> ConvertHandle<P> for P {
    #[inline]
    fn convert(self) -> P {
        self
    }
}

impl<T> ConvertHandle<*const T> for *mut T {
    #[inline]
    fn convert(self) -> *const T {
        self
    }
}

impl<T, const N: usize> ConvertHandle<*mut [T]> for *mut [T; N] {
    #[inline]
    fn convert(self) -> *mut [T] {
        self
    }
}

impl<T, const N: usize> ConvertHandle<*const [T]> for *const [T; N] {
    #[inline]
    fn convert(self) -> *const [T] {
        self
    }
}

impl<T: ?Sized> NullablePointer for Option<NonNull<T>> {
    #[inline]
    fn null() -> Self {
        None
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}
