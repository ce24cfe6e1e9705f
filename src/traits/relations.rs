//! Type relations.

use core::any::TypeId;

/// `is_same<T, U>` as a bound: only `T: SameAs<T>` holds.
pub trait SameAs<U: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// `is_same<T, U>::value`.
#[inline]
pub fn is_same<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Fails to compile unless both types are identical.
///
/// ```
/// tola_meta::assert_same!(tola_meta::traits::Decay<[u8; 4]>, *mut u8);
/// ```
///
/// ```compile_fail
/// tola_meta::assert_same!(u8, i8);
/// ```
#[macro_export]
macro_rules! assert_same {
    ($T:ty, $U:ty $(,)?) => {
        const _: fn() = || {
            fn __same<T: ?Sized + $crate::traits::SameAs<U>, U: ?Sized>() {}
            __same::<$T, $U>();
        };
    };
}
