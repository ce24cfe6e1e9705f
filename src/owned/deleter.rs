//! Deleters: how a [`UniquePtr`](super::UniquePtr) releases its handle.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use crate::detect::MemberSet;
use crate::ptr::NullablePointer;

/// Releases a handle to a `T`.
///
/// `Pointer` is the handle type the owner stores. `#[deleter]` fills it
/// with `*mut T` when the impl does not name one:
///
/// ```
/// use tola_meta::prelude::*;
///
/// struct Forget;
///
/// #[deleter]
/// impl Deleter<u32> for Forget {
///     unsafe fn delete(&mut self, _p: *mut u32) {}
/// }
///
/// tola_meta::assert_same!(<Forget as Deleter<u32>>::Pointer, *mut u32);
/// assert!(<Forget as Deleter<u32>>::MEMBERS.is_empty());
/// ```
pub trait Deleter<T: ?Sized> {
    type Pointer: NullablePointer;

    /// Members the impl provided itself.
    const MEMBERS: MemberSet = MemberSet::empty();

    /// Releases `p`. Never called with the empty handle.
    ///
    /// # Safety
    ///
    /// `p` must be a live handle this deleter knows how to release, and it
    /// must not be used afterwards.
    unsafe fn delete(&mut self, p: Self::Pointer);
}

/// Complete an `impl Deleter<T>` block with `type Pointer = *mut T`.
pub use macros::deleter;

// =============================================================================
// DefaultDelete
// =============================================================================

/// `std::default_delete<T>`: frees a handle that came from `Box::into_raw`.
///
/// Implemented for single objects and for slices.
pub struct DefaultDelete<T: ?Sized>(PhantomData<fn(*mut T)>);

impl<T: ?Sized> DefaultDelete<T> {
    #[inline]
    pub const fn new() -> Self {
        DefaultDelete(PhantomData)
    }
}

impl<T: ?Sized> Default for DefaultDelete<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for DefaultDelete<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DefaultDelete<T> {}

impl<T: ?Sized> fmt::Debug for DefaultDelete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultDelete")
    }
}

/// An array deleter converts to the slice deleter, matching the handle
/// conversion `*mut [T; N]` to `*mut [T]`.
impl<T, const N: usize> From<DefaultDelete<[T; N]>> for DefaultDelete<[T]> {
    #[inline]
    fn from(_: DefaultDelete<[T; N]>) -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
impl<T> Deleter<T> for DefaultDelete<T> {
    type Pointer = *mut T;

    const MEMBERS: MemberSet = MemberSet::POINTER;

    #[inline]
    unsafe fn delete(&mut self, p: *mut T) {
        drop(unsafe { Box::from_raw(p) });
    }
}

#[cfg(feature = "alloc")]
impl<T> Deleter<[T]> for DefaultDelete<[T]> {
    type Pointer = *mut [T];

    const MEMBERS: MemberSet = MemberSet::POINTER;

    #[inline]
    unsafe fn delete(&mut self, p: *mut [T]) {
        drop(unsafe { Box::from_raw(p) });
    }
}

// =============================================================================
// Closures and borrowed deleters
// =============================================================================

/// A closure used as a deleter.
///
/// ```
/// use tola_meta::prelude::*;
///
/// let mut freed = Vec::new();
/// let mut slot = 5u8;
/// {
///     let del = FnDeleter(|p: *mut u8| freed.push(p as usize));
///     let _owner = unsafe { UniquePtr::<u8, _>::from_raw_with_deleter(&mut slot as *mut u8, del) };
/// }
/// assert_eq!(freed, [&slot as *const u8 as usize]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FnDeleter<F>(pub F);

impl<T, F> Deleter<T> for FnDeleter<F>
where
    F: FnMut(*mut T),
{
    type Pointer = *mut T;

    #[inline]
    unsafe fn delete(&mut self, p: *mut T) {
        (self.0)(p)
    }
}

/// `unique_ptr<T, D&>`: the owner borrows a deleter the caller keeps.
impl<T: ?Sized, D: Deleter<T> + ?Sized> Deleter<T> for &mut D {
    type Pointer = D::Pointer;

    const MEMBERS: MemberSet = D::MEMBERS;

    #[inline]
    unsafe fn delete(&mut self, p: D::Pointer) {
        unsafe { (**self).delete(p) }
    }
}
