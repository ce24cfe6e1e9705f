//! `unique_ptr`: a single owner of one handle.
//!
//! ```text
//!            null / with_deleter                 from_raw(h)
//!                   |                                 |
//!                   v          reset(h)               v
//!               [ empty ] -----------------------> [ owning(h) ]
//!                   ^   <-- release / take / clear ---   |
//!                   |                                    | drop / reset
//!                   +------------ delete(h) once --------+
//! ```

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ptr;

use super::deleter::{DefaultDelete, Deleter};
use crate::ptr::{ConvertHandle, NullablePointer};

/// Owns zero or one handle and the deleter that releases it.
///
/// The handle type is the deleter's `Pointer`. A handle equal to
/// `NullablePointer::null()` means empty; the deleter is never invoked on
/// it. Ownership moves with the value; there is no `Clone`.
///
/// ```
/// use tola_meta::prelude::*;
///
/// let mut a = UniquePtr::new(7u32);
/// assert!(a.is_owning());
///
/// let b = a.take();
/// assert!(a.is_null());
/// assert_eq!(b.as_ref(), Some(&7));
/// ```
pub struct UniquePtr<T: ?Sized, D: Deleter<T> = DefaultDelete<T>> {
    handle: D::Pointer,
    deleter: D,
    _owns: PhantomData<T>,
}

impl<T: ?Sized, D: Deleter<T>> UniquePtr<T, D> {
    /// An empty owner.
    #[inline]
    pub fn null() -> Self
    where
        D: Default,
    {
        Self::with_deleter(D::default())
    }

    /// An empty owner with the given deleter.
    #[inline]
    pub fn with_deleter(deleter: D) -> Self {
        UniquePtr {
            handle: D::Pointer::null(),
            deleter,
            _owns: PhantomData,
        }
    }

    /// Takes ownership of `handle`.
    ///
    /// # Safety
    ///
    /// `handle` must be releasable by a default `D`, and no other owner may
    /// hold it.
    #[inline]
    pub unsafe fn from_raw(handle: D::Pointer) -> Self
    where
        D: Default,
    {
        unsafe { Self::from_raw_with_deleter(handle, D::default()) }
    }

    /// Takes ownership of `handle`, to be released by `deleter`.
    ///
    /// # Safety
    ///
    /// `handle` must be releasable by `deleter`, and no other owner may
    /// hold it.
    #[inline]
    pub unsafe fn from_raw_with_deleter(handle: D::Pointer, deleter: D) -> Self {
        UniquePtr {
            handle,
            deleter,
            _owns: PhantomData,
        }
    }

    /// The stored handle. Ownership stays here.
    #[inline]
    pub fn get(&self) -> D::Pointer {
        self.handle
    }

    #[inline]
    pub fn get_deleter(&self) -> &D {
        &self.deleter
    }

    #[inline]
    pub fn get_deleter_mut(&mut self) -> &mut D {
        &mut self.deleter
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// `explicit operator bool`.
    #[inline]
    pub fn is_owning(&self) -> bool {
        !self.is_null()
    }

    /// Gives up ownership without releasing. The caller now owns the
    /// returned handle; on an empty owner it is the empty handle.
    #[inline]
    #[must_use = "the released handle is no longer owned and will leak"]
    pub fn release(&mut self) -> D::Pointer {
        mem::replace(&mut self.handle, D::Pointer::null())
    }

    /// Stores `handle`, then releases the previous one if there was one.
    ///
    /// The new handle is in place before the deleter runs, so a deleter
    /// that panics or looks back at this owner sees `handle`.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw_with_deleter`](Self::from_raw_with_deleter)
    /// for `handle`.
    pub unsafe fn reset(&mut self, handle: D::Pointer) {
        let old = mem::replace(&mut self.handle, handle);
        if !old.is_null() {
            log::trace!("unique_ptr<{}>: release on reset", core::any::type_name::<T>());
            unsafe { self.deleter.delete(old) }
        }
    }

    /// Releases the owned handle, leaving the owner empty.
    #[inline]
    pub fn clear(&mut self) {
        // SAFETY: the empty handle is never passed to the deleter.
        unsafe { self.reset(D::Pointer::null()) }
    }

    /// Move construction: a new owner with this owner's handle and
    /// deleter. This owner is left empty with a default deleter.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        D: Default,
    {
        let handle = self.release();
        let deleter = mem::take(&mut self.deleter);
        UniquePtr {
            handle,
            deleter,
            _owns: PhantomData,
        }
    }

    /// Move assignment: releases what this owner held, then takes over
    /// `other`'s handle and deleter.
    pub fn assign(&mut self, mut other: Self) {
        let handle = other.release();
        // SAFETY: `other` gave up `handle`, so this owner is its only owner.
        unsafe { self.reset(handle) };
        mem::swap(&mut self.deleter, &mut other.deleter);
    }

    /// Converting move construction from an owner of another type.
    ///
    /// Requires the other handle to convert to this owner's handle and the
    /// other deleter to convert to `D`.
    ///
    /// ```
    /// use tola_meta::prelude::*;
    ///
    /// let array = UniquePtr::new([1u8, 2, 3]);
    /// let slice = UniquePtr::<[u8]>::from_other(array);
    /// assert_eq!(slice.as_ref().map(<[u8]>::len), Some(3));
    /// ```
    pub fn from_other<U: ?Sized, E>(other: UniquePtr<U, E>) -> Self
    where
        E: Deleter<U> + Into<D>,
        E::Pointer: ConvertHandle<D::Pointer>,
    {
        let (handle, deleter) = other.into_parts();
        UniquePtr {
            handle: handle.convert(),
            deleter: deleter.into(),
            _owns: PhantomData,
        }
    }

    /// Converting move assignment: releases what this owner held, then
    /// takes over `other`'s converted handle and deleter.
    pub fn assign_from<U: ?Sized, E>(&mut self, other: UniquePtr<U, E>)
    where
        E: Deleter<U> + Into<D>,
        E::Pointer: ConvertHandle<D::Pointer>,
    {
        let (handle, deleter) = other.into_parts();
        // SAFETY: `other` gave up `handle`, so this owner is its only owner.
        unsafe { self.reset(handle.convert()) };
        self.deleter = deleter.into();
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.handle, &mut other.handle);
        mem::swap(&mut self.deleter, &mut other.deleter);
    }

    /// Gives up ownership and drops the deleter.
    #[inline]
    #[must_use = "the released handle is no longer owned and will leak"]
    pub fn into_raw(self) -> D::Pointer {
        self.into_parts().0
    }

    /// Gives up ownership, returning the handle and the deleter.
    pub fn into_parts(self) -> (D::Pointer, D) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the deleter is moved out once.
        let deleter = unsafe { ptr::read(&this.deleter) };
        (this.handle, deleter)
    }
}

impl<T: ?Sized, D> UniquePtr<T, D>
where
    D: Deleter<T, Pointer = *mut T>,
{
    /// The owned value, if any.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        // SAFETY: a non-null handle is owned and live.
        unsafe { self.handle.as_ref() }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as above, and `&mut self` makes the access unique.
        unsafe { self.handle.as_mut() }
    }
}

#[cfg(feature = "alloc")]
impl<T> UniquePtr<T> {
    /// Boxes `value` and owns it.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from(Box::new(value))
    }
}

#[cfg(feature = "alloc")]
impl<T> From<Box<T>> for UniquePtr<T> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        // SAFETY: `DefaultDelete<T>` releases handles from `Box::into_raw`.
        unsafe { Self::from_raw(Box::into_raw(value)) }
    }
}

#[cfg(feature = "alloc")]
impl<T> From<Box<[T]>> for UniquePtr<[T]> {
    #[inline]
    fn from(value: Box<[T]>) -> Self {
        // SAFETY: as above, for slices.
        unsafe { Self::from_raw(Box::into_raw(value)) }
    }
}

impl<T: ?Sized, D: Deleter<T> + Default> Default for UniquePtr<T, D> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized, D: Deleter<T>> Drop for UniquePtr<T, D> {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            log::trace!("unique_ptr<{}>: release on drop", core::any::type_name::<T>());
            // SAFETY: the handle is owned and is not used again.
            unsafe { self.deleter.delete(self.handle) }
        }
    }
}

impl<T: ?Sized, D> fmt::Debug for UniquePtr<T, D>
where
    D: Deleter<T>,
    D::Pointer: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UniquePtr").field(&self.handle).finish()
    }
}

impl<T: ?Sized, D> fmt::Pointer for UniquePtr<T, D>
where
    D: Deleter<T>,
    D::Pointer: fmt::Pointer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.handle, f)
    }
}

// Comparisons are by handle, like the raw handles themselves.

impl<T: ?Sized, D: Deleter<T>> PartialEq for UniquePtr<T, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<T: ?Sized, D> Eq for UniquePtr<T, D>
where
    D: Deleter<T>,
    D::Pointer: Eq,
{
}

impl<T: ?Sized, D> PartialOrd for UniquePtr<T, D>
where
    D: Deleter<T>,
    D::Pointer: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.handle.partial_cmp(&other.handle)
    }
}

impl<T: ?Sized, D> Hash for UniquePtr<T, D>
where
    D: Deleter<T>,
    D::Pointer: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state)
    }
}
