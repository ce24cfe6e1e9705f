//! The default allocator, backed by the global allocator.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::allocator::{AllocError, Allocator};
use crate::detect::MemberSet;

/// `std::allocator<T>`.
///
/// Stateless: every `StdAllocator` compares equal to every other, whatever
/// its element type.
pub struct StdAllocator<T>(PhantomData<fn() -> T>);

impl<T> StdAllocator<T> {
    #[inline]
    pub const fn new() -> Self {
        StdAllocator(PhantomData)
    }
}

impl<T> Clone for StdAllocator<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StdAllocator<T> {}

impl<T> Default for StdAllocator<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StdAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StdAllocator<{}>", core::any::type_name::<T>())
    }
}

impl<T, U> PartialEq<StdAllocator<U>> for StdAllocator<T> {
    #[inline]
    fn eq(&self, _: &StdAllocator<U>) -> bool {
        true
    }
}

impl<T> Eq for StdAllocator<T> {}

impl<T> Allocator for StdAllocator<T> {
    type Value = T;
    type Pointer = *mut T;
    type ConstPointer = *const T;
    type VoidPointer = *mut ();
    type ConstVoidPointer = *const ();
    type DifferenceType = isize;
    type SizeType = usize;
    type Rebind<U> = StdAllocator<U>;

    const MEMBERS: MemberSet = MemberSet::ALLOCATOR;

    const PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT: bool = true;
    const IS_ALWAYS_EQUAL: bool = true;
    const IS_DEFAULT_ALLOCATOR: bool = true;

    fn allocate(&mut self, n: usize) -> Result<*mut T, AllocError> {
        if n == 0 {
            return Ok(ptr::null_mut());
        }
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling().as_ptr());
        }

        // SAFETY: the layout has a non-zero size.
        let p = unsafe { alloc(layout) }.cast::<T>();
        if p.is_null() {
            return Err(AllocError::OutOfMemory {
                size: layout.size(),
                align: layout.align(),
            });
        }
        log::trace!("allocate {} x {} at {:p}", n, core::any::type_name::<T>(), p);
        Ok(p)
    }

    unsafe fn deallocate(&mut self, p: *mut T, n: usize) {
        if p.is_null() || n == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        log::trace!("deallocate {} x {} at {:p}", n, core::any::type_name::<T>(), p);
        // The layout was valid when `p` was allocated with the same `n`.
        if let Ok(layout) = Layout::array::<T>(n) {
            unsafe { dealloc(p.cast(), layout) }
        }
    }

    #[inline]
    fn max_size(&self) -> usize {
        usize::MAX / mem::size_of::<T>().max(1)
    }

    #[inline]
    fn rebind<U>(&self) -> StdAllocator<U> {
        StdAllocator::new()
    }
}
