//! `allocator_traits`.
//!
//! [`Allocator`] is what a user writes: `type Value`, `allocate` and
//! `deallocate`, plus whichever optional members it cares about.
//! `#[allocator]` fills the absent associated types; the trait's default
//! items cover absent consts and methods. [`AllocatorTraits`] is the
//! normalized view containers program against.

use core::marker::PhantomData;
use core::ptr;

use crate::allocator::AllocError;
use crate::detect::MemberSet;
use crate::primitives::NumericLimits;
use crate::ptr::{NullablePointer, PointerTraits};
use crate::traits::is_stateless;

/// An allocator for values of type `Value`.
///
/// | Member | Default |
/// |--------|---------|
/// | `Pointer` | `*mut Value` |
/// | `ConstPointer` | `Pointer`'s `RebindConst<Value>` |
/// | `VoidPointer` / `ConstVoidPointer` | `Pointer`'s `Rebind<()>` / `RebindConst<()>` |
/// | `DifferenceType` | `Pointer`'s `DifferenceType` |
/// | `SizeType` | `MakeUnsigned<DifferenceType>` |
/// | `Rebind<U>` | `Self` with its first type parameter replaced by `U` |
/// | `PROPAGATE_ON_CONTAINER_*` | `false` |
/// | `IS_ALWAYS_EQUAL` | `Self` is zero-sized |
/// | `construct` / `destroy` | write / drop in place |
/// | `max_size` | `SizeType::MAX` |
/// | `select_on_container_copy_construction` | `self.clone()` |
/// | `rebind` | `Rebind<U>::default()` (stateless allocators only) |
///
/// The type defaults and `rebind` need `#[allocator]`; an impl without it
/// must spell them out.
///
/// Generic allocators must implement the trait for every value type, as
/// `Rebind<U>` has to be an allocator for any `U`.
pub trait Allocator: Sized + Clone {
    type Value;

    type Pointer: PointerTraits<ElementType = Self::Value> + NullablePointer;
    type ConstPointer: PointerTraits;
    type VoidPointer: PointerTraits;
    type ConstVoidPointer: PointerTraits;
    type DifferenceType: Copy;
    type SizeType: NumericLimits;

    /// `rebind<U>::other`.
    type Rebind<U>: Allocator<Value = U>;

    /// Members the impl provided itself.
    const MEMBERS: MemberSet = MemberSet::empty();

    const PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT: bool = false;
    const PROPAGATE_ON_CONTAINER_SWAP: bool = false;
    const IS_ALWAYS_EQUAL: bool = is_stateless::<Self>();

    /// Set only by the crate's own default allocator.
    #[doc(hidden)]
    const IS_DEFAULT_ALLOCATOR: bool = false;

    /// Storage for `n` values. The storage is uninitialized.
    fn allocate(&mut self, n: Self::SizeType) -> Result<Self::Pointer, AllocError>;

    /// Storage for `n` values near `hint`. Default: the hint is ignored.
    fn allocate_hint(
        &mut self,
        n: Self::SizeType,
        hint: Self::ConstVoidPointer,
    ) -> Result<Self::Pointer, AllocError> {
        let _ = hint;
        self.allocate(n)
    }

    /// # Safety
    ///
    /// `p` must come from `allocate(n)` on an allocator equal to `self`,
    /// and must not be used afterwards.
    unsafe fn deallocate(&mut self, p: Self::Pointer, n: Self::SizeType);

    /// Constructs `value` at `p`.
    ///
    /// # Safety
    ///
    /// `p` must be valid for writes and properly aligned.
    unsafe fn construct<U>(&mut self, p: *mut U, value: U) {
        unsafe { p.write(value) }
    }

    /// Destroys the value at `p`.
    ///
    /// # Safety
    ///
    /// `p` must point to a live value that is not used afterwards.
    unsafe fn destroy<U: ?Sized>(&mut self, p: *mut U) {
        unsafe { ptr::drop_in_place(p) }
    }

    fn max_size(&self) -> Self::SizeType {
        <Self::SizeType as NumericLimits>::MAX
    }

    /// The allocator a copied container should use.
    fn select_on_container_copy_construction(&self) -> Self {
        self.clone()
    }

    /// An allocator for `U` drawing from the same source.
    ///
    /// `#[allocator]` fills it with `Rebind<U>::default()`, which is only
    /// right for stateless allocators. A stateful allocator must override
    /// it, or the rebound allocator is disconnected from `self` even when
    /// the types line up. `#[allocator]` rejects an impl that declares
    /// `IS_ALWAYS_EQUAL = false` without one:
    ///
    /// ```compile_fail
    /// use core::marker::PhantomData;
    /// use tola_meta::prelude::*;
    ///
    /// struct Pool<T>(u32, PhantomData<T>);
    ///
    /// impl<T> Clone for Pool<T> {
    ///     fn clone(&self) -> Self {
    ///         Pool(self.0, PhantomData)
    ///     }
    /// }
    ///
    /// impl<T> Default for Pool<T> {
    ///     fn default() -> Self {
    ///         Pool(0, PhantomData)
    ///     }
    /// }
    ///
    /// #[allocator]
    /// impl<T> Allocator for Pool<T> {
    ///     type Value = T;
    ///     const IS_ALWAYS_EQUAL: bool = false;
    ///
    ///     fn allocate(&mut self, _n: usize) -> Result<*mut T, AllocError> {
    ///         Err(AllocError::CapacityOverflow)
    ///     }
    ///
    ///     unsafe fn deallocate(&mut self, _p: *mut T, _n: usize) {}
    /// }
    /// ```
    fn rebind<U>(&self) -> Self::Rebind<U>;
}

// =============================================================================
// Normalized view
// =============================================================================

/// `allocator_traits<A>`: every operation, whether or not `A` customizes it.
///
/// ```
/// use tola_meta::prelude::*;
///
/// let mut a = StdAllocator::<String>::new();
/// let p = AllocatorTraits::allocate(&mut a, 1).unwrap();
/// unsafe {
///     AllocatorTraits::construct(&mut a, p, String::from("hi"));
///     assert_eq!(&*p, "hi");
///     AllocatorTraits::destroy(&mut a, p);
///     AllocatorTraits::deallocate(&mut a, p, 1);
/// }
/// ```
pub struct AllocatorTraits<A>(PhantomData<A>);

impl<A: Allocator> AllocatorTraits<A> {
    pub const PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT: bool =
        A::PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT;
    pub const PROPAGATE_ON_CONTAINER_SWAP: bool = A::PROPAGATE_ON_CONTAINER_SWAP;
    pub const IS_ALWAYS_EQUAL: bool = A::IS_ALWAYS_EQUAL;

    /// Whether `A` wrote the given optional members itself.
    #[inline]
    pub const fn provides(members: MemberSet) -> bool {
        A::MEMBERS.contains(members)
    }

    #[inline]
    pub fn allocate(a: &mut A, n: A::SizeType) -> Result<A::Pointer, AllocError> {
        a.allocate(n)
    }

    #[inline]
    pub fn allocate_with_hint(
        a: &mut A,
        n: A::SizeType,
        hint: A::ConstVoidPointer,
    ) -> Result<A::Pointer, AllocError> {
        a.allocate_hint(n, hint)
    }

    /// # Safety
    ///
    /// See [`Allocator::deallocate`].
    #[inline]
    pub unsafe fn deallocate(a: &mut A, p: A::Pointer, n: A::SizeType) {
        unsafe { a.deallocate(p, n) }
    }

    /// Placement-constructs `value` at `p`, through `A::construct` unless
    /// `A` is the default allocator.
    ///
    /// # Safety
    ///
    /// See [`Allocator::construct`].
    #[inline]
    pub unsafe fn construct<U>(a: &mut A, p: *mut U, value: U) {
        if A::IS_DEFAULT_ALLOCATOR {
            unsafe { p.write(value) }
        } else {
            unsafe { a.construct(p, value) }
        }
    }

    /// Destroys the value at `p`, through `A::destroy` unless `A` is the
    /// default allocator.
    ///
    /// # Safety
    ///
    /// See [`Allocator::destroy`].
    #[inline]
    pub unsafe fn destroy<U: ?Sized>(a: &mut A, p: *mut U) {
        if A::IS_DEFAULT_ALLOCATOR {
            unsafe { ptr::drop_in_place(p) }
        } else {
            unsafe { a.destroy(p) }
        }
    }

    #[inline]
    pub fn max_size(a: &A) -> A::SizeType {
        a.max_size()
    }

    #[inline]
    pub fn select_on_container_copy_construction(a: &A) -> A {
        a.select_on_container_copy_construction()
    }

    /// `rebind_alloc<U>` constructed from `a`.
    #[inline]
    pub fn rebind_from<U>(a: &A) -> RebindAlloc<A, U> {
        a.rebind::<U>()
    }
}

pub type ValueOf<A> = <A as Allocator>::Value;
pub type PointerOf<A> = <A as Allocator>::Pointer;
pub type ConstPointerOf<A> = <A as Allocator>::ConstPointer;
pub type VoidPointerOf<A> = <A as Allocator>::VoidPointer;
pub type ConstVoidPointerOf<A> = <A as Allocator>::ConstVoidPointer;
pub type DifferenceTypeOf<A> = <A as Allocator>::DifferenceType;
pub type SizeTypeOf<A> = <A as Allocator>::SizeType;

/// `allocator_traits<A>::rebind_alloc<U>`.
pub type RebindAlloc<A, U> = <A as Allocator>::Rebind<U>;

/// `allocator_traits<A>::rebind_traits<U>`.
pub type RebindTraits<A, U> = AllocatorTraits<RebindAlloc<A, U>>;
