//! `allocator_traits`: defaults, overrides, rebinding and the default
//! allocator.

use core::marker::PhantomData;
use core::ptr;
use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use static_assertions::assert_type_eq_all;
use tola_meta::allocator::{
    ConstPointerOf, ConstVoidPointerOf, DifferenceTypeOf, PointerOf, RebindAlloc, RebindTraits,
    SizeTypeOf, VoidPointerOf,
};
use tola_meta::prelude::*;

// =============================================================================
// A minimal allocator: Value, allocate, deallocate
// =============================================================================

struct Minimal<T>(PhantomData<T>);

impl<T> Clone for Minimal<T> {
    fn clone(&self) -> Self {
        Minimal(PhantomData)
    }
}

impl<T> Default for Minimal<T> {
    fn default() -> Self {
        Minimal(PhantomData)
    }
}

#[allocator]
impl<T> Allocator for Minimal<T> {
    type Value = T;

    fn allocate(&mut self, n: usize) -> Result<*mut T, AllocError> {
        StdAllocator::<T>::new().allocate(n)
    }

    unsafe fn deallocate(&mut self, p: *mut T, n: usize) {
        unsafe { StdAllocator::<T>::new().deallocate(p, n) }
    }
}

#[test]
fn test_minimal_allocator_defaults() {
    type A = Minimal<u32>;

    assert_type_eq_all!(PointerOf<A>, *mut u32);
    assert_type_eq_all!(ConstPointerOf<A>, *const u32);
    assert_type_eq_all!(VoidPointerOf<A>, *mut ());
    assert_type_eq_all!(ConstVoidPointerOf<A>, *const ());
    assert_type_eq_all!(DifferenceTypeOf<A>, isize);
    assert_type_eq_all!(SizeTypeOf<A>, usize);
    assert_type_eq_all!(RebindAlloc<A, String>, Minimal<String>);

    assert!(!AllocatorTraits::<A>::PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT);
    assert!(!AllocatorTraits::<A>::PROPAGATE_ON_CONTAINER_SWAP);
    assert!(AllocatorTraits::<A>::IS_ALWAYS_EQUAL);
    assert!(RebindTraits::<A, u8>::IS_ALWAYS_EQUAL);
    assert_eq!(<A as Allocator>::MEMBERS, MemberSet::empty());
    assert!(!AllocatorTraits::<A>::provides(MemberSet::CONSTRUCT));

    let a = Minimal::<u32>::default();
    assert_eq!(AllocatorTraits::max_size(&a), usize::MAX);
}

#[test]
fn test_minimal_allocator_construct_and_destroy() {
    let mut a = Minimal::<Rc<u8>>::default();
    let shared = Rc::new(9);

    let p = AllocatorTraits::allocate(&mut a, 2).unwrap();
    unsafe {
        AllocatorTraits::construct(&mut a, p, shared.clone());
        AllocatorTraits::construct(&mut a, p.add(1), shared.clone());
        assert_eq!(Rc::strong_count(&shared), 3);

        AllocatorTraits::destroy(&mut a, p);
        AllocatorTraits::destroy(&mut a, p.add(1));
        AllocatorTraits::deallocate(&mut a, p, 2);
    }
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_hint_is_ignored_by_default() {
    let mut a = Minimal::<u8>::default();
    let p = AllocatorTraits::allocate_with_hint(&mut a, 4, ptr::null()).unwrap();
    assert!(!p.is_null());
    unsafe { AllocatorTraits::deallocate(&mut a, p, 4) };
}

// =============================================================================
// An allocator overriding most optional members
// =============================================================================

#[derive(Default)]
struct Stats {
    constructs: Cell<usize>,
    destroys: Cell<usize>,
    copies: Cell<usize>,
}

struct Counting<T> {
    stats: Rc<Stats>,
    _marker: PhantomData<T>,
}

impl<T> Counting<T> {
    fn new(stats: Rc<Stats>) -> Self {
        Counting { stats, _marker: PhantomData }
    }
}

impl<T> Clone for Counting<T> {
    fn clone(&self) -> Self {
        Counting::new(self.stats.clone())
    }
}

#[allocator]
impl<T> Allocator for Counting<T> {
    type Value = T;
    type SizeType = u16;

    const PROPAGATE_ON_CONTAINER_SWAP: bool = true;

    fn allocate(&mut self, n: u16) -> Result<*mut T, AllocError> {
        StdAllocator::<T>::new().allocate(usize::from(n))
    }

    unsafe fn deallocate(&mut self, p: *mut T, n: u16) {
        unsafe { StdAllocator::<T>::new().deallocate(p, usize::from(n)) }
    }

    unsafe fn construct<U>(&mut self, p: *mut U, value: U) {
        self.stats.constructs.set(self.stats.constructs.get() + 1);
        unsafe { p.write(value) }
    }

    unsafe fn destroy<U: ?Sized>(&mut self, p: *mut U) {
        self.stats.destroys.set(self.stats.destroys.get() + 1);
        unsafe { ptr::drop_in_place(p) }
    }

    fn max_size(&self) -> u16 {
        64
    }

    fn select_on_container_copy_construction(&self) -> Self {
        self.stats.copies.set(self.stats.copies.get() + 1);
        self.clone()
    }

    fn rebind<U>(&self) -> Counting<U> {
        Counting::new(self.stats.clone())
    }
}

#[test]
fn test_overrides_take_precedence() {
    type A = Counting<String>;

    assert_type_eq_all!(SizeTypeOf<A>, u16);
    assert_type_eq_all!(DifferenceTypeOf<A>, isize);
    assert_type_eq_all!(RebindAlloc<A, u8>, Counting<u8>);

    assert!(AllocatorTraits::<A>::PROPAGATE_ON_CONTAINER_SWAP);
    assert!(!AllocatorTraits::<A>::IS_ALWAYS_EQUAL);
    assert_eq!(
        <A as Allocator>::MEMBERS,
        MemberSet::SIZE_TYPE
            | MemberSet::PROPAGATE_ON_CONTAINER_SWAP
            | MemberSet::CONSTRUCT
            | MemberSet::DESTROY
            | MemberSet::MAX_SIZE
            | MemberSet::SELECT_ON_CONTAINER_COPY_CONSTRUCTION
    );
}

#[test]
fn test_member_operations_are_dispatched() {
    let stats = Rc::new(Stats::default());
    let mut a = Counting::<String>::new(stats.clone());

    assert_eq!(AllocatorTraits::max_size(&a), 64);

    let p = AllocatorTraits::allocate(&mut a, 1).unwrap();
    unsafe {
        AllocatorTraits::construct(&mut a, p, String::from("counted"));
        assert_eq!(&*p, "counted");
        AllocatorTraits::destroy(&mut a, p);
        AllocatorTraits::deallocate(&mut a, p, 1);
    }
    assert_eq!(stats.constructs.get(), 1);
    assert_eq!(stats.destroys.get(), 1);

    let copy = AllocatorTraits::select_on_container_copy_construction(&a);
    assert_eq!(stats.copies.get(), 1);

    let rebound: Counting<u64> = AllocatorTraits::rebind_from(&copy);
    assert!(Rc::ptr_eq(&rebound.stats, &stats));
}

// =============================================================================
// An allocator with its own pointer type
// =============================================================================

struct Handle<T>(*mut T);

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[pointer_like]
impl<T> PointerTraits for Handle<T> {}

impl<T> NullablePointer for Handle<T> {
    fn null() -> Self {
        Handle(ptr::null_mut())
    }
}

struct Arena<T>(PhantomData<T>);

impl<T> Clone for Arena<T> {
    fn clone(&self) -> Self {
        Arena(PhantomData)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena(PhantomData)
    }
}

#[allocator]
impl<T> Allocator for Arena<T> {
    type Value = T;
    type Pointer = Handle<T>;

    fn allocate(&mut self, n: usize) -> Result<Handle<T>, AllocError> {
        StdAllocator::<T>::new().allocate(n).map(Handle)
    }

    unsafe fn deallocate(&mut self, p: Handle<T>, n: usize) {
        unsafe { StdAllocator::<T>::new().deallocate(p.0, n) }
    }
}

#[test]
fn test_pointer_members_follow_the_pointer() {
    type A = Arena<u8>;

    assert_type_eq_all!(PointerOf<A>, Handle<u8>);
    assert_type_eq_all!(ConstPointerOf<A>, Handle<Const<u8>>);
    assert_type_eq_all!(VoidPointerOf<A>, Handle<()>);
    assert_type_eq_all!(ConstVoidPointerOf<A>, Handle<Const<()>>);
    assert_type_eq_all!(SizeTypeOf<A>, usize);
    assert_eq!(<A as Allocator>::MEMBERS, MemberSet::POINTER);

    let mut a = Arena::<u8>::default();
    let h = AllocatorTraits::allocate(&mut a, 3).unwrap();
    assert!(!h.is_null());
    unsafe { AllocatorTraits::deallocate(&mut a, h, 3) };
}

// =============================================================================
// The default allocator
// =============================================================================

#[test]
fn test_default_allocator_equality() {
    let a = StdAllocator::<u8>::new();
    let b = StdAllocator::<u8>::default();
    assert_eq!(a, b);

    let rebound: StdAllocator<String> = AllocatorTraits::rebind_from(&a);
    let back: StdAllocator<u8> = AllocatorTraits::rebind_from(&rebound);
    assert_eq!(back, a);
    assert!(rebound == a);
}

#[test]
fn test_default_allocator_traits() {
    type A = StdAllocator<u64>;

    assert!(AllocatorTraits::<A>::PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT);
    assert!(AllocatorTraits::<A>::IS_ALWAYS_EQUAL);
    assert!(AllocatorTraits::<A>::provides(MemberSet::ALLOCATOR));
    assert_type_eq_all!(RebindAlloc<A, u8>, StdAllocator<u8>);
    assert_eq!(AllocatorTraits::max_size(&A::new()), usize::MAX / 8);
}

#[test]
fn test_default_allocator_fast_path_matches_general_path() {
    let shared = Rc::new(());
    let mut fast = StdAllocator::<Rc<()>>::new();
    let mut general = Minimal::<Rc<()>>::default();

    let p = AllocatorTraits::allocate(&mut fast, 1).unwrap();
    let q = AllocatorTraits::allocate(&mut general, 1).unwrap();
    unsafe {
        AllocatorTraits::construct(&mut fast, p, shared.clone());
        AllocatorTraits::construct(&mut general, q, shared.clone());
        assert_eq!(Rc::strong_count(&shared), 3);
        AllocatorTraits::destroy(&mut fast, p);
        AllocatorTraits::destroy(&mut general, q);
        AllocatorTraits::deallocate(&mut fast, p, 1);
        AllocatorTraits::deallocate(&mut general, q, 1);
    }
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_allocation_errors() {
    let mut a = StdAllocator::<u32>::new();
    assert_eq!(a.allocate(usize::MAX), Err(AllocError::CapacityOverflow));
    assert_eq!(AllocError::CapacityOverflow.to_string(), "capacity overflow");
    assert_eq!(
        AllocError::OutOfMemory { size: 64, align: 8 }.to_string(),
        "out of memory: 64 bytes (align 8)"
    );
}
