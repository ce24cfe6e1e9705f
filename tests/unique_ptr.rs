//! `unique_ptr` ownership scenarios.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use tola_meta::prelude::*;

/// Records every handle it is asked to release.
#[derive(Clone, Default)]
struct Recorder {
    released: Rc<RefCell<Vec<usize>>>,
}

#[deleter]
impl Deleter<u32> for Recorder {
    unsafe fn delete(&mut self, p: *mut u32) {
        self.released.borrow_mut().push(p as usize);
    }
}

fn handles() -> (Box<[u32; 2]>, *mut u32, *mut u32) {
    let mut slots = Box::new([0u32; 2]);
    let h1: *mut u32 = &mut slots[0];
    let h2: *mut u32 = &mut slots[1];
    (slots, h1, h2)
}

#[test]
fn test_empty_reset_move_destroy() {
    let (_slots, h, _) = handles();
    let recorder = Recorder::default();
    let log = recorder.released.clone();

    let mut first = UniquePtr::<u32, Recorder>::with_deleter(recorder);
    assert!(!first.is_owning());

    unsafe { first.reset(h) };
    assert!(first.is_owning());
    assert_eq!(first.get(), h);

    let second = first.take();
    assert!(!first.is_owning());
    assert!(second.is_owning());
    assert_eq!(second.get(), h);

    drop(first);
    assert!(log.borrow().is_empty());

    drop(second);
    assert_eq!(*log.borrow(), vec![h as usize]);
}

#[test]
fn test_sequential_resets_release_between_calls() {
    let (_slots, h1, h2) = handles();
    let recorder = Recorder::default();
    let log = recorder.released.clone();

    let mut p = UniquePtr::<u32, Recorder>::with_deleter(recorder);
    unsafe { p.reset(h1) };
    assert!(log.borrow().is_empty());

    unsafe { p.reset(h2) };
    assert_eq!(*log.borrow(), vec![h1 as usize]);

    let released = p.release();
    assert_eq!(released, h2);
    drop(p);
    assert_eq!(*log.borrow(), vec![h1 as usize]);
}

/// Panics on release, after noting the handle.
#[derive(Default)]
struct Exploding {
    seen: Rc<Cell<usize>>,
}

#[deleter]
impl Deleter<u32> for Exploding {
    unsafe fn delete(&mut self, p: *mut u32) {
        self.seen.set(p as usize);
        panic!("deleter failure");
    }
}

#[test]
fn test_new_handle_is_stored_before_release() {
    let (_slots, h1, h2) = handles();
    let seen = Rc::new(Cell::new(0));
    let exploding = Exploding { seen: seen.clone() };
    let mut p = unsafe { UniquePtr::<u32, _>::from_raw_with_deleter(h1, exploding) };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| unsafe { p.reset(h2) }));
    assert!(outcome.is_err());
    assert_eq!(seen.get(), h1 as usize);
    assert_eq!(p.get(), h2);

    // Hand h2 back so the owner's drop does not panic again.
    assert_eq!(p.release(), h2);
}

#[test]
fn test_move_assign_releases_target_first() {
    let (_slots, h1, h2) = handles();
    let recorder = Recorder::default();
    let log = recorder.released.clone();

    let mut dst = unsafe { UniquePtr::<u32, _>::from_raw_with_deleter(h1, recorder.clone()) };
    let src = unsafe { UniquePtr::<u32, _>::from_raw_with_deleter(h2, recorder) };

    dst.assign(src);
    assert_eq!(*log.borrow(), vec![h1 as usize]);
    assert_eq!(dst.get(), h2);

    dst.clear();
    assert_eq!(*log.borrow(), vec![h1 as usize, h2 as usize]);
    assert!(dst.is_null());
}

#[test]
fn test_swap_and_parts() {
    let mut a = UniquePtr::new(1u8);
    let mut b = UniquePtr::new(2u8);
    a.swap(&mut b);
    assert_eq!(a.as_ref(), Some(&2));
    assert_eq!(b.as_ref(), Some(&1));

    if let Some(v) = b.as_mut() {
        *v = 10;
    }
    let (raw, _deleter) = b.into_parts();
    let boxed = unsafe { Box::from_raw(raw) };
    assert_eq!(*boxed, 10);
}

#[test]
fn test_default_delete_drops_values() {
    struct Noisy(Rc<Cell<u32>>);
    impl Drop for Noisy {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    {
        let _one = UniquePtr::new(Noisy(drops.clone()));
        let many: Box<[Noisy]> = (0..3).map(|_| Noisy(drops.clone())).collect();
        let _slice = UniquePtr::from(many);
    }
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_empty_slice_owner() {
    let mut empty = UniquePtr::<[u8]>::null();
    assert!(empty.is_null());
    assert!(NullablePointer::is_null(&empty.get()));

    let full = UniquePtr::from(vec![1u8, 2].into_boxed_slice());
    assert!(full.is_owning());
    empty.assign(full);
    assert_eq!(empty.as_ref(), Some(&[1u8, 2][..]));
    empty.clear();
    assert!(empty.is_null());
}

#[test]
fn test_converting_move_from_array_owner() {
    let drops = Rc::new(Cell::new(0));
    struct Counted(Rc<Cell<u32>>);
    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let array = UniquePtr::new([Counted(drops.clone()), Counted(drops.clone())]);
    let addr = array.get() as *mut Counted;
    let slice = UniquePtr::<[Counted]>::from_other(array);
    assert_eq!(slice.get() as *mut Counted, addr);
    assert_eq!(slice.as_ref().map(<[Counted]>::len), Some(2));
    assert_eq!(drops.get(), 0);

    let mut target = UniquePtr::from(vec![Counted(drops.clone())].into_boxed_slice());
    let none: [Counted; 0] = [];
    target.assign_from(UniquePtr::new(none));
    assert_eq!(drops.get(), 1);
    assert_eq!(target.as_ref().map(<[Counted]>::len), Some(0));

    drop(slice);
    assert_eq!(drops.get(), 3);
}

#[test]
fn test_converting_move_keeps_custom_deleter() {
    let (_slots, h, _) = handles();
    let recorder = Recorder::default();
    let log = recorder.released.clone();

    let source = unsafe { UniquePtr::<u32, Recorder>::from_raw_with_deleter(h, recorder) };
    let moved = UniquePtr::<u32, Recorder>::from_other(source);
    assert_eq!(moved.get(), h);
    drop(moved);
    assert_eq!(*log.borrow(), vec![h as usize]);
}

#[test]
fn test_borrowed_deleter_stays_with_caller() {
    let (_slots, h, _) = handles();
    let mut recorder = Recorder::default();
    {
        let deleter = &mut recorder;
        let _p = unsafe { UniquePtr::<u32, _>::from_raw_with_deleter(h, deleter) };
    }
    assert_eq!(*recorder.released.borrow(), vec![h as usize]);
}

// A file-descriptor-like handle: -1 is empty.

#[derive(Clone, Copy, PartialEq, Debug)]
struct Fd(i32);

impl NullablePointer for Fd {
    fn null() -> Self {
        Fd(-1)
    }
}

#[derive(Default)]
struct Close {
    closed: Vec<i32>,
}

#[deleter]
impl Deleter<i32> for Close {
    type Pointer = Fd;

    unsafe fn delete(&mut self, fd: Fd) {
        self.closed.push(fd.0);
    }
}

#[test]
fn test_deleter_chooses_the_handle_type() {
    assert_eq!(<Close as Deleter<i32>>::MEMBERS, MemberSet::POINTER);

    let mut p = UniquePtr::<i32, Close>::null();
    assert_eq!(p.get(), Fd(-1));
    assert!(p.is_null());

    unsafe { p.reset(Fd(3)) };
    unsafe { p.reset(Fd(4)) };
    assert_eq!(p.get_deleter().closed, vec![3]);

    p.get_deleter_mut().closed.clear();
    let (fd, deleter) = p.into_parts();
    assert_eq!(fd, Fd(4));
    assert!(deleter.closed.is_empty());
}

#[test]
fn test_comparisons_and_formatting() {
    let a = UniquePtr::new(5i64);
    let empty = UniquePtr::<i64>::null();
    assert!(a != empty);
    assert_eq!(empty, UniquePtr::default());
    assert_eq!(format!("{:p}", a), format!("{:p}", a.get()));
    assert!(format!("{:?}", empty).starts_with("UniquePtr("));
}

assert_not_impl_any!(UniquePtr<u8>: Clone);
assert_impl_all!(UniquePtr<[u8]>: Default, PartialEq);
