//! `pointer_traits`.

use crate::detect::MemberSet;

/// Uniform view of a pointer-like type.
///
/// Raw pointers implement it directly. Other pointer-like types use
/// `#[pointer_like]`, which fills every member the impl leaves out:
///
/// ```
/// use core::marker::PhantomData;
/// use tola_meta::prelude::*;
///
/// struct Tagged<T, Tag>(*mut T, PhantomData<Tag>);
///
/// #[pointer_like]
/// impl<T, Tag> PointerTraits for Tagged<T, Tag> {}
///
/// tola_meta::assert_same!(<Tagged<u8, ()> as PointerTraits>::ElementType, u8);
/// tola_meta::assert_same!(<Tagged<u8, ()> as PointerTraits>::Rebind<u16>, Tagged<u16, ()>);
/// ```
///
/// A type with no type parameter must name its element type:
///
/// ```compile_fail
/// use tola_meta::prelude::*;
///
/// struct Handle(u32);
///
/// #[pointer_like]
/// impl PointerTraits for Handle {}
/// ```
pub trait PointerTraits: Sized {
    /// Pointee. Default: the first type parameter.
    type ElementType: ?Sized;
    /// Signed distance between two pointers. Default: `isize`.
    type DifferenceType: Copy;
    /// Same pointer shape over `U`. Default: first type parameter replaced.
    type Rebind<U>: PointerTraits;
    /// Same pointer shape over `const U`. Default: `Rebind<Const<U>>`.
    type RebindConst<U>: PointerTraits;

    /// Members the impl provided itself.
    const MEMBERS: MemberSet = MemberSet::empty();
}

/// `pointer_traits<P>::pointer_to`.
///
/// There is no default: a pointer-like type that cannot be formed from a
/// reference simply does not implement this trait.
pub trait PointerTo: PointerTraits {
    /// The reference a pointer is formed from.
    type Reference<'a>
    where
        Self: 'a;

    fn pointer_to<'a>(r: Self::Reference<'a>) -> Self
    where
        Self: 'a;
}

/// `*mut T` rebinds to `*mut U`; its const rebind is `*const U`.
impl<T: ?Sized> PointerTraits for *mut T {
    type ElementType = T;
    type DifferenceType = isize;
    type Rebind<U> = *mut U;
    type RebindConst<U> = *const U;

    const MEMBERS: MemberSet = MemberSet::POINTER_LIKE;
}

/// `*const T` rebinds to `*const U`.
impl<T: ?Sized> PointerTraits for *const T {
    type ElementType = T;
    type DifferenceType = isize;
    type Rebind<U> = *const U;
    type RebindConst<U> = *const U;

    const MEMBERS: MemberSet = MemberSet::POINTER_LIKE;
}

impl<T: ?Sized> PointerTo for *mut T {
    type Reference<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline]
    fn pointer_to<'a>(r: &'a mut T) -> Self
    where
        Self: 'a,
    {
        r
    }
}

impl<T: ?Sized> PointerTo for *const T {
    type Reference<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn pointer_to<'a>(r: &'a T) -> Self
    where
        Self: 'a,
    {
        r
    }
}

/// `std::addressof`: the address of `r`, even for types that customize
/// how they are referenced.
#[inline(always)]
pub const fn addressof<T: ?Sized>(r: &T) -> *const T {
    core::ptr::from_ref(r)
}

/// Mutable counterpart of [`addressof`].
#[inline(always)]
pub const fn addressof_mut<T: ?Sized>(r: &mut T) -> *mut T {
    core::ptr::from_mut(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_to_raw() {
        let mut value = 7u32;
        let p = <*mut u32 as PointerTo>::pointer_to(&mut value);
        assert_eq!(p, addressof_mut(&mut value));

        let q = <*const u32 as PointerTo>::pointer_to(&value);
        assert_eq!(q, addressof(&value));
    }

    #[test]
    fn test_raw_members() {
        assert!(<*mut u8 as PointerTraits>::MEMBERS.contains(MemberSet::REBIND));
    }
}
