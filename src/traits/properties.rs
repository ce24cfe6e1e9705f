//! Type properties: qualification, sign, layout and array dimensions.

use core::mem;

use crate::primitives::Bool;
use crate::traits::{TypeInfo, is_arithmetic, is_class};

pub type IsConst<T> = <T as TypeInfo>::IsConst;
pub type IsVolatile<T> = <T as TypeInfo>::IsVolatile;

#[inline(always)]
pub const fn is_const<T: ?Sized + TypeInfo>() -> bool {
    <IsConst<T> as Bool>::VALUE
}

#[inline(always)]
pub const fn is_volatile<T: ?Sized + TypeInfo>() -> bool {
    <IsVolatile<T> as Bool>::VALUE
}

/// Arithmetic and `T(-1) < T(0)`. Floating point types are signed.
#[inline(always)]
pub const fn is_signed<T: ?Sized + TypeInfo>() -> bool {
    is_arithmetic::<T>() && T::IS_SIGNED
}

/// Arithmetic and not signed. Enums are never unsigned.
#[inline(always)]
pub const fn is_unsigned<T: ?Sized + TypeInfo>() -> bool {
    is_arithmetic::<T>() && !T::IS_SIGNED
}

/// A type with no runtime data.
#[inline(always)]
pub const fn is_stateless<T>() -> bool {
    mem::size_of::<T>() == 0
}

/// A class type with no data members.
#[inline(always)]
pub const fn is_empty<T: TypeInfo>() -> bool {
    is_class::<T>() && is_stateless::<T>()
}

/// Dropping a `T` runs no code.
#[inline(always)]
pub const fn is_trivially_destructible<T>() -> bool {
    !mem::needs_drop::<T>()
}

#[inline(always)]
pub const fn alignment_of<T>() -> usize {
    mem::align_of::<T>()
}

/// Number of array dimensions of `T`.
#[inline(always)]
pub const fn rank<T: ?Sized + TypeInfo>() -> usize {
    T::RANK
}

/// Extent of dimension `dim` of `T`; 0 when `T` has fewer dimensions or
/// the dimension is unbounded.
pub const fn extent<T: ?Sized + TypeInfo>(dim: usize) -> usize {
    if T::RANK == 0 {
        0
    } else if dim == 0 {
        T::EXTENT
    } else {
        extent::<T::RemoveExtent>(dim - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Const, Volatile};

    #[test]
    fn test_sign() {
        assert!(is_signed::<i32>());
        assert!(is_signed::<f64>());
        assert!(!is_signed::<u8>());
        assert!(is_unsigned::<bool>());
        assert!(is_unsigned::<Const<u16>>());
        assert!(!is_unsigned::<*mut u8>());
        assert!(!is_signed::<()>());
    }

    #[test]
    fn test_cv() {
        assert!(is_const::<Const<i32>>());
        assert!(!is_volatile::<Const<i32>>());
        assert!(is_volatile::<Const<Volatile<i32>>>());
        assert!(!is_const::<*const i32>());
        assert!(!is_const::<&'static Const<i32>>());
    }

    #[test]
    fn test_extent() {
        type Grid = [[i32; 3]; 4];
        assert_eq!(rank::<Grid>(), 2);
        assert_eq!(extent::<Grid>(0), 4);
        assert_eq!(extent::<Grid>(1), 3);
        assert_eq!(extent::<Grid>(2), 0);
        assert_eq!(extent::<[u8]>(0), 0);
        assert_eq!(rank::<[[u8; 2]]>(), 2);
        assert_eq!(extent::<Const<[u8; 5]>>(0), 5);
        assert_eq!(extent::<i32>(0), 0);
    }
}
