//! Transformation metafunctions.
//!
//! Each C++ `xxx<T>::type` is an alias `Xxx<T>` projecting the matching
//! [`TypeInfo`] item.

use crate::primitives::NumericLimits;
use crate::traits::TypeInfo;

pub use crate::primitives::{Conditional, EnableIfT};

pub type RemoveConst<T> = <T as TypeInfo>::RemoveConst;
pub type RemoveVolatile<T> = <T as TypeInfo>::RemoveVolatile;
pub type RemoveCv<T> = <RemoveConst<T> as TypeInfo>::RemoveVolatile;

pub type AddConst<T> = <T as TypeInfo>::AddConst;
pub type AddVolatile<T> = <T as TypeInfo>::AddVolatile;
/// `const volatile T`, in canonical `Const<Volatile<T>>` order.
pub type AddCv<T> = <AddConst<T> as TypeInfo>::AddVolatile;

pub type RemoveReference<T> = <T as TypeInfo>::RemoveReference;
pub type RemoveCvRef<T> = RemoveCv<RemoveReference<T>>;
pub type AddLvalueReference<'a, T> = <T as TypeInfo>::AddLvalueReference<'a>;
pub type AddRvalueReference<'a, T> = <T as TypeInfo>::AddRvalueReference<'a>;

/// Pointee of a raw pointer (`*const T` yields `Const<T>`); other types unchanged.
pub type RemovePointer<T> = <T as TypeInfo>::RemovePointer;
/// Pointer to `T` after removing references; function types stay as they are.
pub type AddPointer<T> = <T as TypeInfo>::AddPointer;

pub type RemoveExtent<T> = <T as TypeInfo>::RemoveExtent;
pub type RemoveAllExtents<T> = <T as TypeInfo>::RemoveAllExtents;

/// The type a value of `T` becomes when passed by value.
///
/// Arrays decay to a pointer to their element, functions stay function
/// pointers, everything else loses references and cv-qualifiers.
pub type Decay<T> = <T as TypeInfo>::Decay;

// =============================================================================
// make_signed / make_unsigned
// =============================================================================

/// Signed/unsigned counterparts of an integer type.
///
/// `bool` has no counterpart, so `MakeSigned<bool>` does not compile.
pub trait SignModifiers: NumericLimits + TypeInfo {
    type Signed: SignModifiers + NumericLimits + TypeInfo;
    type Unsigned: SignModifiers + NumericLimits + TypeInfo;
}

pub type MakeSigned<T> = <T as SignModifiers>::Signed;
pub type MakeUnsigned<T> = <T as SignModifiers>::Unsigned;

macro_rules! impl_sign_modifiers {
    ($($signed:ty, $unsigned:ty;)*) => {
        $(
            impl SignModifiers for $signed {
                type Signed = $signed;
                type Unsigned = $unsigned;
            }

            impl SignModifiers for $unsigned {
                type Signed = $signed;
                type Unsigned = $unsigned;
            }
        )*
    };
}

impl_sign_modifiers! {
    i8, u8;
    i16, u16;
    i32, u32;
    i64, u64;
    i128, u128;
    isize, usize;
}
