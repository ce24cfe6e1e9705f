//! Primary and composite classifiers.
//!
//! Every classifier comes in two forms:
//! - a type alias yielding a [`Bool`] (`IsIntegral<T>`), usable in bounds
//!   and further type-level logic;
//! - a `const fn` value shorthand (`is_integral::<T>()`).

use crate::primitives::Bool;
use crate::traits::{Category, TypeInfo};

macro_rules! primary {
    ($($(#[$meta:meta])* $Alias:ident = $field:ident;)*) => {
        ::paste::paste! {
            $(
                $(#[$meta])*
                pub type $Alias<T> = <<T as TypeInfo>::Category as Category>::$field;

                #[doc = concat!("Value shorthand for [`", stringify!($Alias), "`].")]
                #[inline(always)]
                pub const fn [<$Alias:snake>]<T: ?Sized + TypeInfo>() -> bool {
                    <$Alias<T> as Bool>::VALUE
                }
            )*
        }
    };
}

macro_rules! __or {
    ($T:ident; $last:ident) => { $last<$T> };
    ($T:ident; $head:ident $(, $rest:ident)+) => {
        <$head<$T> as Bool>::Or<__or!($T; $($rest),+)>
    };
}

macro_rules! composite {
    ($($(#[$meta:meta])* $Alias:ident = $($part:ident)|+;)*) => {
        ::paste::paste! {
            $(
                $(#[$meta])*
                pub type $Alias<T> = __or!(T; $($part),+);

                #[doc = concat!("Value shorthand for [`", stringify!($Alias), "`].")]
                #[inline(always)]
                pub const fn [<$Alias:snake>]<T: ?Sized + TypeInfo>() -> bool {
                    <$Alias<T> as Bool>::VALUE
                }
            )*
        }
    };
}

// =============================================================================
// Layer 1: Primary categories
// =============================================================================

primary! {
    /// `()`, possibly cv-qualified.
    IsVoid = Void;
    IsNullPointer = NullPointer;
    /// Integers, `bool` and `char`.
    IsIntegral = Integral;
    IsFloatingPoint = FloatingPoint;
    /// Bounded (`[T; N]`) and unbounded (`[T]`) arrays.
    IsArray = Array;
    IsEnum = Enum;
    IsUnion = Union;
    /// Structs and tuples. Enums and unions are not classes.
    IsClass = Class;
    IsFunction = Function;
    /// Raw pointers. References and member pointers are not pointers.
    IsPointer = Pointer;
    IsLvalueReference = LvalueReference;
    IsRvalueReference = RvalueReference;
    IsMemberObjectPointer = MemberObjectPointer;
    IsMemberFunctionPointer = MemberFunctionPointer;
}

// =============================================================================
// Layer 2: Composite categories
// =============================================================================

composite! {
    IsReference = IsLvalueReference | IsRvalueReference;
    IsMemberPointer = IsMemberObjectPointer | IsMemberFunctionPointer;
    IsArithmetic = IsIntegral | IsFloatingPoint;
    IsFundamental = IsIntegral | IsFloatingPoint | IsVoid | IsNullPointer;
    IsScalar = IsIntegral
        | IsFloatingPoint
        | IsEnum
        | IsPointer
        | IsMemberObjectPointer
        | IsMemberFunctionPointer
        | IsNullPointer;
    /// Anything that is not a function, a reference or void.
    IsObject = IsIntegral
        | IsFloatingPoint
        | IsEnum
        | IsPointer
        | IsMemberObjectPointer
        | IsMemberFunctionPointer
        | IsNullPointer
        | IsArray
        | IsUnion
        | IsClass;
}

/// Everything that is not fundamental.
pub type IsCompound<T> = <IsFundamental<T> as Bool>::Not;

/// Value shorthand for [`IsCompound`].
#[inline(always)]
pub const fn is_compound<T: ?Sized + TypeInfo>() -> bool {
    <IsCompound<T> as Bool>::VALUE
}
