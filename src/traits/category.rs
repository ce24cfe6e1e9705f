//! Primary type categories.
//!
//! Every [`TypeInfo`] type names exactly one category marker. The marker
//! answers all fourteen primary predicates at once, so a classifier is a
//! single projection: `<<T as TypeInfo>::Category as Category>::Integral`.
//!
//! ```text
//!   i32 ──TypeInfo──> IntegralKind ──Category──> Integral = True
//!                                               Pointer  = False
//!                                               ...
//! ```

use crate::primitives::{Bool, BoolConstant, False, True};
use crate::traits::TypeInfo;

/// Runtime mirror of the primary category, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Void,
    NullPointer,
    Integral,
    FloatingPoint,
    Array,
    Enum,
    Union,
    Class,
    Function,
    Pointer,
    LvalueReference,
    RvalueReference,
    MemberObjectPointer,
    MemberFunctionPointer,
}

/// A `Bool` that can also select between `TypeInfo` types and categories.
///
/// Plain `Bool::If` carries no bounds, so generic code could not use its
/// result as a `TypeInfo`. These selectors keep the bound.
pub trait Branch: Bool {
    type IfInfo<Then: ?Sized + TypeInfo, Else: ?Sized + TypeInfo>: ?Sized + TypeInfo;
    type IfCategory<Then: Category, Else: Category>: Category;
}

impl Branch for True {
    type IfInfo<Then: ?Sized + TypeInfo, Else: ?Sized + TypeInfo> = Then;
    type IfCategory<Then: Category, Else: Category> = Then;
}

impl Branch for False {
    type IfInfo<Then: ?Sized + TypeInfo, Else: ?Sized + TypeInfo> = Else;
    type IfCategory<Then: Category, Else: Category> = Else;
}

/// Primary category marker.
pub trait Category: 'static {
    const KIND: Kind;

    type Void: Branch;
    type NullPointer: Branch;
    type Integral: Branch;
    type FloatingPoint: Branch;
    type Array: Branch;
    type Enum: Branch;
    type Union: Branch;
    type Class: Branch;
    type Function: Branch;
    type Pointer: Branch;
    type LvalueReference: Branch;
    type RvalueReference: Branch;
    type MemberObjectPointer: Branch;
    type MemberFunctionPointer: Branch;
}

macro_rules! define_kinds {
    ($($(#[$meta:meta])* $marker:ident => $variant:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl Category for $marker {
                const KIND: Kind = Kind::$variant;

                type Void = BoolConstant<{ matches!(Kind::$variant, Kind::Void) }>;
                type NullPointer = BoolConstant<{ matches!(Kind::$variant, Kind::NullPointer) }>;
                type Integral = BoolConstant<{ matches!(Kind::$variant, Kind::Integral) }>;
                type FloatingPoint = BoolConstant<{ matches!(Kind::$variant, Kind::FloatingPoint) }>;
                type Array = BoolConstant<{ matches!(Kind::$variant, Kind::Array) }>;
                type Enum = BoolConstant<{ matches!(Kind::$variant, Kind::Enum) }>;
                type Union = BoolConstant<{ matches!(Kind::$variant, Kind::Union) }>;
                type Class = BoolConstant<{ matches!(Kind::$variant, Kind::Class) }>;
                type Function = BoolConstant<{ matches!(Kind::$variant, Kind::Function) }>;
                type Pointer = BoolConstant<{ matches!(Kind::$variant, Kind::Pointer) }>;
                type LvalueReference = BoolConstant<{ matches!(Kind::$variant, Kind::LvalueReference) }>;
                type RvalueReference = BoolConstant<{ matches!(Kind::$variant, Kind::RvalueReference) }>;
                type MemberObjectPointer = BoolConstant<{ matches!(Kind::$variant, Kind::MemberObjectPointer) }>;
                type MemberFunctionPointer = BoolConstant<{ matches!(Kind::$variant, Kind::MemberFunctionPointer) }>;
            }
        )*
    };
}

define_kinds! {
    /// `()`
    VoidKind => Void;
    /// [`NullPtr`](crate::traits::NullPtr)
    NullPointerKind => NullPointer;
    /// Integers, `bool` and `char`.
    IntegralKind => Integral;
    FloatingPointKind => FloatingPoint;
    /// `[T; N]` and `[T]`.
    ArrayKind => Array;
    EnumKind => Enum;
    UnionKind => Union;
    /// Structs, tuples and library types.
    ClassKind => Class;
    /// `fn(..) -> R` pointer types stand in for function types.
    FunctionKind => Function;
    /// `*const T` and `*mut T`.
    PointerKind => Pointer;
    /// `&T`
    LvalueReferenceKind => LvalueReference;
    /// `&mut T`
    RvalueReferenceKind => RvalueReference;
    MemberObjectPointerKind => MemberObjectPointer;
    MemberFunctionPointerKind => MemberFunctionPointer;
}
