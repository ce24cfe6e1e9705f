//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait. These are the `true_type` /
//! `false_type` results every predicate in [`crate::traits`] produces.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: `If<Then, Else>` (general type selector).
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;

    /// Type-level boolean conditional whose result is guaranteed to be `Bool`.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then: ?Sized, Else: ?Sized> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then: ?Sized, Else: ?Sized> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// `integral_constant<bool, B>`: the `Bool` for a const.
pub type BoolConstant<const B: bool> = <() as SelectBool<B>>::Out;

/// `conditional_t<B, T, F>`.
pub type Conditional<const B: bool, T, F> = <BoolConstant<B> as Bool>::If<T, F>;

/// Strict conditional (result is `Bool`).
pub type Elif<const C: bool, T, E> = <BoolConstant<C> as Bool>::Elif<T, E>;

/// `enable_if`: only `True` carries a result type.
///
/// ```compile_fail
/// use tola_meta::primitives::{EnableIfT, False};
/// let _: EnableIfT<False, u8> = 0;
/// ```
pub trait EnableIf<T: ?Sized> {
    type Out: ?Sized;
}

impl<T: ?Sized> EnableIf<T> for True {
    type Out = T;
}

/// `enable_if_t<B, T>`.
pub type EnableIfT<B, T = ()> = <B as EnableIf<T>>::Out;

// =============================================================================
// Variadic logic over tuples of Bool
// =============================================================================

/// `conjunction<B...>`: AND over a tuple of `Bool`. The empty tuple is `True`.
pub trait Conjunction {
    type Out: Bool;
}

/// `disjunction<B...>`: OR over a tuple of `Bool`. The empty tuple is `False`.
pub trait Disjunction {
    type Out: Bool;
}

/// `negation<B>`.
pub type Negation<B> = <B as Bool>::Not;

impl Conjunction for () {
    type Out = True;
}

impl Disjunction for () {
    type Out = False;
}

macro_rules! impl_variadic_logic {
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Bool $(, $tail: Bool)*> Conjunction for ($head, $($tail,)*) {
            type Out = <$head as Bool>::And<<($($tail,)*) as Conjunction>::Out>;
        }

        impl<$head: Bool $(, $tail: Bool)*> Disjunction for ($head, $($tail,)*) {
            type Out = <$head as Bool>::Or<<($($tail,)*) as Disjunction>::Out>;
        }

        impl_variadic_logic!($($tail),*);
    };
    () => {};
}

impl_variadic_logic!(B0, B1, B2, B3, B4, B5, B6, B7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_logic() {
        assert!(<BoolConstant<true> as Bool>::VALUE);
        assert!(!<BoolConstant<false> as Bool>::VALUE);
        assert!(!<<True as Bool>::And<False> as Bool>::VALUE);
        assert!(<<False as Bool>::Or<True> as Bool>::VALUE);
        assert!(<Negation<False> as Bool>::VALUE);
    }

    #[test]
    fn test_variadic() {
        assert!(<<() as Conjunction>::Out as Bool>::VALUE);
        assert!(!<<() as Disjunction>::Out as Bool>::VALUE);
        assert!(<<(True, True, True) as Conjunction>::Out as Bool>::VALUE);
        assert!(!<<(True, False, True) as Conjunction>::Out as Bool>::VALUE);
        assert!(<<(False, False, True) as Disjunction>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_conditional_selects_type() {
        let picked: Conditional<true, u8, &str> = 7u8;
        let other: Conditional<false, u8, &str> = "seven";
        assert_eq!(picked, 7);
        assert_eq!(other, "seven");
        let enabled: EnableIfT<True, u16> = 3;
        assert_eq!(enabled, 3);
    }
}
