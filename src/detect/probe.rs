//! # Impl probes
//!
//! ## `has_impl!`
//!
//! For detecting arbitrary traits on concrete types:
//!
//! ```
//! use tola_meta::has_impl;
//!
//! trait MyTrait {}
//! impl MyTrait for i32 {}
//!
//! assert!(has_impl!(i32, MyTrait));
//! assert!(!has_impl!(String, MyTrait));
//! ```

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied. An unsatisfied bound is not
/// an error, it just leaves the fallback visible.
///
/// **Note**: Only works for concrete types. In a generic context the bound
/// is checked against the generic parameter, not the caller's type.
///
/// ```
/// use tola_meta::has_impl;
///
/// assert!(has_impl!(String, Clone));
/// assert!(!has_impl!(String, Copy));
/// assert!(has_impl!(u8, Into<u32>));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        <__Probe<$T>>::VAL
    }};
}
