//! `TypeInfo` for primitives, tuples and library types.

use crate::traits::{ClassKind, TypeInfo};

macros::impl_core_type_info!();

#[cfg(feature = "alloc")]
macros::impl_alloc_type_info!();

#[cfg(feature = "std")]
macros::impl_std_type_info!();

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> TypeInfo for ($($name,)+) {
            crate::__plain_type_info!(ClassKind);
        }
    };
}

impl_tuple!(A0);
impl_tuple!(A0, A1);
impl_tuple!(A0, A1, A2);
impl_tuple!(A0, A1, A2, A3);
impl_tuple!(A0, A1, A2, A3, A4);
impl_tuple!(A0, A1, A2, A3, A4, A5);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
