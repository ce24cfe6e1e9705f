//! `#[pointer_like]` on `impl PointerTraits for P<T, ..>`.
//!
//! | Member           | Default                              |
//! |------------------|--------------------------------------|
//! | `ElementType`    | first type parameter of `P`          |
//! | `DifferenceType` | `isize`                              |
//! | `Rebind<U>`      | `P` with its first parameter = `U`   |
//! | `RebindConst<U>` | `Rebind<Const<U>>`                   |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemImpl, Type};

use crate::common::{
    Optional, fill_generic_type, fill_type, first_type_argument, has_item, no_type_parameter,
    record_members, replace_first_type_argument, expect_trait, ItemKind,
};

const OPTIONALS: &[Optional] = &[
    Optional::ty("ElementType", "ELEMENT_TYPE"),
    Optional::ty("DifferenceType", "DIFFERENCE_TYPE"),
    Optional::ty("Rebind", "REBIND"),
    Optional::ty("RebindConst", "REBIND_CONST"),
];

pub fn expand_pointer_like(mut item: ItemImpl) -> syn::Result<TokenStream> {
    expect_trait(&item, "PointerTraits")?;
    record_members(&mut item, OPTIONALS);

    let self_ty: Type = (*item.self_ty).clone();
    let other = format_ident!("__Other");

    if !has_item(&item, "ElementType", ItemKind::Type) {
        let first = first_type_argument(&self_ty)
            .ok_or_else(|| no_type_parameter(&self_ty, "ElementType"))?
            .clone();
        fill_type(&mut item, "ElementType", quote! { #first });
    }

    fill_type(&mut item, "DifferenceType", quote! { isize });

    if !has_item(&item, "Rebind", ItemKind::Type) {
        let rebound = replace_first_type_argument(&self_ty, syn::parse_quote! { #other })
            .ok_or_else(|| no_type_parameter(&self_ty, "Rebind"))?;
        fill_generic_type(&mut item, "Rebind", &other, quote! { #rebound });
    }

    fill_generic_type(
        &mut item,
        "RebindConst",
        &other,
        quote! {
            <Self as ::tola_meta::ptr::PointerTraits>::Rebind<::tola_meta::traits::Const<#other>>
        },
    );

    Ok(quote! { #item })
}
