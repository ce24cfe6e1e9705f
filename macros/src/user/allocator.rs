//! `#[allocator]` on `impl Allocator for A<T, ..>`.
//!
//! Only `type Value`, `allocate` and `deallocate` are required. Every
//! other member is probed independently:
//!
//! | Member             | Default when absent                          |
//! |--------------------|----------------------------------------------|
//! | `Pointer`          | `*mut Value`                                 |
//! | `ConstPointer`     | `PointerTraits::RebindConst<Value>` of `Pointer` |
//! | `VoidPointer`      | `PointerTraits::Rebind<()>` of `Pointer`     |
//! | `ConstVoidPointer` | `PointerTraits::RebindConst<()>` of `Pointer`|
//! | `DifferenceType`   | `PointerTraits::DifferenceType` of `Pointer` |
//! | `SizeType`         | `MakeUnsigned<DifferenceType>`               |
//! | `Rebind<U>`        | `A` with its first parameter = `U`           |
//! | `rebind()`         | `Rebind<U>::default()`                       |
//! | consts, methods    | trait defaults                               |
//!
//! Defaults are spelled with the user's own tokens for `Value`, `Pointer`
//! and `DifferenceType`, so no default projects through `Self`.
//!
//! An impl that declares `IS_ALWAYS_EQUAL = false` is stateful, and a
//! default-constructed rebind would lose its state: it must write
//! `rebind` itself or the expansion fails.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Expr, ExprLit, ImplItem, ItemImpl, Lit, Type};

use crate::common::{
    ItemKind, Optional, expect_trait, fill_generic_type, fill_type, find_type, has_item,
    no_type_parameter, record_members, replace_first_type_argument, type_or,
};

const OPTIONALS: &[Optional] = &[
    Optional::ty("Pointer", "POINTER"),
    Optional::ty("ConstPointer", "CONST_POINTER"),
    Optional::ty("VoidPointer", "VOID_POINTER"),
    Optional::ty("ConstVoidPointer", "CONST_VOID_POINTER"),
    Optional::ty("DifferenceType", "DIFFERENCE_TYPE"),
    Optional::ty("SizeType", "SIZE_TYPE"),
    Optional::ty("Rebind", "REBIND"),
    Optional::constant("PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT"),
    Optional::constant("PROPAGATE_ON_CONTAINER_SWAP"),
    Optional::constant("IS_ALWAYS_EQUAL"),
    Optional::method("construct", "CONSTRUCT"),
    Optional::method("destroy", "DESTROY"),
    Optional::method("max_size", "MAX_SIZE"),
    Optional::method("select_on_container_copy_construction", "SELECT_ON_CONTAINER_COPY_CONSTRUCTION"),
    Optional::method("allocate_hint", "ALLOCATE_HINT"),
];

pub fn expand_allocator(mut item: ItemImpl) -> syn::Result<TokenStream> {
    expect_trait(&item, "Allocator")?;

    let value = match find_type(&item, "Value") {
        Some(t) => t.ty.clone(),
        None => {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "an allocator must declare `type Value`",
            ));
        }
    };

    record_members(&mut item, OPTIONALS);

    let traits = quote! { ::tola_meta::ptr::PointerTraits };
    let pointer = type_or(&item, "Pointer", quote! { *mut #value });
    let difference = type_or(
        &item,
        "DifferenceType",
        quote! { <#pointer as #traits>::DifferenceType },
    );

    fill_type(&mut item, "Pointer", pointer.clone());
    fill_type(
        &mut item,
        "ConstPointer",
        quote! { <#pointer as #traits>::RebindConst<#value> },
    );
    fill_type(&mut item, "VoidPointer", quote! { <#pointer as #traits>::Rebind<()> });
    fill_type(
        &mut item,
        "ConstVoidPointer",
        quote! { <#pointer as #traits>::RebindConst<()> },
    );
    fill_type(&mut item, "DifferenceType", difference.clone());
    fill_type(
        &mut item,
        "SizeType",
        quote! { <#difference as ::tola_meta::traits::SignModifiers>::Unsigned },
    );

    if !has_item(&item, "Rebind", ItemKind::Type) {
        let self_ty: Type = (*item.self_ty).clone();
        let other = format_ident!("__Other");
        let rebound = replace_first_type_argument(&self_ty, syn::parse_quote! { #other })
            .ok_or_else(|| no_type_parameter(&self_ty, "Rebind"))?;
        fill_generic_type(&mut item, "Rebind", &other, quote! { #rebound });
    }

    if !has_item(&item, "rebind", ItemKind::Fn) {
        if let Some(span) = declared_unequal(&item) {
            return Err(syn::Error::new(
                span,
                "an allocator with `IS_ALWAYS_EQUAL = false` is stateful; \
                 write `fn rebind` so the rebound allocator shares its state",
            ));
        }
        let other = format_ident!("__Other");
        item.items.push(syn::parse_quote! {
            #[inline]
            fn rebind<#other>(&self) -> <Self as ::tola_meta::allocator::Allocator>::Rebind<#other> {
                ::core::default::Default::default()
            }
        });
    }

    Ok(quote! { #item })
}

/// Span of `const IS_ALWAYS_EQUAL: bool = false;` if the impl declares it.
fn declared_unequal(item: &ItemImpl) -> Option<proc_macro2::Span> {
    item.items.iter().find_map(|i| match i {
        ImplItem::Const(c) if c.ident == "IS_ALWAYS_EQUAL" => match &c.expr {
            Expr::Lit(ExprLit {
                lit: Lit::Bool(b), ..
            }) if !b.value => Some(b.span),
            _ => None,
        },
        _ => None,
    })
}
