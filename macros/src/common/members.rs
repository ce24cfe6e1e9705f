//! Optional-member probing for impl blocks.
//!
//! Each optional member is probed independently by name. A member that
//! is present is left untouched; the caller fills absent associated types
//! with its default and the trait's own default items cover consts and
//! methods. The probe never looks at the member's definition, so a member
//! whose type is a reference or a function is handled like any other.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ImplItem, ImplItemType, ItemImpl, Type};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemKind {
    Type,
    Const,
    Fn,
}

/// An optional member and the `MemberSet` flag recording it.
#[derive(Clone, Copy, Debug)]
pub struct Optional {
    pub name: &'static str,
    pub kind: ItemKind,
    pub flag: &'static str,
}

impl Optional {
    pub const fn ty(name: &'static str, flag: &'static str) -> Self {
        Self { name, kind: ItemKind::Type, flag }
    }

    pub const fn constant(name: &'static str) -> Self {
        Self { name, kind: ItemKind::Const, flag: name }
    }

    pub const fn method(name: &'static str, flag: &'static str) -> Self {
        Self { name, kind: ItemKind::Fn, flag }
    }
}

/// Whether the impl block defines `name` as an item of the given kind.
pub fn has_item(item: &ItemImpl, name: &str, kind: ItemKind) -> bool {
    item.items.iter().any(|i| match (i, kind) {
        (ImplItem::Type(t), ItemKind::Type) => t.ident == name,
        (ImplItem::Const(c), ItemKind::Const) => c.ident == name,
        (ImplItem::Fn(f), ItemKind::Fn) => f.sig.ident == name,
        _ => false,
    })
}

/// The associated type `name`, if the impl block defines it.
pub fn find_type<'a>(item: &'a ItemImpl, name: &str) -> Option<&'a ImplItemType> {
    item.items.iter().find_map(|i| match i {
        ImplItem::Type(t) if t.ident == name => Some(t),
        _ => None,
    })
}

/// The right-hand side of `type name = ..;` or the given default.
pub fn type_or(item: &ItemImpl, name: &str, default: TokenStream) -> TokenStream {
    match find_type(item, name) {
        Some(t) => {
            let ty: &Type = &t.ty;
            quote! { #ty }
        }
        None => default,
    }
}

/// Append `type name = value;` unless the impl already defines `name`.
pub fn fill_type(item: &mut ItemImpl, name: &str, value: TokenStream) {
    if has_item(item, name, ItemKind::Type) {
        return;
    }
    let ident = format_ident!("{}", name);
    item.items.push(syn::parse_quote! { type #ident = #value; });
}

/// Append `type name<param> = value;` unless the impl already defines `name`.
pub fn fill_generic_type(item: &mut ItemImpl, name: &str, param: &syn::Ident, value: TokenStream) {
    if has_item(item, name, ItemKind::Type) {
        return;
    }
    let ident = format_ident!("{}", name);
    item.items.push(syn::parse_quote! { type #ident<#param> = #value; });
}

/// Append the `MEMBERS` descriptor listing every optional member present
/// in the impl as written. A hand-written `MEMBERS` is kept.
pub fn record_members(item: &mut ItemImpl, optionals: &[Optional]) {
    if has_item(item, "MEMBERS", ItemKind::Const) {
        return;
    }
    let flags: Vec<_> = optionals
        .iter()
        .filter(|o| has_item(item, o.name, o.kind))
        .map(|o| format_ident!("{}", o.flag))
        .collect();

    item.items.push(syn::parse_quote! {
        const MEMBERS: ::tola_meta::detect::MemberSet = ::tola_meta::detect::MemberSet::empty()
            #(.union(::tola_meta::detect::MemberSet::#flags))*;
    });
}

/// Ensure the attribute sits on an impl of the expected trait.
pub fn expect_trait<'a>(item: &'a ItemImpl, expected: &str) -> syn::Result<&'a syn::Path> {
    match &item.trait_ {
        Some((None, path, _)) if path.segments.last().is_some_and(|s| s.ident == expected) => {
            Ok(path)
        }
        _ => Err(syn::Error::new_spanned(
            &item.self_ty,
            format!("expected an `impl {expected} for ..` block"),
        )),
    }
}
