//! `#[deleter]` on `impl Deleter<T> for D`.
//!
//! Fills `type Pointer = *mut T` unless the deleter names its own handle type.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, ItemImpl, PathArguments};

use crate::common::{Optional, expect_trait, fill_type, record_members};

const OPTIONALS: &[Optional] = &[Optional::ty("Pointer", "POINTER")];

pub fn expand_deleter(mut item: ItemImpl) -> syn::Result<TokenStream> {
    let path = expect_trait(&item, "Deleter")?;

    let element = path.segments.last().and_then(|seg| match &seg.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(t) => Some(t.clone()),
            _ => None,
        }),
        _ => None,
    });
    let Some(element) = element else {
        return Err(syn::Error::new_spanned(
            path,
            "expected `Deleter<T>` naming the element type",
        ));
    };

    record_members(&mut item, OPTIONALS);
    fill_type(&mut item, "Pointer", quote! { *mut #element });

    Ok(quote! { #item })
}
