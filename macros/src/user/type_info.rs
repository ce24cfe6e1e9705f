//! `#[derive(TypeInfo)]`
//!
//! | Input  | Category    |
//! |--------|-------------|
//! | struct | `ClassKind` |
//! | enum   | `EnumKind`  |
//! | union  | `UnionKind` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

/// Expand `#[derive(TypeInfo)]`.
///
/// ```ignore
/// #[derive(TypeInfo)]
/// struct Node<T> { value: T }
/// // impl<T> TypeInfo for Node<T> { __plain_type_info!(ClassKind); }
/// ```
pub fn expand_derive_type_info(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let category = match &input.data {
        Data::Struct(_) => quote! { ::tola_meta::traits::ClassKind },
        Data::Enum(_) => quote! { ::tola_meta::traits::EnumKind },
        Data::Union(_) => quote! { ::tola_meta::traits::UnionKind },
    };

    quote! {
        impl #impl_generics ::tola_meta::traits::TypeInfo for #name #ty_generics #where_clause {
            ::tola_meta::__plain_type_info!(#category);
        }
    }
}
