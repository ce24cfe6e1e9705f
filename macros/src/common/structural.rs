//! The structural rule: a generic type's first type parameter is its
//! element type, and rebinding replaces exactly that parameter.
//!
//! ```text
//! Fancy<'a, T, Arena, 4>  --first-->    T
//! Fancy<'a, T, Arena, 4>  --rebind U--> Fancy<'a, U, Arena, 4>
//! ```

use syn::{GenericArgument, PathArguments, Type, TypePath};

fn last_args(ty: &Type) -> Option<&syn::AngleBracketedGenericArguments> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    match &path.segments.last()?.arguments {
        PathArguments::AngleBracketed(args) => Some(args),
        _ => None,
    }
}

/// First type argument of the outermost generic type. Lifetimes and
/// const arguments are skipped.
pub fn first_type_argument(ty: &Type) -> Option<&Type> {
    last_args(ty)?.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    })
}

/// `ty` with its first type argument replaced by `with`; every other
/// argument is preserved verbatim.
pub fn replace_first_type_argument(ty: &Type, with: Type) -> Option<Type> {
    let mut out = ty.clone();
    let Type::Path(TypePath { qself: None, path }) = &mut out else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &mut path.segments.last_mut()?.arguments else {
        return None;
    };
    let slot = args.args.iter_mut().find_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    })?;
    *slot = with;
    Some(out)
}

/// Error for a `Self` type the structural rule cannot read.
pub fn no_type_parameter(ty: &Type, member: &str) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        format!(
            "cannot infer `{member}`: this type has no type parameter to use as its element; \
             declare `type {member}` explicitly"
        ),
    )
}
