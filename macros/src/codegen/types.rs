//! Underlying type checks.
//!
//! Only the built-in integer types can carry an enumeration.

use syn::spanned::Spanned;
use syn::Type;

/// Integer types accepted as the underlying type.
///
/// | Signed | Unsigned |
/// |--------|----------|
/// | `i8`, `i16`, `i32`, `i64`, `isize` | `u8`, `u16`, `u32`, `u64`, `usize` |
pub const INTEGER_TYPES: [&str; 10] = [
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Name of the integer type `ty` spells, if it is one.
///
/// Accepts the bare name as well as `core::primitive::u8` and
/// `std::primitive::u8`.
pub fn integer_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segments = &type_path.path.segments;
            let last = segments.last()?;
            if !last.arguments.is_empty() {
                return None;
            }

            let prefix: Vec<String> = segments
                .iter()
                .take(segments.len() - 1)
                .map(|seg| seg.ident.to_string())
                .collect();
            let qualified = match prefix.as_slice() {
                [] => true,
                [root, module] => (root == "core" || root == "std") && module == "primitive",
                _ => false,
            };

            let ident = last.ident.to_string();
            (qualified && INTEGER_TYPES.contains(&ident.as_str())).then_some(ident)
        }
        Type::Group(group) => integer_type_name(&group.elem),
        Type::Paren(paren) => integer_type_name(&paren.elem),
        _ => None,
    }
}

/// Reject anything that is not a built-in integer type.
pub fn check_underlying(ty: &Type) -> syn::Result<()> {
    match integer_type_name(ty) {
        Some(_) => Ok(()),
        None => Err(syn::Error::new(
            ty.span(),
            format!(
                "unsupported underlying type `{}`; expected one of {}",
                quote::ToTokens::to_token_stream(ty),
                INTEGER_TYPES.join(", ")
            ),
        )),
    }
}
