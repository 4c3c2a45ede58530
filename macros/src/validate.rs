//! Name-level checks that can be made before any value is known.
//!
//! Each problem becomes a `syn::Error` pointing at the offending constant, and
//! all problems are reported together.

use std::collections::HashMap;

use syn::Ident;

use crate::codegen::types::check_underlying;
use crate::parse::EnumerationInput;

/// Names that declare special slots instead of members.
pub const RESERVED: [&str; 4] = ["_bad", "_default", "_min", "_max"];

pub fn is_reserved(ident: &Ident) -> bool {
    RESERVED.iter().any(|reserved| ident == reserved)
}

pub fn check(input: &EnumerationInput) -> syn::Result<()> {
    let mut errors: Vec<syn::Error> = Vec::new();

    if let Err(err) = check_underlying(&input.underlying) {
        errors.push(err);
    }

    if input.constants.is_empty() {
        errors.push(syn::Error::new(
            input.brace.span.join(),
            format!("enumeration `{}` declares no constants", input.ident),
        ));
    }

    let mut seen: HashMap<String, &Ident> = HashMap::new();
    for constant in &input.constants {
        let name = constant.ident.to_string();
        match seen.get(&name) {
            Some(first) => {
                let message = if is_reserved(&constant.ident) {
                    format!("special slot `{name}` is declared more than once")
                } else {
                    format!("`{name}` is declared more than once")
                };
                let mut err = syn::Error::new(constant.ident.span(), message);
                err.combine(syn::Error::new(first.span(), format!("`{name}` first declared here")));
                errors.push(err);
            }
            None => {
                seen.insert(name, &constant.ident);
            }
        }
    }

    if !input.constants.is_empty()
        && input.constants.iter().all(|constant| is_reserved(&constant.ident))
    {
        errors.push(syn::Error::new(
            input.ident.span(),
            format!(
                "enumeration `{}` declares only special slots and no regular constants",
                input.ident
            ),
        ));
    }

    let mut errors = errors.into_iter();
    match errors.next() {
        None => Ok(()),
        Some(mut first) => {
            for err in errors {
                first.combine(err);
            }
            Err(first)
        }
    }
}
