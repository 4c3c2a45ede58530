// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `enumeration!` procedural macro.
//!
//! Write the declaration list once and the macro emits a closed newtype over
//! the underlying integer, one associated constant per declaration, and the
//! glue that hands the declarations to `enumkit::Family` on first use.
//!
//! # How it works
//!
//! 1. **Parsing**: the input is read into an [`EnumerationInput`](parse::EnumerationInput)
//! 2. **Validation**: name-level mistakes (empty lists, repeated names,
//!    repeated reserved names, no regular constant) become spanned compile
//!    errors
//! 3. **Expansion**: values are computed in a `const` block, so auto-increment
//!    overflow and out-of-range literals fail compilation as well
//!
//! Value-level checks that need the resolved values (an inverted
//! `_min`/`_max` pair) run when the family is first built.
//!
//! # Example
//!
//! ```ignore
//! enumkit::enumeration! {
//!     #[enumkit(crate = "::enumkit")]
//!     pub Channel: u8 {
//!         Red,
//!         Green = 4,
//!         Blue,
//!         _bad = 255,
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod codegen;
mod parse;
mod validate;

/// Define an enumeration type.
///
/// # Syntax
///
/// ```text
/// enumeration! {
///     #[enumkit(crate = "path")]   // optional, defaults to ::enumkit
///     #[outer attributes]          // forwarded to the generated struct
///     VIS Name: INTEGER_TYPE {
///         #[attributes] CONSTANT,           // next value after the previous one
///         #[attributes] CONSTANT = EXPR,    // explicit value
///         ...
///     }
/// }
/// ```
///
/// The reserved names `_bad`, `_default`, `_min` and `_max` declare special
/// slots instead of members.
#[proc_macro]
pub fn enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as parse::EnumerationInput);
    match validate::check(&input) {
        Ok(()) => codegen::expand(&input).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
