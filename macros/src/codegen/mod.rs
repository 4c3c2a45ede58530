// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expansion of a validated `enumeration!` input.
//!
//! # Generated items
//!
//! | Item | Purpose |
//! |------|---------|
//! | `struct Name { value: T }` | closed newtype, compares only with itself |
//! | `Name::__ENUMKIT_VALUES` | resolved values, computed at compile time |
//! | `Name::__ENUMKIT_TEXTS` | declaration texts handed to the runtime |
//! | `Name::CONSTANT` | one associated constant per declaration |
//! | `impl Enumeration` | family access plus raw conversions |
//! | inherent methods | the reflection surface without importing the trait |
//! | `Debug`, `Display`, `Default`, `FromStr`, `TryFrom<T>`, `From<Name> for T` | std glue |

pub mod types;

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::EnumerationInput;

pub fn expand(input: &EnumerationInput) -> TokenStream {
    let definition = expand_definition(input);
    let trait_impl = expand_trait_impl(input);
    let inherent = expand_inherent(input);
    let std_impls = expand_std_impls(input);

    quote! {
        #definition
        #trait_impl
        #inherent
        #std_impls
    }
}

/// The struct, the hidden tables, and the declared constants.
fn expand_definition(input: &EnumerationInput) -> TokenStream {
    let EnumerationInput {
        attrs,
        vis,
        ident,
        underlying: ty,
        constants,
        ..
    } = input;
    let count = constants.len();

    // Auto values follow the previous declaration, so overflow is a const
    // evaluation error at the declaration site. Each resolved value is also
    // bound to a local named after its constant, so later expressions such
    // as `B = A` can refer to it.
    let assignments = constants.iter().enumerate().map(|(index, constant)| {
        let name = &constant.ident;
        let assign = match (&constant.value, index) {
            (Some(expr), _) => quote! { __enumkit_values[#index] = #expr; },
            (None, 0) => quote! { __enumkit_values[0] = 0; },
            (None, _) => {
                let previous = index - 1;
                quote! { __enumkit_values[#index] = __enumkit_values[#previous] + 1; }
            }
        };
        quote! {
            #assign
            #[allow(non_snake_case, unused_variables)]
            let #name: #ty = __enumkit_values[#index];
        }
    });

    let texts = constants.iter().map(|constant| constant.text());

    let declared = constants.iter().enumerate().map(|(index, constant)| {
        let const_attrs = &constant.attrs;
        let name = &constant.ident;
        quote! {
            #(#const_attrs)*
            #vis const #name: Self = Self {
                value: Self::__ENUMKIT_VALUES[#index],
            };
        }
    });

    quote! {
        #(#attrs)*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        #vis struct #ident {
            value: #ty,
        }

        #[allow(dead_code, non_upper_case_globals)]
        impl #ident {
            #[doc(hidden)]
            const __ENUMKIT_VALUES: [#ty; #count] = {
                let mut __enumkit_values: [#ty; #count] = [0; #count];
                #(#assignments)*
                __enumkit_values
            };

            #[doc(hidden)]
            const __ENUMKIT_TEXTS: [&'static str; #count] = [#(#texts),*];

            #(#declared)*
        }
    }
}

fn expand_trait_impl(input: &EnumerationInput) -> TokenStream {
    let EnumerationInput {
        krate,
        ident,
        underlying: ty,
        ..
    } = input;
    let family_name = ident.to_string();

    quote! {
        impl #krate::Enumeration for #ident {
            type Underlying = #ty;

            fn family() -> &'static #krate::Family<#ty> {
                static FAMILY: #krate::__private::LazyLock<#krate::Family<#ty>> =
                    #krate::__private::LazyLock::new(|| {
                        #krate::Family::define(
                            #family_name,
                            &#ident::__ENUMKIT_TEXTS,
                            &#ident::__ENUMKIT_VALUES,
                        )
                    });
                &FAMILY
            }

            #[inline]
            fn from_integral_unchecked(value: #ty) -> Self {
                Self { value }
            }

            #[inline]
            fn to_integral(self) -> #ty {
                self.value
            }
        }
    }
}

/// Forwarders so callers do not need `Enumeration` in scope.
fn expand_inherent(input: &EnumerationInput) -> TokenStream {
    let EnumerationInput {
        krate,
        vis,
        ident,
        underlying: ty,
        ..
    } = input;
    let result = quote!(::core::result::Result);

    quote! {
        #[allow(dead_code)]
        impl #ident {
            /// The valid members, in declaration order.
            #vis fn values() -> #krate::EnumValues<Self> {
                <Self as #krate::Enumeration>::values()
            }

            /// The canonical names of the valid members, in declaration order.
            #vis fn names() -> #krate::Names<'static, #ty> {
                <Self as #krate::Enumeration>::names()
            }

            /// Number of valid members.
            #vis fn size() -> usize {
                <Self as #krate::Enumeration>::size()
            }

            /// The valid member named exactly `name`.
            #vis fn find(name: &str) -> #result<Self, #krate::LookupError> {
                <Self as #krate::Enumeration>::find(name)
            }

            /// The valid member whose name matches `name` ignoring ASCII case.
            #vis fn case_find(name: &str) -> #result<Self, #krate::LookupError> {
                <Self as #krate::Enumeration>::case_find(name)
            }

            /// Canonical name of this value.
            #vis fn desc(self) -> #result<&'static str, #krate::LookupError> {
                <Self as #krate::Enumeration>::desc(self)
            }

            #vis fn is_valid_name(name: &str) -> bool {
                <Self as #krate::Enumeration>::is_valid_name(name)
            }

            #vis fn is_valid_name_ignore_case(name: &str) -> bool {
                <Self as #krate::Enumeration>::is_valid_name_ignore_case(name)
            }

            /// Whether `value` is a valid member's value. `V` must share the
            /// signedness of the underlying type.
            #vis fn is_valid_value<V>(value: V) -> bool
            where
                V: #krate::Integral<Sign = <#ty as #krate::Integral>::Sign>,
            {
                <Self as #krate::Enumeration>::is_valid_value(value)
            }

            #vis fn is_valid(self) -> bool {
                <Self as #krate::Enumeration>::is_valid(self)
            }

            #vis fn min_value() -> Self {
                <Self as #krate::Enumeration>::min_value()
            }

            #vis fn max_value() -> Self {
                <Self as #krate::Enumeration>::max_value()
            }

            #vis const fn to_integral(self) -> #ty {
                self.value
            }

            #vis fn from_integral(value: #ty) -> #result<Self, #krate::LookupError> {
                <Self as #krate::Enumeration>::from_integral(value)
            }

            /// Wrap `value` without checking it. The result may be invalid.
            #vis const fn from_integral_unchecked(value: #ty) -> Self {
                Self { value }
            }
        }
    }
}

fn expand_std_impls(input: &EnumerationInput) -> TokenStream {
    let EnumerationInput {
        krate,
        ident,
        underlying: ty,
        ..
    } = input;
    let family_name = ident.to_string();
    let result = quote!(::core::result::Result);

    quote! {
        impl ::core::fmt::Debug for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match <Self as #krate::Enumeration>::desc(*self) {
                    #result::Ok(name) => ::core::write!(f, "{}::{}", #family_name, name),
                    #result::Err(_) => ::core::write!(f, "{}({})", #family_name, self.value),
                }
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match <Self as #krate::Enumeration>::desc(*self) {
                    #result::Ok(name) => f.write_str(name),
                    #result::Err(_) => ::core::fmt::Display::fmt(&self.value, f),
                }
            }
        }

        impl ::core::default::Default for #ident {
            fn default() -> Self {
                <Self as #krate::Enumeration>::default_value()
            }
        }

        impl ::core::str::FromStr for #ident {
            type Err = #krate::LookupError;

            fn from_str(name: &str) -> #result<Self, Self::Err> {
                <Self as #krate::Enumeration>::find(name)
            }
        }

        impl ::core::convert::TryFrom<#ty> for #ident {
            type Error = #krate::LookupError;

            fn try_from(value: #ty) -> #result<Self, Self::Error> {
                <Self as #krate::Enumeration>::from_integral(value)
            }
        }

        impl ::core::convert::From<#ident> for #ty {
            fn from(value: #ident) -> #ty {
                value.value
            }
        }
    }
}
