//! Parsing of the `enumeration!` input.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, parse_quote, token, Attribute, Expr, Ident, Lit, Meta, Path, Token, Type, Visibility};

/// Everything between the braces of `enumeration! { ... }`.
pub struct EnumerationInput {
    /// Path used to reach the runtime crate from the generated code.
    pub krate: Path,
    /// Outer attributes forwarded to the generated struct.
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub underlying: Type,
    pub brace: token::Brace,
    pub constants: Punctuated<Constant, Token![,]>,
}

/// One declaration inside the braces.
pub struct Constant {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub value: Option<Expr>,
}

impl Constant {
    /// Declaration text as the runtime sees it: `Name` or `Name = <expr>`.
    pub fn text(&self) -> String {
        match &self.value {
            Some(expr) => format!("{} = {}", self.ident, quote::ToTokens::to_token_stream(expr)),
            None => self.ident.to_string(),
        }
    }
}

impl Parse for EnumerationInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut krate: Path = parse_quote!(::enumkit);
        let mut attrs = Vec::new();

        for attr in input.call(Attribute::parse_outer)? {
            if attr.path().is_ident("enumkit") {
                krate = parse_crate_option(&attr)?.unwrap_or(krate);
            } else {
                attrs.push(attr);
            }
        }

        let vis = input.parse()?;
        let ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let underlying = input.parse()?;

        let content;
        let brace = braced!(content in input);
        let constants = content.parse_terminated(Constant::parse, Token![,])?;

        Ok(EnumerationInput {
            krate,
            attrs,
            vis,
            ident,
            underlying,
            brace,
            constants,
        })
    }
}

impl Parse for Constant {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Constant {
            attrs,
            ident,
            value,
        })
    }
}

/// Read `#[enumkit(crate = "path")]`.
fn parse_crate_option(attr: &Attribute) -> syn::Result<Option<Path>> {
    let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
    let mut krate = None;

    for meta in nested {
        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("crate") => match &nv.value {
                Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(lit_str),
                    ..
                }) => krate = Some(lit_str.parse()?),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal, e.g. `crate = \"::enumkit\"`",
                    ))
                }
            },
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "unknown enumkit option, expected `crate = \"path\"`",
                ))
            }
        }
    }

    Ok(krate)
}
