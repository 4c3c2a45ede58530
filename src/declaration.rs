// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Declaration table construction.
//!
//! A front-end hands over an ordered list of declarations. Each carries the
//! raw text it was written as (`"Red"`, `"Green = 3"`) and, optionally, an
//! already-evaluated value. Building the table resolves auto values:
//!
//! ```text
//! Red          -> 0        (first auto value is zero)
//! Green = 3    -> 3
//! Blue         -> 4        (previous + 1)
//! ```
//!
//! The raw text is kept as-is. Canonical names are derived from it on
//! demand with [`canonical_name`], which is what lets `"Green = 3"` and
//! `"Green"` name the same constant.

use std::borrow::Cow;

use crate::contracts::check_table_aligned;
use crate::error::DefinitionError;
use crate::underlying::Underlying;

/// Characters that end the name part of a declaration's text.
pub const NAME_ENDERS: &[char] = &['=', ' ', '\t', '\n'];

/// The identifier part of a declaration's text.
///
/// Everything from the first [`NAME_ENDERS`] character onward is dropped.
#[inline]
pub fn canonical_name(text: &str) -> &str {
    match text.find(NAME_ENDERS) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// One raw entry of a declaration list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<U> {
    text: Cow<'static, str>,
    value: Option<U>,
}

impl<U: Underlying> Declaration<U> {
    /// A declaration whose value is one more than its predecessor's.
    pub fn auto(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            value: None,
        }
    }

    /// A declaration with an explicit value.
    pub fn explicit(text: impl Into<Cow<'static, str>>, value: U) -> Self {
        Self {
            text: text.into(),
            value: Some(value),
        }
    }

    /// Parse `NAME` or `NAME = INT`.
    ///
    /// `INT` may be negative and may use a `0x`, `0o` or `0b` prefix and `_`
    /// separators. The stored text is the trimmed input, so its canonical
    /// name is `NAME`.
    pub fn parse(text: &str) -> Result<Self, DefinitionError> {
        let text = text.trim();
        let parse_error = |reason| DefinitionError::Parse {
            text: text.to_string(),
            reason,
        };

        let (name, literal) = match text.split_once('=') {
            Some((name, literal)) => (name.trim_end(), Some(literal.trim())),
            None => (text, None),
        };

        if !is_identifier(name) {
            return Err(parse_error("name is not an identifier"));
        }

        let value = match literal {
            None => None,
            Some("") => return Err(parse_error("missing value after `=`")),
            Some(literal) => {
                let wide = parse_int(literal).ok_or_else(|| parse_error("value is not an integer"))?;
                let value = U::from_i128(wide).ok_or_else(|| DefinitionError::OutOfRange {
                    name: name.to_string(),
                    literal: literal.to_string(),
                    ty: U::TYPE_NAME,
                })?;
                Some(value)
            }
        };

        Ok(Self {
            text: Cow::Owned(text.to_string()),
            value,
        })
    }

    /// The text as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        canonical_name(&self.text)
    }

    /// The explicit value, or `None` for an auto declaration.
    pub fn value(&self) -> Option<U> {
        self.value
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

fn parse_int(literal: &str) -> Option<i128> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, literal),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits),
    };

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(&cleaned, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Index-aligned declaration texts and resolved values.
#[derive(Debug, Clone)]
pub struct DeclarationTable<U> {
    texts: Vec<Cow<'static, str>>,
    values: Vec<U>,
}

impl<U: Underlying> DeclarationTable<U> {
    /// Resolve auto values in declaration order.
    pub fn build(declarations: Vec<Declaration<U>>) -> Result<Self, DefinitionError> {
        if declarations.is_empty() {
            return Err(DefinitionError::NoConstants);
        }

        let mut texts = Vec::with_capacity(declarations.len());
        let mut values: Vec<U> = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            let value = match (declaration.value, values.last()) {
                (Some(value), _) => value,
                (None, None) => U::ZERO,
                (None, Some(&previous)) => {
                    previous.successor().ok_or_else(|| DefinitionError::Overflow {
                        previous: texts
                            .last()
                            .map(|text: &Cow<'static, str>| canonical_name(text).to_string())
                            .unwrap_or_default(),
                        ty: U::TYPE_NAME,
                    })?
                }
            };
            texts.push(declaration.text);
            values.push(value);
        }

        Ok(Self { texts, values })
    }

    /// Wrap texts and values that a front-end has already resolved.
    pub fn from_resolved(
        texts: Vec<Cow<'static, str>>,
        values: Vec<U>,
    ) -> Result<Self, DefinitionError> {
        if texts.len() != values.len() {
            return Err(DefinitionError::Misaligned {
                names: texts.len(),
                values: values.len(),
            });
        }
        if texts.is_empty() {
            return Err(DefinitionError::NoConstants);
        }
        Ok(Self { texts, values })
    }

    /// Number of declarations, special ones included.
    pub fn len(&self) -> usize {
        check_table_aligned(self.texts.len(), self.values.len());
        self.values.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn texts(&self) -> &[Cow<'static, str>] {
        &self.texts
    }

    pub fn values(&self) -> &[U] {
        &self.values
    }

    #[inline]
    pub fn value(&self, index: usize) -> U {
        self.values[index]
    }

    /// Canonical name of entry `index`, borrowed from its text.
    #[inline]
    pub fn name(&self, index: usize) -> &str {
        canonical_name(&self.texts[index])
    }
}
