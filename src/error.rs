// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two families of failure exist and they never mix:
//!
//! - [`DefinitionError`]: the declaration list does not describe a usable
//!   enumeration. Raised while a [`Family`](crate::Family) is being built;
//!   a family that fails here never exists.
//! - [`LookupError`]: a name or value query had no answer. Always
//!   recoverable, and distinguishable from every valid result.

use thiserror::Error;

/// A declaration list that cannot become a family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The declaration list was empty.
    #[error("no constants defined")]
    NoConstants,

    /// Every declaration used a reserved name.
    #[error("no regular constants defined (only reserved names were declared)")]
    NoRegularConstants,

    /// A reserved name (`_bad`, `_default`, `_min`, `_max`) appeared twice.
    #[error("reserved name `{name}` declared at indices {first} and {second}")]
    DuplicateSpecial {
        name: &'static str,
        first: usize,
        second: usize,
    },

    /// Two regular constants share a canonical name.
    #[error("constant `{name}` declared at indices {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// An auto-incremented value ran past the end of the underlying type.
    #[error("auto-incremented value after `{previous}` overflows {ty}")]
    Overflow { previous: String, ty: &'static str },

    /// An explicit value does not fit the underlying type.
    #[error("value {literal} of `{name}` does not fit in {ty}")]
    OutOfRange {
        name: String,
        literal: String,
        ty: &'static str,
    },

    /// The `_min`/`_max` overrides describe an empty interval.
    #[error("range minimum {min} is greater than maximum {max}")]
    InvertedRange { min: i128, max: i128 },

    /// A textual declaration could not be parsed.
    #[error("cannot parse declaration `{text}`: {reason}")]
    Parse { text: String, reason: &'static str },

    /// Name and value arrays handed to the builder disagree in length.
    #[error("declaration table misaligned: {names} names for {values} values")]
    Misaligned { names: usize, values: usize },
}

/// A name or value query with no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No valid constant carries the requested name.
    #[error("no valid constant named `{name}`")]
    NotFound { name: String },

    /// The value is not among the declared values.
    #[error("invalid enum value {value}")]
    InvalidValue { value: i128 },
}
