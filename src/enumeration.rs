// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The trait implemented by generated enumeration types.
//!
//! `enumeration!` emits a newtype over the underlying integer plus an
//! implementation of [`Enumeration`]. The generated type also gets inherent
//! methods with the same names, so callers do not need this trait in scope.
//!
//! Generated types compare only with themselves. There are no arithmetic or
//! bitwise operators, no comparison against bare integers, and no comparison
//! across families:
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear } }
//! enumkit::enumeration! { Metal: u8 { Iron, Gold } }
//! assert!(Fruit::Apple == Metal::Iron);
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear } }
//! assert!(Fruit::Apple < 1u8);
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear } }
//! let _ = Fruit::Apple + Fruit::Pear;
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear } }
//! let _ = !Fruit::Apple;
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear } }
//! Fruit::is_valid_value(-1i64);
//! ```
//!
//! Malformed declaration lists are rejected when the macro expands, or when
//! the compiler evaluates the values:
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple, Pear, Apple } }
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { _bad = 0, _default = 1 } }
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: f32 { Apple, Pear } }
//! ```
//!
//! ```compile_fail
//! enumkit::enumeration! { Fruit: u8 { Apple = 255, Pear } }
//! let _ = Fruit::Pear;
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::LookupError;
use crate::family::Family;
use crate::iter::{EnumValues, Names};
use crate::underlying::{Integral, Underlying};

/// A generated enumeration type.
pub trait Enumeration: Copy + Ord + Hash + Debug + 'static {
    type Underlying: Underlying;

    /// The shared model of this type, built on first use.
    fn family() -> &'static Family<Self::Underlying>;

    /// Wrap a raw value without checking that it is valid.
    fn from_integral_unchecked(value: Self::Underlying) -> Self;

    fn to_integral(self) -> Self::Underlying;

    /// Wrap a raw value, accepting only valid values.
    fn from_integral(value: Self::Underlying) -> Result<Self, LookupError> {
        if Self::family().is_valid_value(value) {
            Ok(Self::from_integral_unchecked(value))
        } else {
            Err(LookupError::InvalidValue {
                value: value.to_i128(),
            })
        }
    }

    fn values() -> EnumValues<Self> {
        EnumValues::new()
    }

    fn names() -> Names<'static, Self::Underlying> {
        Self::family().names()
    }

    fn size() -> usize {
        Self::family().size()
    }

    fn find(name: &str) -> Result<Self, LookupError> {
        Self::family().find(name).map(Self::from_integral_unchecked)
    }

    fn case_find(name: &str) -> Result<Self, LookupError> {
        Self::family()
            .case_find(name)
            .map(Self::from_integral_unchecked)
    }

    fn desc(self) -> Result<&'static str, LookupError> {
        Self::family().desc(self.to_integral())
    }

    fn is_valid_name(name: &str) -> bool {
        Self::family().is_valid_name(name)
    }

    fn is_valid_name_ignore_case(name: &str) -> bool {
        Self::family().is_valid_name_ignore_case(name)
    }

    fn is_valid_value<V>(value: V) -> bool
    where
        V: Integral<Sign = <Self::Underlying as Integral>::Sign>,
    {
        Self::family().is_valid_value(value)
    }

    /// Whether `self` holds a valid member's value.
    fn is_valid(self) -> bool {
        Self::family().is_valid_value(self.to_integral())
    }

    fn min_value() -> Self {
        Self::from_integral_unchecked(Self::family().min_value())
    }

    fn max_value() -> Self {
        Self::from_integral_unchecked(Self::family().max_value())
    }

    /// `_default` if declared, otherwise the first valid member.
    fn default_value() -> Self {
        Self::from_integral_unchecked(Self::family().default_value())
    }
}
