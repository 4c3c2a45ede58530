// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer types that can back an enumeration.
//!
//! [`Underlying`] is implemented for the fixed-width integers a C-like enum
//! can use. [`Integral`] is the wider view used by validity checks: its
//! `Sign` marker lets the compiler reject a signed argument against an
//! unsigned family (and vice versa) instead of silently reinterpreting it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Sign marker for `i8`..`i64` and `isize`.
#[derive(Debug)]
pub enum Signed {}

/// Sign marker for `u8`..`u64` and `usize`.
#[derive(Debug)]
pub enum Unsigned {}

/// Any supported integer, tagged with its signedness.
pub trait Integral: Copy + sealed::Sealed {
    /// Either [`Signed`] or [`Unsigned`].
    type Sign;

    /// Lossless widening used to compare integers of different widths.
    fn to_i128(self) -> i128;
}

/// An integer type that can back an enumeration family.
pub trait Underlying:
    Integral + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    const ZERO: Self;
    const SIGNED: bool;
    /// Rust spelling of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// `self + 1`, or `None` on overflow.
    fn successor(self) -> Option<Self>;

    /// Narrowing conversion; `None` when `value` does not fit.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_underlying {
    ($sign:ty, $signed:expr => $($ty:ty),+) => {$(
        impl sealed::Sealed for $ty {}

        impl Integral for $ty {
            type Sign = $sign;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }

        impl Underlying for $ty {
            const ZERO: Self = 0;
            const SIGNED: bool = $signed;
            const TYPE_NAME: &'static str = stringify!($ty);

            #[inline]
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn from_i128(value: i128) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )+};
}

impl_underlying!(Signed, true => i8, i16, i32, i64, isize);
impl_underlying!(Unsigned, false => u8, u16, u32, u64, usize);
