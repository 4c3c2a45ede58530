// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range and validity.
//!
//! The range is the closed interval `[min, max]`. Without overrides it spans
//! the regular constants' values; `_min`/`_max` replace either end. A value
//! is valid when it belongs to a regular constant that lies inside the range
//! and is not the `_bad` sentinel. Being inside the range alone is not
//! enough: gaps between declared values stay invalid.

use crate::declaration::DeclarationTable;
use crate::error::DefinitionError;
use crate::special::{SpecialSlot, SpecialSlots};
use crate::underlying::Underlying;

/// Closed interval of in-range underlying values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<U> {
    pub min: U,
    pub max: U,
}

impl<U: Underlying> Range<U> {
    /// Compute the range of a resolved table.
    ///
    /// Regular constants that share the `_bad` value are left out of the
    /// fold, so the sentinel can never become a bound.
    pub fn compute(
        table: &DeclarationTable<U>,
        slots: &SpecialSlots,
    ) -> Result<Self, DefinitionError> {
        let bad = slots.get(SpecialSlot::Bad).map(|index| table.value(index));
        let counted = slots
            .regular_indices(table.len())
            .filter(|&index| bad != Some(table.value(index)));
        let (min_index, max_index) =
            min_max(table.values(), counted).ok_or(DefinitionError::NoRegularConstants)?;

        let min = slots
            .get(SpecialSlot::MinOverride)
            .map_or(table.value(min_index), |index| table.value(index));
        let max = slots
            .get(SpecialSlot::MaxOverride)
            .map_or(table.value(max_index), |index| table.value(index));

        if min > max {
            return Err(DefinitionError::InvertedRange {
                min: min.to_i128(),
                max: max.to_i128(),
            });
        }

        Ok(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, value: U) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Indices of the smallest and largest values among `indices`.
///
/// The first index seeds both candidates. A later value replaces the max only
/// when strictly greater and the min only when strictly smaller, so ties keep
/// the earliest index.
pub fn min_max<U: Ord>(
    values: &[U],
    indices: impl IntoIterator<Item = usize>,
) -> Option<(usize, usize)> {
    let mut indices = indices.into_iter();
    let first = indices.next()?;

    Some(indices.fold((first, first), |(best_min, best_max), index| {
        if values[index] > values[best_max] {
            (best_min, index)
        } else if values[index] < values[best_min] {
            (index, best_max)
        } else {
            (best_min, best_max)
        }
    }))
}

/// Per-declaration validity flags.
///
/// Entry `i` is `true` when declaration `i` is regular, its value lies in
/// `range`, and its value differs from the `_bad` value.
pub fn validity_mask<U: Underlying>(
    table: &DeclarationTable<U>,
    slots: &SpecialSlots,
    range: &Range<U>,
) -> Box<[bool]> {
    let bad = slots.get(SpecialSlot::Bad).map(|index| table.value(index));

    (0..table.len())
        .map(|index| {
            let value = table.value(index);
            !slots.is_special(index) && range.contains(value) && bad != Some(value)
        })
        .collect()
}
