// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reserved constant names.
//!
//! Four names carry meaning beyond "a member of the enumeration":
//!
//! | Name       | Slot                       | Effect                              |
//! |------------|----------------------------|-------------------------------------|
//! | `_bad`     | [`SpecialSlot::Bad`]       | sentinel, never valid               |
//! | `_default` | [`SpecialSlot::Default`]   | value of `Default::default()`       |
//! | `_min`     | [`SpecialSlot::MinOverride`] | replaces the computed minimum     |
//! | `_max`     | [`SpecialSlot::MaxOverride`] | replaces the computed maximum     |
//!
//! Every other declaration is a regular constant.

use std::collections::HashMap;

use crate::declaration::DeclarationTable;
use crate::error::DefinitionError;
use crate::underlying::Underlying;

/// One of the four reserved roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialSlot {
    Bad,
    Default,
    MinOverride,
    MaxOverride,
}

impl SpecialSlot {
    pub const ALL: [SpecialSlot; 4] = [
        SpecialSlot::Bad,
        SpecialSlot::Default,
        SpecialSlot::MinOverride,
        SpecialSlot::MaxOverride,
    ];

    /// The identifier that selects this slot.
    pub const fn reserved_name(self) -> &'static str {
        match self {
            SpecialSlot::Bad => "_bad",
            SpecialSlot::Default => "_default",
            SpecialSlot::MinOverride => "_min",
            SpecialSlot::MaxOverride => "_max",
        }
    }

    /// Exact match against the reserved names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.reserved_name() == name)
    }
}

/// Declaration indices of the special slots of one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialSlots {
    bad: Option<usize>,
    default: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
}

impl SpecialSlots {
    /// Scan `table` once, recording where each reserved name sits.
    ///
    /// Also rejects regular constants that share a canonical name, since the
    /// scan already visits every name.
    pub fn resolve<U: Underlying>(table: &DeclarationTable<U>) -> Result<Self, DefinitionError> {
        let mut slots = SpecialSlots::default();
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(table.len());

        for index in 0..table.len() {
            let name = table.name(index);

            if let Some(slot) = SpecialSlot::from_name(name) {
                let entry = slots.slot_mut(slot);
                if let Some(first) = *entry {
                    return Err(DefinitionError::DuplicateSpecial {
                        name: slot.reserved_name(),
                        first,
                        second: index,
                    });
                }
                *entry = Some(index);
                continue;
            }

            if let Some(first) = seen.insert(name, index) {
                return Err(DefinitionError::DuplicateName {
                    name: name.to_string(),
                    first,
                    second: index,
                });
            }
        }

        Ok(slots)
    }

    fn slot_mut(&mut self, slot: SpecialSlot) -> &mut Option<usize> {
        match slot {
            SpecialSlot::Bad => &mut self.bad,
            SpecialSlot::Default => &mut self.default,
            SpecialSlot::MinOverride => &mut self.min,
            SpecialSlot::MaxOverride => &mut self.max,
        }
    }

    /// Declaration index of `slot`, if declared.
    pub fn get(&self, slot: SpecialSlot) -> Option<usize> {
        match slot {
            SpecialSlot::Bad => self.bad,
            SpecialSlot::Default => self.default,
            SpecialSlot::MinOverride => self.min,
            SpecialSlot::MaxOverride => self.max,
        }
    }

    /// The slot occupying declaration `index`, if any.
    pub fn slot_at(&self, index: usize) -> Option<SpecialSlot> {
        SpecialSlot::ALL
            .into_iter()
            .find(|&slot| self.get(slot) == Some(index))
    }

    #[inline]
    pub fn is_special(&self, index: usize) -> bool {
        self.slot_at(index).is_some()
    }

    /// Indices below `len` that hold regular constants, ascending.
    pub fn regular_indices(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len).filter(move |&index| !self.is_special(index))
    }

    /// Number of special slots declared.
    pub fn count(&self) -> usize {
        SpecialSlot::ALL
            .into_iter()
            .filter(|&slot| self.get(slot).is_some())
            .count()
    }
}
