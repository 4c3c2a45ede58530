// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The enumeration model.
//!
//! A [`Family`] is everything known about one enumeration: its declaration
//! table, the special slots, the range, which declarations are valid, and the
//! lazily built name table. Everything except the name table is computed in
//! the constructor and never changes afterwards.
//!
//! # Construction pipeline
//!
//! ```text
//! declarations ──▶ DeclarationTable ──▶ SpecialSlots ──▶ Range ──▶ validity mask
//!                    (auto values)       (_bad, ...)     (min,max)   (per index)
//! ```
//!
//! Generated types keep their family in a `static` and reach it through
//! [`Enumeration::family`](crate::Enumeration::family). Families can also be
//! built at runtime from declaration text with [`Family::from_texts`].

use std::borrow::Cow;
use std::fmt;

use crate::contracts::check_family_well_formed;
use crate::declaration::{Declaration, DeclarationTable};
use crate::error::{DefinitionError, LookupError};
use crate::iter::{Names, Values};
use crate::names::NameTable;
use crate::range::{validity_mask, Range};
use crate::special::{SpecialSlot, SpecialSlots};
use crate::underlying::{Integral, Underlying};

/// One enumeration: its declarations and everything derived from them.
pub struct Family<U: Underlying> {
    name: Cow<'static, str>,
    table: DeclarationTable<U>,
    slots: SpecialSlots,
    range: Range<U>,
    valid: Box<[bool]>,
    size: usize,
    default: U,
    names: NameTable,
}

impl<U: Underlying> Family<U> {
    /// Build a family from declarations.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        declarations: Vec<Declaration<U>>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let table = DeclarationTable::build(declarations).inspect_err(|err| {
            tracing::warn!(family = %name, error = %err, "rejected enumeration definition");
        })?;
        Self::from_table(name, table)
    }

    /// Build a family from declaration text such as `"Green = 3"`.
    ///
    /// See [`Declaration::parse`] for the accepted forms.
    pub fn from_texts(
        name: impl Into<Cow<'static, str>>,
        texts: &[&str],
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let declarations = texts
            .iter()
            .map(|text| Declaration::parse(text))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| {
                tracing::warn!(family = %name, error = %err, "rejected enumeration definition");
            })?;
        Self::new(name, declarations)
    }

    /// Build a family from a table whose values are already resolved.
    pub fn from_table(
        name: impl Into<Cow<'static, str>>,
        table: DeclarationTable<U>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        match Self::derive(&table) {
            Ok((slots, range, valid, default)) => {
                let size = valid.iter().filter(|&&valid| valid).count();
                let family = Self {
                    name,
                    table,
                    slots,
                    range,
                    valid,
                    size,
                    default,
                    names: NameTable::new(),
                };
                check_family_well_formed(&family);

                tracing::debug!(
                    family = %family.name,
                    declared = family.raw_len(),
                    size = family.size,
                    min = %family.range.min,
                    max = %family.range.max,
                    "defined enumeration"
                );
                Ok(family)
            }
            Err(err) => {
                tracing::warn!(family = %name, error = %err, "rejected enumeration definition");
                Err(err)
            }
        }
    }

    fn derive(
        table: &DeclarationTable<U>,
    ) -> Result<(SpecialSlots, Range<U>, Box<[bool]>, U), DefinitionError> {
        let slots = SpecialSlots::resolve(table)?;
        let range = Range::compute(table, &slots)?;
        let valid = validity_mask(table, &slots, &range);

        let default = match slots.get(SpecialSlot::Default) {
            Some(index) => table.value(index),
            None => {
                let first = valid
                    .iter()
                    .position(|&valid| valid)
                    .or_else(|| slots.regular_indices(table.len()).next())
                    .unwrap_or(0);
                table.value(first)
            }
        };

        Ok((slots, range, valid, default))
    }

    /// Entry point for code emitted by `enumeration!`.
    ///
    /// The macro has already rejected name-level errors at compile time, and
    /// the compiler has evaluated every value, so only value-level errors
    /// (an inverted `_min`/`_max` pair) remain.
    ///
    /// # Panics
    ///
    /// Panics if the declarations do not form a valid family. A generated
    /// type with a broken definition must not be usable at all.
    pub fn define(name: &'static str, texts: &[&'static str], values: &[U]) -> Self {
        let texts = texts.iter().map(|&text| Cow::Borrowed(text)).collect();
        let built = DeclarationTable::from_resolved(texts, values.to_vec())
            .and_then(|table| Self::from_table(name, table));
        match built {
            Ok(family) => family,
            Err(err) => panic!("invalid enumeration `{name}`: {err}"),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declarations, special ones included.
    pub fn raw_len(&self) -> usize {
        self.table.len()
    }

    pub fn table(&self) -> &DeclarationTable<U> {
        &self.table
    }

    pub fn special_slots(&self) -> &SpecialSlots {
        &self.slots
    }

    pub fn range(&self) -> Range<U> {
        self.range
    }

    pub fn min_value(&self) -> U {
        self.range.min
    }

    pub fn max_value(&self) -> U {
        self.range.max
    }

    /// Value of the `_bad` sentinel, if declared.
    pub fn bad(&self) -> Option<U> {
        self.slot_value(SpecialSlot::Bad)
    }

    /// Value of `_default` if declared, otherwise of the first valid member.
    pub fn default_value(&self) -> U {
        self.default
    }

    pub fn slot_value(&self, slot: SpecialSlot) -> Option<U> {
        self.slots.get(slot).map(|index| self.table.value(index))
    }

    /// All declared values, special ones included, in declaration order.
    pub fn declared_values(&self) -> &[U] {
        self.table.values()
    }

    /// All canonical names, special ones included, in declaration order.
    pub fn declared_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.canonical_names().iter().map(|name| &**name)
    }

    // ========================================================================
    // REFLECTION
    // ========================================================================

    /// The valid values, in declaration order.
    pub fn values(&self) -> Values<'_, U> {
        Values::new(self)
    }

    /// The canonical names of the valid members, in declaration order.
    pub fn names(&self) -> Names<'_, U> {
        Names::new(self)
    }

    /// How many elements `values()` and `names()` yield.
    pub fn size(&self) -> usize {
        self.size
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Value of the valid member named exactly `name`.
    pub fn find(&self, name: &str) -> Result<U, LookupError> {
        self.position_by_name(|candidate| candidate == name)
            .map(|index| self.table.value(index))
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }

    /// Like [`find`](Self::find), ignoring ASCII case.
    pub fn case_find(&self, name: &str) -> Result<U, LookupError> {
        self.position_by_name(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| self.table.value(index))
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }

    /// Canonical name for `value`.
    ///
    /// A valid member with that value wins. Otherwise every declaration is
    /// searched, special ones included, so `desc` of the `_bad` value yields
    /// `"_bad"`. Values never declared are an error.
    pub fn desc(&self, value: U) -> Result<&str, LookupError> {
        let values = self.table.values();
        let index = (0..values.len())
            .find(|&index| self.valid[index] && values[index] == value)
            .or_else(|| values.iter().position(|&candidate| candidate == value))
            .ok_or(LookupError::InvalidValue {
                value: value.to_i128(),
            })?;
        Ok(&self.canonical_names()[index])
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    pub fn is_valid_name_ignore_case(&self, name: &str) -> bool {
        self.case_find(name).is_ok()
    }

    /// Whether `value` is the value of a valid member.
    ///
    /// `V` must have the same signedness as the underlying type; mixing them
    /// is a compile error:
    ///
    /// ```compile_fail
    /// let family = enumkit::Family::<u8>::from_texts("Level", &["Low", "High"]).unwrap();
    /// family.is_valid_value(-1i32);
    /// ```
    pub fn is_valid_value<V>(&self, value: V) -> bool
    where
        V: Integral<Sign = <U as Integral>::Sign>,
    {
        let wide = value.to_i128();
        self.valid
            .iter()
            .zip(self.table.values())
            .any(|(&valid, candidate)| valid && candidate.to_i128() == wide)
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn position_by_name(&self, matches: impl Fn(&str) -> bool) -> Option<usize> {
        let names = self.canonical_names();
        (0..names.len()).find(|&index| self.valid[index] && matches(&names[index]))
    }

    pub(crate) fn canonical_names(&self) -> &[Box<str>] {
        self.names.get_or_build(&self.name, self.table.texts())
    }

    #[cfg(test)]
    pub(crate) fn names_built(&self) -> bool {
        self.names.is_built()
    }

    #[inline]
    pub(crate) fn is_valid_index(&self, index: usize) -> bool {
        self.valid[index]
    }

    #[inline]
    pub(crate) fn value_at(&self, index: usize) -> U {
        self.table.value(index)
    }

    /// First valid index at or after `from`, or `raw_len()` if none.
    pub(crate) fn next_valid_index(&self, from: usize) -> usize {
        (from..self.valid.len())
            .find(|&index| self.valid[index])
            .unwrap_or(self.valid.len())
    }
}

impl<U: Underlying> fmt::Debug for Family<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Family")
            .field("name", &self.name)
            .field("declared", &self.raw_len())
            .field("size", &self.size)
            .field("range", &self.range)
            .field("bad", &self.bad())
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
