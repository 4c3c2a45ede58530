// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Iteration over valid members.
//!
//! [`Values`] and [`Names`] are cheap `Copy` handles. Every call to `iter()`
//! (or `into_iter()`) starts a fresh traversal from the first valid
//! declaration, so a sequence can be walked any number of times.
//!
//! Cursors always rest on a valid declaration index or on the end position
//! (`raw_len`). Advancing an exhausted cursor leaves it at the end, and two
//! cursors over the same family compare equal when they rest on the same
//! position.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr;

use crate::enumeration::Enumeration;
use crate::family::Family;
use crate::underlying::Underlying;

/// Position within a family's declarations, restricted to valid indices.
struct Cursor<'a, U: Underlying> {
    family: &'a Family<U>,
    position: usize,
    remaining: usize,
}

impl<'a, U: Underlying> Cursor<'a, U> {
    fn start(family: &'a Family<U>) -> Self {
        Self {
            family,
            position: family.next_valid_index(0),
            remaining: family.size(),
        }
    }

    /// Declaration index of the current element, then move past it.
    fn advance(&mut self) -> Option<usize> {
        if self.position >= self.family.raw_len() {
            return None;
        }
        let current = self.position;
        self.position = self.family.next_valid_index(current + 1);
        self.remaining -= 1;
        Some(current)
    }

    fn same_position(&self, other: &Self) -> bool {
        ptr::eq(self.family, other.family) && self.position == other.position
    }
}

impl<U: Underlying> Clone for Cursor<'_, U> {
    fn clone(&self) -> Self {
        Self {
            family: self.family,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// RAW VALUES AND NAMES
// ============================================================================

/// The valid values of a family, in declaration order.
pub struct Values<'a, U: Underlying> {
    family: &'a Family<U>,
}

impl<'a, U: Underlying> Values<'a, U> {
    pub(crate) fn new(family: &'a Family<U>) -> Self {
        Self { family }
    }

    pub fn iter(&self) -> ValueIter<'a, U> {
        ValueIter {
            cursor: Cursor::start(self.family),
        }
    }

    /// Number of elements one traversal yields.
    pub fn len(&self) -> usize {
        self.family.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<U: Underlying> Clone for Values<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Underlying> Copy for Values<'_, U> {}

impl<'a, U: Underlying> IntoIterator for Values<'a, U> {
    type Item = U;
    type IntoIter = ValueIter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<U: Underlying> fmt::Debug for Values<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Cursor over [`Values`].
#[derive(Clone)]
pub struct ValueIter<'a, U: Underlying> {
    cursor: Cursor<'a, U>,
}

impl<U: Underlying> Iterator for ValueIter<'_, U> {
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.cursor
            .advance()
            .map(|index| self.cursor.family.value_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<U: Underlying> ExactSizeIterator for ValueIter<'_, U> {}
impl<U: Underlying> FusedIterator for ValueIter<'_, U> {}

impl<U: Underlying> PartialEq for ValueIter<'_, U> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.same_position(&other.cursor)
    }
}

impl<U: Underlying> fmt::Debug for ValueIter<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueIter")
            .field("family", &self.cursor.family.name())
            .field("position", &self.cursor.position)
            .finish()
    }
}

/// The canonical names of a family's valid members, in declaration order.
pub struct Names<'a, U: Underlying> {
    family: &'a Family<U>,
}

impl<'a, U: Underlying> Names<'a, U> {
    pub(crate) fn new(family: &'a Family<U>) -> Self {
        Self { family }
    }

    pub fn iter(&self) -> NameIter<'a, U> {
        NameIter {
            names: self.family.canonical_names(),
            cursor: Cursor::start(self.family),
        }
    }

    pub fn len(&self) -> usize {
        self.family.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<U: Underlying> Clone for Names<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Underlying> Copy for Names<'_, U> {}

impl<'a, U: Underlying> IntoIterator for Names<'a, U> {
    type Item = &'a str;
    type IntoIter = NameIter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<U: Underlying> fmt::Debug for Names<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Cursor over [`Names`].
#[derive(Clone)]
pub struct NameIter<'a, U: Underlying> {
    names: &'a [Box<str>],
    cursor: Cursor<'a, U>,
}

impl<'a, U: Underlying> Iterator for NameIter<'a, U> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let names = self.names;
        self.cursor.advance().map(|index| &*names[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<U: Underlying> ExactSizeIterator for NameIter<'_, U> {}
impl<U: Underlying> FusedIterator for NameIter<'_, U> {}

impl<U: Underlying> PartialEq for NameIter<'_, U> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.same_position(&other.cursor)
    }
}

impl<U: Underlying> fmt::Debug for NameIter<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameIter")
            .field("family", &self.cursor.family.name())
            .field("position", &self.cursor.position)
            .finish()
    }
}

// ============================================================================
// TYPED VALUES
// ============================================================================

/// The valid members of a generated enumeration type.
pub struct EnumValues<E: Enumeration> {
    inner: Values<'static, E::Underlying>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Enumeration> EnumValues<E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: E::family().values(),
            _marker: PhantomData,
        }
    }

    pub fn iter(&self) -> EnumValueIter<E> {
        EnumValueIter {
            inner: self.inner.iter(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<E: Enumeration> Clone for EnumValues<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Enumeration> Copy for EnumValues<E> {}

impl<E: Enumeration> IntoIterator for EnumValues<E> {
    type Item = E;
    type IntoIter = EnumValueIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Enumeration> fmt::Debug for EnumValues<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Cursor over [`EnumValues`].
pub struct EnumValueIter<E: Enumeration> {
    inner: ValueIter<'static, E::Underlying>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Clone for EnumValueIter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Enumeration> Iterator for EnumValueIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next().map(E::from_integral_unchecked)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Enumeration> ExactSizeIterator for EnumValueIter<E> {}
impl<E: Enumeration> FusedIterator for EnumValueIter<E> {}

impl<E: Enumeration> PartialEq for EnumValueIter<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Enumeration> fmt::Debug for EnumValueIter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
