// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazily built canonical name table.
//!
//! Names are not needed by value-only code, so the table is built on the
//! first name query and then reused for the life of the family. The
//! `OnceLock` makes concurrent first callers converge on a single build;
//! nobody observes a partially filled table.

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::declaration::canonical_name;

/// Memoized canonical names, index-aligned with the declaration table.
#[derive(Debug, Default)]
pub struct NameTable {
    names: OnceLock<Box<[Box<str>]>>,
}

impl NameTable {
    pub const fn new() -> Self {
        Self {
            names: OnceLock::new(),
        }
    }

    /// The table, building it from `texts` on first call.
    ///
    /// Later calls ignore `texts` and return the stored table.
    pub fn get_or_build(&self, family: &str, texts: &[Cow<'static, str>]) -> &[Box<str>] {
        self.names.get_or_init(|| {
            tracing::trace!(family, entries = texts.len(), "building name table");
            texts
                .iter()
                .map(|text| Box::from(canonical_name(text)))
                .collect()
        })
    }

    pub fn is_built(&self) -> bool {
        self.names.get().is_some()
    }
}
