//! Runtime contracts for family construction.
//!
//! Debug-mode assertions that verify the invariants every built
//! [`Family`] must satisfy. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Run once per family, right after construction
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                          |
//! |------------------------------|----------------------------------------------------|
//! | `check_table_aligned`        | one value per declaration text                     |
//! | `check_range_ordered`        | `min <= max`                                       |
//! | `check_valid_within_range`   | valid values lie in `[min, max]`, never `_bad`     |
//! | `check_size_matches_mask`    | `size()` equals the number of valid declarations   |
//! | `check_family_well_formed`   | all of the above                                   |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Reserved names must be identifiers that cannot be mistaken for one
/// another or trimmed by the name enders.
const _: () = {
    const fn starts_with_underscore(name: &str) -> bool {
        let bytes = name.as_bytes();
        bytes.len() > 1 && bytes[0] == b'_'
    }

    // INVARIANT: reserved_names_are_private_identifiers
    assert!(starts_with_underscore(SpecialSlot::Bad.reserved_name()));
    assert!(starts_with_underscore(SpecialSlot::Default.reserved_name()));
    assert!(starts_with_underscore(SpecialSlot::MinOverride.reserved_name()));
    assert!(starts_with_underscore(SpecialSlot::MaxOverride.reserved_name()));
};

use crate::family::Family;
use crate::range::Range;
use crate::special::SpecialSlot;
use crate::underlying::Underlying;

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that texts and values stay index-aligned.
///
/// # Panics (debug builds only)
/// Panics if the two arrays differ in length.
#[inline]
pub fn check_table_aligned(texts_len: usize, values_len: usize) {
    // INVARIANT: table_aligned
    debug_assert_eq!(
        texts_len, values_len,
        "Contract violation: declaration table misaligned ({} texts, {} values)",
        texts_len, values_len
    );
}

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check that the range is not empty.
#[inline]
pub fn check_range_ordered<U: Underlying>(range: &Range<U>) {
    // INVARIANT: range_ordered
    debug_assert!(
        range.min <= range.max,
        "Contract violation: range min {} > max {}",
        range.min,
        range.max
    );
}

/// Check that every valid declaration lies in range and is not `_bad`.
///
/// # Panics (debug builds only)
/// Panics on the first valid declaration outside `[min, max]`, equal to the
/// `_bad` value, or occupying a special slot.
#[inline]
pub fn check_valid_within_range<U: Underlying>(family: &Family<U>) {
    let range = family.range();
    let bad = family.bad();

    for index in 0..family.raw_len() {
        if !family.is_valid_index(index) {
            continue;
        }
        let value = family.value_at(index);

        // INVARIANT: valid_in_range
        debug_assert!(
            range.contains(value),
            "Contract violation: valid declaration {} has value {} outside [{}, {}]",
            index,
            value,
            range.min,
            range.max
        );
        // INVARIANT: valid_not_bad
        debug_assert!(
            bad != Some(value),
            "Contract violation: valid declaration {} equals the _bad value {}",
            index,
            value
        );
        // INVARIANT: valid_not_special
        debug_assert!(
            !family.special_slots().is_special(index),
            "Contract violation: special declaration {} marked valid",
            index
        );
    }
}

/// Check that the cached size agrees with the validity mask.
#[inline]
pub fn check_size_matches_mask<U: Underlying>(family: &Family<U>) {
    let counted = (0..family.raw_len())
        .filter(|&index| family.is_valid_index(index))
        .count();

    // INVARIANT: size_matches_mask
    debug_assert_eq!(
        family.size(),
        counted,
        "Contract violation: size() {} but {} valid declarations",
        family.size(),
        counted
    );
}

// ============================================================================
// COMBINED CONTRACTS
// ============================================================================

/// Check every family invariant.
///
/// Called at the end of [`Family::from_table`].
#[inline]
pub fn check_family_well_formed<U: Underlying>(family: &Family<U>) {
    check_table_aligned(family.table().texts().len(), family.table().values().len());
    check_range_ordered(&family.range());
    check_valid_within_range(family);
    check_size_matches_mask(family);
}
