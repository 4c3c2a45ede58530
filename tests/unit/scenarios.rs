//! Worked scenarios over runtime-built families.

use super::common::{
    abc_family, assert_family_well_formed, build, kitchen_sink_family, override_family,
    sentinel_family,
};
use enumkit::{Family, LookupError, SpecialSlot};

// ============================================================================
// PLAIN AUTO VALUES
// ============================================================================

#[test]
fn abc_has_auto_values_and_full_range() {
    let family = abc_family();

    assert_eq!(family.min_value(), 0);
    assert_eq!(family.max_value(), 2);
    assert_eq!(family.values().into_iter().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(family.names().into_iter().collect::<Vec<_>>(), ["A", "B", "C"]);
    assert_eq!(family.find("B"), Ok(1));
    assert_eq!(family.desc(1), Ok("B"));
    assert_family_well_formed(&family);
}

#[test]
fn exact_and_case_insensitive_lookup() {
    let family = abc_family();

    assert_eq!(family.case_find("a"), family.find("A"));
    assert_eq!(
        family.find("a"),
        Err(LookupError::NotFound {
            name: "a".to_string()
        })
    );
    assert!(family.is_valid_name_ignore_case("c"));
    assert!(!family.is_valid_name("c"));
    assert!(!family.is_valid_name_ignore_case("D"));
}

// ============================================================================
// SPECIAL SLOTS
// ============================================================================

#[test]
fn bad_sentinel_is_not_a_member() {
    let family = sentinel_family();

    assert_eq!(family.values().into_iter().collect::<Vec<_>>(), [5, 6]);
    assert_eq!(family.names().into_iter().collect::<Vec<_>>(), ["A", "B"]);
    assert!(!family.is_valid_value(99));
    assert!(!family.is_valid_name("_bad"));
    // The sentinel is declared, so it still has a name.
    assert_eq!(family.desc(99), Ok("_bad"));
    assert_eq!(family.desc(7), Err(LookupError::InvalidValue { value: 7 }));
    assert_family_well_formed(&family);
}

#[test]
fn sentinel_shared_with_a_member_invalidates_it() {
    let family: Family<i32> = build("Shared", &["A = 5", "B = 99", "_bad = 99"]);

    assert!(!family.is_valid_value(99));
    assert_eq!(family.values().into_iter().collect::<Vec<_>>(), [5]);
    assert_eq!(family.desc(99), Ok("B"));
}

#[test]
fn overrides_replace_the_computed_range() {
    let family = override_family();

    assert_eq!((family.min_value(), family.max_value()), (10, 20));
    assert!(!family.is_valid_value(1));
    assert!(!family.is_valid_value(2));
    assert!(family.is_valid_value(15));
    assert_eq!(family.values().into_iter().collect::<Vec<_>>(), [15]);
    assert_eq!(family.size(), 1);
    assert_family_well_formed(&family);
}

#[test]
fn overrides_apply_even_without_members_inside() {
    let family: Family<i32> = build("Empty", &["A = 1", "B = 2", "_min = 10", "_max = 20"]);

    assert_eq!((family.min_value(), family.max_value()), (10, 20));
    assert_eq!(family.size(), 0);
    assert!(family.values().is_empty());
    assert!(family.find("A").is_err());
}

#[test]
fn kitchen_sink() {
    let family = kitchen_sink_family();

    assert_eq!(family.values().into_iter().collect::<Vec<_>>(), [-4, 0, 1, 10]);
    assert_eq!(family.names().into_iter().collect::<Vec<_>>(), ["Minus", "Zero", "One", "Ten"]);
    assert_eq!(family.bad(), Some(-1));
    assert_eq!(family.default_value(), 0);
    assert_eq!(family.slot_value(SpecialSlot::MaxOverride), Some(10));
    assert!(!family.is_valid_value(11));
    assert_eq!(family.desc(11), Ok("Eleven"));
    assert_eq!(family.raw_len(), 9);
    assert_eq!(family.declared_names().count(), 9);
    assert_family_well_formed(&family);
}

// ============================================================================
// NAMES
// ============================================================================

#[test]
fn canonical_names_drop_value_expressions() {
    let family: Family<u16> = build("Spaced", &["Low=1", "Mid =  4", "High\t= 0x10", "Top"]);

    assert_eq!(
        family.names().into_iter().collect::<Vec<_>>(),
        ["Low", "Mid", "High", "Top"]
    );
    assert_eq!(family.find("High"), Ok(16));
    assert_eq!(family.find("Top"), Ok(17));
}

#[test]
fn iteration_restarts_from_the_beginning() {
    let family = kitchen_sink_family();
    let values = family.values();

    let first: Vec<i16> = values.into_iter().collect();
    let second: Vec<i16> = values.into_iter().collect();
    assert_eq!(first, second);

    let mut iter = values.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(values.iter().next(), Some(-4));
}
