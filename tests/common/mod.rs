//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Once;

use enumkit::{Family, Underlying};
use tracing_subscriber::EnvFilter;

// Re-export canonical fixtures from enumkit::testing
#[allow(unused_imports)]
pub use enumkit::testing::{abc_family, build, kitchen_sink_family, override_family, sentinel_family};

// ============================================================================
// GENERATED FIXTURES
// ============================================================================

enumkit::enumeration! {
    /// Planets with a gap at zero reserved for "unknown".
    pub Planet: u8 {
        Mercury = 1,
        Venus,
        Earth,
        Mars,
        _bad = 0,
        _default = 3,
    }
}

enumkit::enumeration! {
    /// Shares its values with `Planet` but is a different family.
    pub Metal: u8 {
        Iron = 1,
        Copper,
        Gold,
    }
}

enumkit::enumeration! {
    /// Signed family squeezed by both overrides.
    pub Temperature: i16 {
        Freezing = -40,
        Cold = -5,
        Mild = 15,
        Hot = 35,
        Scorching = 60,
        _min = -10,
        _max = 40,
    }
}

// ============================================================================
// LOGGING
// ============================================================================

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `enumkit=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("enumkit=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert the invariants every family satisfies, through the public API only.
pub fn assert_family_well_formed<U: Underlying>(family: &Family<U>) {
    let values: Vec<U> = family.values().into_iter().collect();
    let names: Vec<&str> = family.names().into_iter().collect();

    assert_eq!(values.len(), family.size(), "values() disagrees with size()");
    assert_eq!(names.len(), family.size(), "names() disagrees with size()");
    assert!(
        family.min_value() <= family.max_value(),
        "range is inverted: {:?}",
        family.range()
    );

    for (&value, &name) in values.iter().zip(&names) {
        assert!(family.is_valid_value(value), "{value} listed but not valid");
        assert!(family.range().contains(value), "{value} outside {:?}", family.range());
        assert_ne!(family.bad(), Some(value), "_bad value {value} listed");
        assert_eq!(family.find(name), Ok(value), "find({name:?})");

        let described = family.desc(value).unwrap_or_else(|err| panic!("desc({value}): {err}"));
        assert_eq!(family.find(described), Ok(value), "desc({value}) = {described:?}");
    }
}
