//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture families to avoid duplication.

#![doc(hidden)]

use crate::family::Family;

/// `A, B, C` with auto values `0, 1, 2` and no special slots.
pub fn abc_family() -> Family<i32> {
    build("Abc", &["A", "B", "C"])
}

/// `A = 5, _bad = 99, B = 6`.
pub fn sentinel_family() -> Family<i32> {
    build("Sentinel", &["A = 5", "_bad = 99", "B = 6"])
}

/// Regular constants `A = 1, B = 2, C = 15` squeezed by `_min = 10, _max = 20`.
pub fn override_family() -> Family<i32> {
    build(
        "Override",
        &["A = 1", "B = 2", "C = 15", "_min = 10", "_max = 20"],
    )
}

/// All four special slots, a gap, and a negative value on a signed type.
pub fn kitchen_sink_family() -> Family<i16> {
    build(
        "KitchenSink",
        &[
            "Minus = -4",
            "_bad = -1",
            "Zero = 0",
            "One",
            "_default = 0",
            "Ten = 10",
            "Eleven",
            "_min = -4",
            "_max = 10",
        ],
    )
}

/// Build a fixture family, panicking with the definition error on failure.
pub fn build<U: crate::Underlying>(name: &'static str, texts: &[&str]) -> Family<U> {
    match Family::from_texts(name, texts) {
        Ok(family) => family,
        Err(err) => panic!("fixture `{name}` is not a valid family: {err}"),
    }
}
