//! Serialization by canonical name.

use serde::{Deserialize, Serialize};

use super::common::Planet;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Probe {
    id: u32,
    #[serde(with = "enumkit::serde_name")]
    target: Planet,
}

#[test]
fn serializes_by_name() {
    let probe = Probe {
        id: 7,
        target: Planet::Mars,
    };
    let json = serde_json::to_string(&probe).unwrap();
    assert_eq!(json, r#"{"id":7,"target":"Mars"}"#);
    assert_eq!(serde_json::from_str::<Probe>(&json).unwrap(), probe);
}

#[test]
fn deserialization_falls_back_to_case_insensitive() {
    let probe: Probe = serde_json::from_str(r#"{"id":1,"target":"venus"}"#).unwrap();
    assert_eq!(probe.target, Planet::Venus);
}

#[test]
fn unknown_names_are_rejected() {
    let err = serde_json::from_str::<Probe>(r#"{"id":1,"target":"Pluto"}"#).unwrap_err();
    assert!(err.to_string().contains("Pluto"), "{err}");
}

#[test]
fn undeclared_values_do_not_serialize() {
    let probe = Probe {
        id: 2,
        target: Planet::from_integral_unchecked(200),
    };
    assert!(serde_json::to_string(&probe).is_err());
}
