//! Behaviour of types generated by `enumeration!`.

use std::collections::{BTreeSet, HashSet};

use super::common::{Metal, Planet, Temperature};
use enumkit::{Enumeration, LookupError};

enumkit::enumeration! {
    /// Values written in terms of earlier constants.
    Level: i32 {
        Low = -2,
        Base = Low,
        High = Base * -3,
        Top,
    }
}

#[test]
fn values_can_name_earlier_constants() {
    assert_eq!(Level::Base.to_integral(), -2);
    assert_eq!(Level::High.to_integral(), 6);
    assert_eq!(Level::Top.to_integral(), 7);

    // `Base` shares its value with `Low`, which is declared first.
    assert_eq!(Level::Base.desc(), Ok("Low"));
    assert_eq!(Level::family().desc(-2), Ok("Low"));
    assert_eq!(Level::find("Base"), Ok(Level::Low));
    assert_eq!(Level::size(), 4);
    assert_eq!(
        Level::names().into_iter().collect::<Vec<_>>(),
        ["Low", "Base", "High", "Top"]
    );
}

#[test]
fn constants_carry_declared_values() {
    assert_eq!(Planet::Mercury.to_integral(), 1);
    assert_eq!(Planet::Mars.to_integral(), 4);
    assert_eq!(Planet::_bad.to_integral(), 0);
    assert_eq!(Planet::_default.to_integral(), 3);
    assert_eq!(Temperature::Freezing.to_integral(), -40);
}

#[test]
fn reflection_surface() {
    assert_eq!(Planet::size(), 4);
    assert_eq!(
        Planet::values().into_iter().collect::<Vec<_>>(),
        [Planet::Mercury, Planet::Venus, Planet::Earth, Planet::Mars]
    );
    assert_eq!(
        Planet::names().into_iter().collect::<Vec<_>>(),
        ["Mercury", "Venus", "Earth", "Mars"]
    );
    assert_eq!(Planet::values().len(), Planet::size());
}

#[test]
fn overrides_shape_the_generated_type() {
    assert_eq!(Temperature::min_value().to_integral(), -10);
    assert_eq!(Temperature::max_value().to_integral(), 40);
    assert_eq!(
        Temperature::values().into_iter().collect::<Vec<_>>(),
        [Temperature::Cold, Temperature::Mild, Temperature::Hot]
    );
    assert!(!Temperature::Freezing.is_valid());
    assert!(!Temperature::is_valid_name("Scorching"));
    assert_eq!(Temperature::Scorching.desc(), Ok("Scorching"));
}

#[test]
fn lookup_by_name() {
    assert_eq!(Planet::find("Earth"), Ok(Planet::Earth));
    assert_eq!(Planet::case_find("eArTh"), Ok(Planet::Earth));
    assert_eq!(
        Planet::find("earth"),
        Err(LookupError::NotFound {
            name: "earth".to_string()
        })
    );
    assert!(Planet::find("_bad").is_err());
    assert!(Planet::find("_default").is_err());
}

#[test]
fn lookup_by_value() {
    assert_eq!(Planet::Venus.desc(), Ok("Venus"));
    assert_eq!(Planet::_bad.desc(), Ok("_bad"));
    // `_default` shares its value with `Earth`, which wins.
    assert_eq!(Planet::_default.desc(), Ok("Earth"));
    assert_eq!(
        Planet::from_integral_unchecked(9).desc(),
        Err(LookupError::InvalidValue { value: 9 })
    );
}

#[test]
fn validity_predicates() {
    assert!(Planet::is_valid_value(4u8));
    assert!(Planet::is_valid_value(4u64));
    assert!(!Planet::is_valid_value(0u8));
    assert!(!Planet::is_valid_value(260u16));
    assert!(Temperature::is_valid_value(15i64));
    assert!(!Temperature::is_valid_value(-40i8));
    assert!(Planet::Mars.is_valid());
    assert!(!Planet::_bad.is_valid());
}

#[test]
fn conversions() {
    assert_eq!(Planet::from_integral(2), Ok(Planet::Venus));
    assert_eq!(Planet::from_integral(0), Err(LookupError::InvalidValue { value: 0 }));
    assert_eq!(Planet::try_from(3u8), Ok(Planet::Earth));
    assert_eq!(u8::from(Planet::Mars), 4);
    assert_eq!("Venus".parse::<Planet>(), Ok(Planet::Venus));
    assert!("venus".parse::<Planet>().is_err());
}

#[test]
fn default_is_the_declared_default() {
    assert_eq!(Planet::default(), Planet::Earth);
    // No `_default`: first valid member.
    assert_eq!(Metal::default(), Metal::Iron);
    assert_eq!(Temperature::default(), Temperature::Cold);
}

#[test]
fn formatting() {
    assert_eq!(Planet::Mars.to_string(), "Mars");
    assert_eq!(format!("{:?}", Planet::Mars), "Planet::Mars");
    assert_eq!(format!("{:?}", Planet::from_integral_unchecked(42)), "Planet(42)");
    assert_eq!(Planet::from_integral_unchecked(42).to_string(), "42");
}

#[test]
fn ordering_follows_underlying_values() {
    assert!(Planet::Mercury < Planet::Mars);
    assert!(Temperature::Freezing < Temperature::Cold);

    let sorted: BTreeSet<Temperature> = [Temperature::Hot, Temperature::Cold, Temperature::Mild]
        .into_iter()
        .collect();
    assert_eq!(
        sorted.into_iter().collect::<Vec<_>>(),
        [Temperature::Cold, Temperature::Mild, Temperature::Hot]
    );
}

#[test]
fn usable_as_hash_keys() {
    let set: HashSet<Planet> = Planet::values().into_iter().chain([Planet::Earth]).collect();
    assert_eq!(set.len(), 4);
}

#[test]
fn families_are_independent() {
    // Same underlying values, different families.
    assert_eq!(Metal::Iron.to_integral(), Planet::Mercury.to_integral());
    assert_eq!(Metal::Iron.desc(), Ok("Iron"));
    assert_eq!(Planet::Mercury.desc(), Ok("Mercury"));
    assert!(!std::ptr::eq(
        Metal::family() as *const _ as *const (),
        Planet::family() as *const _ as *const ()
    ));
}

#[test]
fn trait_methods_match_inherent_ones() {
    fn via_trait<E: Enumeration>() -> (usize, Vec<E>) {
        (E::size(), E::values().into_iter().collect())
    }

    let (size, values) = via_trait::<Planet>();
    assert_eq!(size, Planet::size());
    assert_eq!(values, Planet::values().into_iter().collect::<Vec<_>>());
    assert_eq!(<Planet as Enumeration>::family().name(), "Planet");
}
