//! Serialize enumerations by canonical name.
//!
//! Use with `#[serde(with = "enumkit::serde_name")]`:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Pixel {
//!     #[serde(with = "enumkit::serde_name")]
//!     channel: Channel,
//! }
//! ```
//!
//! Deserialization tries an exact match first and falls back to a
//! case-insensitive one, so `"red"` reads back as `Channel::Red`.

use serde::{de, ser, Deserialize, Deserializer, Serializer};

use crate::enumeration::Enumeration;

pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Enumeration,
    S: Serializer,
{
    let name = value.desc().map_err(<S::Error as ser::Error>::custom)?;
    serializer.serialize_str(name)
}

pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: Enumeration,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    E::find(&name)
        .or_else(|_| E::case_find(&name))
        .map_err(<D::Error as de::Error>::custom)
}
