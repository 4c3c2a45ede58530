//! Reflective, type-safe enumerations generated from a declaration list.
//!
//! A declaration list such as `Red, Green = 4, Blue, _bad = 255` becomes a
//! closed set of values with canonical names. The generated type supports
//! name/value lookup in both directions, validity checks, and ordered
//! iteration over its valid members. It compares only with itself and has no
//! arithmetic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌────────────┐
//! │  declaration.rs  │────▶│  special.rs  │────▶│  range.rs  │
//! │ (auto values,    │     │ (_bad, _min, │     │ (min, max, │
//! │  canonical_name) │     │  _max, ...)  │     │  validity) │
//! └──────────────────┘     └──────────────┘     └────────────┘
//!          │                                          │
//!          ▼                                          ▼
//! ┌──────────────────┐     ┌──────────────────────────────────┐
//! │    names.rs      │────▶│            family.rs             │
//! │ (lazy name table)│     │ (find, case_find, desc, values)  │
//! └──────────────────┘     └──────────────────────────────────┘
//!                                          │
//!                                          ▼
//!                          ┌──────────────────────────────────┐
//!                          │   enumeration.rs + enumeration!  │
//!                          │   (typed surface per family)     │
//!                          └──────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use enumkit::enumeration;
//!
//! enumeration! {
//!     /// A colour channel.
//!     pub Channel: u8 {
//!         Red,
//!         Green = 4,
//!         Blue,
//!         _bad = 255,
//!     }
//! }
//!
//! assert_eq!(Channel::Blue.to_integral(), 5);
//! assert_eq!(Channel::find("Green"), Ok(Channel::Green));
//! assert_eq!(Channel::case_find("blue"), Ok(Channel::Blue));
//! assert_eq!(Channel::Red.desc(), Ok("Red"));
//! assert_eq!(Channel::names().into_iter().collect::<Vec<_>>(), ["Red", "Green", "Blue"]);
//! assert!(!Channel::is_valid_value(255u8));
//! assert!(Channel::Red < Channel::Blue);
//! ```
//!
//! Families can also be built at runtime from declaration text:
//!
//! ```
//! use enumkit::Family;
//!
//! let family = Family::<i32>::from_texts("Level", &["Low = -1", "Mid", "High"])?;
//! assert_eq!(family.find("High")?, 1);
//! assert_eq!(family.desc(0)?, "Mid");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Lets `enumeration!` refer to `::enumkit` from inside this crate's own tests.
extern crate self as enumkit;

// Module declarations
pub mod contracts;
pub mod declaration;
mod enumeration;
mod error;
mod family;
mod iter;
pub mod names;
pub mod range;
#[cfg(feature = "serde")]
pub mod serde_name;
pub mod special;
pub mod testing;
mod underlying;

// Re-exports for public API
pub use declaration::{canonical_name, Declaration, DeclarationTable};
pub use enumeration::Enumeration;
pub use enumkit_macros::enumeration;
pub use error::{DefinitionError, LookupError};
pub use family::Family;
pub use iter::{EnumValueIter, EnumValues, NameIter, Names, ValueIter, Values};
pub use range::Range;
pub use special::{SpecialSlot, SpecialSlots};
pub use underlying::{Integral, Signed, Underlying, Unsigned};

#[doc(hidden)]
pub mod __private {
    pub use std::sync::LazyLock;
}
