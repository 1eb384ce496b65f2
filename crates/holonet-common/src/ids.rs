//! Typed ID wrappers for type safety across holonet.
//!
//! Each ID type is a newtype over the SQLite integer row id, preventing
//! accidental misuse (e.g., passing a `StarshipId` where a `PlanetId` is
//! expected).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generate a newtype ID wrapper over `i64`.
///
/// The macro produces a struct with:
/// - `get()` returning the raw row id
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`, `Serialize`, `Deserialize`
/// - `Display` and `FromStr` delegating to the inner integer
/// - `From<i64>` and `Into<i64>` conversions
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                /// Return the raw row id.
                #[must_use]
                pub fn get(&self) -> i64 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = std::num::ParseIntError;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    s.trim().parse::<i64>().map(Self)
                }
            }

            impl From<i64> for $name {
                fn from(id: i64) -> Self {
                    Self(id)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

typed_id! {
    /// Row id of a planet.
    PlanetId,
    /// Row id of a character.
    CharacterId,
    /// Row id of a starship.
    StarshipId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = PlanetId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<PlanetId>().unwrap(), id);
        assert_eq!(" 42 ".parse::<PlanetId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("tatooine".parse::<CharacterId>().is_err());
        assert!("".parse::<StarshipId>().is_err());
    }

    #[test]
    fn test_into_raw() {
        let raw: i64 = StarshipId::from(3).into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&CharacterId::from(9)).unwrap();
        assert_eq!(json, "9");

        let id: CharacterId = serde_json::from_str("9").unwrap();
        assert_eq!(id.get(), 9);
    }
}
