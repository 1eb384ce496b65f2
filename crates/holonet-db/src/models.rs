//! Internal Rust models matching the database schema.
//!
//! Alongside the row models this module holds the create inputs and the
//! partial-update patches. In a patch, `None` always means "keep the stored
//! value". Nullable columns use `Option<Option<T>>` so a caller can still
//! clear them with `Some(None)`.

use holonet_common::{CharacterId, PlanetId, StarshipId};
use serde::{Deserialize, Serialize};

/// Planet row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// Character row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub species: Option<String>,
    pub home_planet_id: Option<PlanetId>,
}

/// Starship row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Starship {
    pub id: StarshipId,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

/// Character/starship piloting link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub character_id: CharacterId,
    pub starship_id: StarshipId,
}

/// Fields for inserting a planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl NewPlanet {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields for inserting a character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub species: Option<String>,
    pub home_planet_id: Option<PlanetId>,
}

impl NewCharacter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields for inserting a starship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStarship {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl NewStarship {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update for a planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub climate: Option<Option<String>>,
    pub terrain: Option<Option<String>>,
}

impl PlanetPatch {
    /// Merge this patch over the stored row.
    pub fn apply(self, current: Planet) -> Planet {
        Planet {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            climate: self.climate.unwrap_or(current.climate),
            terrain: self.terrain.unwrap_or(current.terrain),
        }
    }
}

/// Partial update for a character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub species: Option<Option<String>>,
    pub home_planet_id: Option<Option<PlanetId>>,
}

impl CharacterPatch {
    /// Merge this patch over the stored row.
    pub fn apply(self, current: Character) -> Character {
        Character {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            species: self.species.unwrap_or(current.species),
            home_planet_id: self.home_planet_id.unwrap_or(current.home_planet_id),
        }
    }
}

/// Partial update for a starship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarshipPatch {
    pub name: Option<String>,
    pub model: Option<Option<String>>,
    pub manufacturer: Option<Option<String>>,
}

impl StarshipPatch {
    /// Merge this patch over the stored row.
    pub fn apply(self, current: Starship) -> Starship {
        Starship {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            model: self.model.unwrap_or(current.model),
            manufacturer: self.manufacturer.unwrap_or(current.manufacturer),
        }
    }
}
