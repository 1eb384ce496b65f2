//! GraphQL input objects and their mapping onto the db create/patch types.
//!
//! Nullable columns are `MaybeUndefined` so an omitted field keeps the
//! stored value while an explicit `null` clears it.

use async_graphql::{InputObject, MaybeUndefined, Result, ID};
use holonet_common::{CharacterId, PlanetId, StarshipId};
use holonet_db::models::{
    CharacterPatch, NewCharacter, NewPlanet, NewStarship, PlanetPatch, StarshipPatch,
};

use super::error::parse_id;

fn patch_field<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

#[derive(Debug, InputObject)]
pub struct CreatePlanetInput {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl From<CreatePlanetInput> for NewPlanet {
    fn from(input: CreatePlanetInput) -> Self {
        NewPlanet {
            name: input.name,
            climate: input.climate,
            terrain: input.terrain,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdatePlanetInput {
    pub id: ID,
    pub name: Option<String>,
    pub climate: MaybeUndefined<String>,
    pub terrain: MaybeUndefined<String>,
}

impl UpdatePlanetInput {
    pub fn into_patch(self) -> Result<(PlanetId, PlanetPatch)> {
        let id = parse_id(&self.id, "Planet")?;
        Ok((
            id,
            PlanetPatch {
                name: self.name,
                climate: patch_field(self.climate),
                terrain: patch_field(self.terrain),
            },
        ))
    }
}

#[derive(Debug, InputObject)]
pub struct CreateCharacterInput {
    pub name: String,
    pub species: Option<String>,
    pub home_planet_id: Option<ID>,
}

impl CreateCharacterInput {
    pub fn into_new(self) -> Result<NewCharacter> {
        let home_planet_id = self
            .home_planet_id
            .map(|id| parse_id::<PlanetId>(&id, "Planet"))
            .transpose()?;
        Ok(NewCharacter {
            name: self.name,
            species: self.species,
            home_planet_id,
        })
    }
}

#[derive(Debug, InputObject)]
pub struct UpdateCharacterInput {
    pub id: ID,
    pub name: Option<String>,
    pub species: MaybeUndefined<String>,
    pub home_planet_id: MaybeUndefined<ID>,
}

impl UpdateCharacterInput {
    pub fn into_patch(self) -> Result<(CharacterId, CharacterPatch)> {
        let id = parse_id(&self.id, "Character")?;
        let home_planet_id = match self.home_planet_id {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(pid) => Some(Some(parse_id::<PlanetId>(&pid, "Planet")?)),
        };
        Ok((
            id,
            CharacterPatch {
                name: self.name,
                species: patch_field(self.species),
                home_planet_id,
            },
        ))
    }
}

#[derive(Debug, InputObject)]
pub struct CreateStarshipInput {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl From<CreateStarshipInput> for NewStarship {
    fn from(input: CreateStarshipInput) -> Self {
        NewStarship {
            name: input.name,
            model: input.model,
            manufacturer: input.manufacturer,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdateStarshipInput {
    pub id: ID,
    pub name: Option<String>,
    pub model: MaybeUndefined<String>,
    pub manufacturer: MaybeUndefined<String>,
}

impl UpdateStarshipInput {
    pub fn into_patch(self) -> Result<(StarshipId, StarshipPatch)> {
        let id = parse_id(&self.id, "Starship")?;
        Ok((
            id,
            StarshipPatch {
                name: self.name,
                model: patch_field(self.model),
                manufacturer: patch_field(self.manufacturer),
            },
        ))
    }
}

#[derive(Debug, InputObject)]
pub struct AssignStarshipInput {
    pub character_id: ID,
    pub starship_id: ID,
}

impl AssignStarshipInput {
    pub fn into_ids(self) -> Result<(CharacterId, StarshipId)> {
        Ok((
            parse_id(&self.character_id, "Character")?,
            parse_id(&self.starship_id, "Starship")?,
        ))
    }
}
