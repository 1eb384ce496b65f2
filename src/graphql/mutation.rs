use async_graphql::{Context, Object, Result, ID};
use holonet_common::{CharacterId, PlanetId, StarshipId};
use holonet_db::models::{NewPlanet, NewStarship};
use holonet_db::queries::{assignments, characters, planets, starships};

use super::error::parse_id;
use super::inputs::{
    AssignStarshipInput, CreateCharacterInput, CreatePlanetInput, CreateStarshipInput,
    UpdateCharacterInput, UpdatePlanetInput, UpdateStarshipInput,
};
use super::types::{CharacterObject, PlanetObject, StarshipObject};
use super::with_conn;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_planet(
        &self,
        ctx: &Context<'_>,
        input: CreatePlanetInput,
    ) -> Result<PlanetObject> {
        let new = NewPlanet::from(input);
        let planet = with_conn(ctx, |conn| planets::create_planet(conn, &new))?;
        tracing::info!(planet_id = %planet.id, name = %planet.name, "Planet created");
        Ok(PlanetObject(planet))
    }

    async fn update_planet(
        &self,
        ctx: &Context<'_>,
        input: UpdatePlanetInput,
    ) -> Result<PlanetObject> {
        let (id, patch) = input.into_patch()?;
        let planet = with_conn(ctx, |conn| planets::update_planet(conn, id, patch))?;
        Ok(PlanetObject(planet))
    }

    async fn delete_planet(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id: PlanetId = parse_id(&id, "Planet")?;
        let deleted = with_conn(ctx, |conn| planets::delete_planet(conn, id))?;
        tracing::info!(planet_id = %id, "Planet deleted");
        Ok(deleted)
    }

    async fn create_character(
        &self,
        ctx: &Context<'_>,
        input: CreateCharacterInput,
    ) -> Result<CharacterObject> {
        let new = input.into_new()?;
        let character = with_conn(ctx, |conn| characters::create_character(conn, &new))?;
        tracing::info!(
            character_id = %character.id,
            name = %character.name,
            "Character created"
        );
        Ok(CharacterObject(character))
    }

    async fn update_character(
        &self,
        ctx: &Context<'_>,
        input: UpdateCharacterInput,
    ) -> Result<CharacterObject> {
        let (id, patch) = input.into_patch()?;
        let character = with_conn(ctx, |conn| characters::update_character(conn, id, patch))?;
        Ok(CharacterObject(character))
    }

    async fn delete_character(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id: CharacterId = parse_id(&id, "Character")?;
        let deleted = with_conn(ctx, |conn| characters::delete_character(conn, id))?;
        tracing::info!(character_id = %id, "Character deleted");
        Ok(deleted)
    }

    async fn create_starship(
        &self,
        ctx: &Context<'_>,
        input: CreateStarshipInput,
    ) -> Result<StarshipObject> {
        let new = NewStarship::from(input);
        let starship = with_conn(ctx, |conn| starships::create_starship(conn, &new))?;
        tracing::info!(starship_id = %starship.id, name = %starship.name, "Starship created");
        Ok(StarshipObject(starship))
    }

    async fn update_starship(
        &self,
        ctx: &Context<'_>,
        input: UpdateStarshipInput,
    ) -> Result<StarshipObject> {
        let (id, patch) = input.into_patch()?;
        let starship = with_conn(ctx, |conn| starships::update_starship(conn, id, patch))?;
        Ok(StarshipObject(starship))
    }

    async fn delete_starship(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id: StarshipId = parse_id(&id, "Starship")?;
        let deleted = with_conn(ctx, |conn| starships::delete_starship(conn, id))?;
        tracing::info!(starship_id = %id, "Starship deleted");
        Ok(deleted)
    }

    /// Link a pilot to a starship. Repeating an existing link is a no-op.
    async fn assign_starship(
        &self,
        ctx: &Context<'_>,
        input: AssignStarshipInput,
    ) -> Result<CharacterObject> {
        let (character_id, starship_id) = input.into_ids()?;
        let character = with_conn(ctx, |conn| {
            assignments::assign_starship(conn, character_id, starship_id)
        })?;
        Ok(CharacterObject(character))
    }
}
