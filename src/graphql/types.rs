//! GraphQL object types.
//!
//! Each object wraps the row loaded by its parent resolver. Nested
//! relations are fetched lazily through the [`RelationLoader`].

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use holonet_db::models::{Character, Planet, Starship};

use super::error::api_error;
use super::loader::RelationLoader;

fn loader<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn RelationLoader>> {
    ctx.data::<Arc<dyn RelationLoader>>()
}

/// A planet and its residents.
pub struct PlanetObject(pub Planet);

#[Object(name = "Planet")]
impl PlanetObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.get())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn climate(&self) -> Option<&str> {
        self.0.climate.as_deref()
    }

    async fn terrain(&self) -> Option<&str> {
        self.0.terrain.as_deref()
    }

    /// Characters whose home planet this is.
    async fn residents(&self, ctx: &Context<'_>) -> Result<Vec<CharacterObject>> {
        let rows = loader(ctx)?
            .residents(self.0.id)
            .await
            .map_err(api_error)?;
        Ok(rows.into_iter().map(CharacterObject).collect())
    }
}

/// A character, their home planet and the starships they pilot.
pub struct CharacterObject(pub Character);

#[Object(name = "Character")]
impl CharacterObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.get())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn species(&self) -> Option<&str> {
        self.0.species.as_deref()
    }

    async fn home_planet(&self, ctx: &Context<'_>) -> Result<Option<PlanetObject>> {
        let Some(planet_id) = self.0.home_planet_id else {
            return Ok(None);
        };
        let planet = loader(ctx)?.planet(planet_id).await.map_err(api_error)?;
        Ok(planet.map(PlanetObject))
    }

    async fn piloted_starships(&self, ctx: &Context<'_>) -> Result<Vec<StarshipObject>> {
        let rows = loader(ctx)?
            .piloted_starships(self.0.id)
            .await
            .map_err(api_error)?;
        Ok(rows.into_iter().map(StarshipObject).collect())
    }
}

/// A starship and its pilots.
pub struct StarshipObject(pub Starship);

#[Object(name = "Starship")]
impl StarshipObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.get())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn model(&self) -> Option<&str> {
        self.0.model.as_deref()
    }

    async fn manufacturer(&self) -> Option<&str> {
        self.0.manufacturer.as_deref()
    }

    async fn pilots(&self, ctx: &Context<'_>) -> Result<Vec<CharacterObject>> {
        let rows = loader(ctx)?
            .pilots(self.0.id)
            .await
            .map_err(api_error)?;
        Ok(rows.into_iter().map(CharacterObject).collect())
    }
}
