use async_graphql::{Context, Object, Result, ID};
use holonet_common::{CharacterId, PlanetId, StarshipId};
use holonet_db::queries::{characters, planets, starships};

use super::error::parse_id;
use super::types::{CharacterObject, PlanetObject, StarshipObject};
use super::with_conn;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_planets(&self, ctx: &Context<'_>) -> Result<Vec<PlanetObject>> {
        let rows = with_conn(ctx, planets::list_planets)?;
        Ok(rows.into_iter().map(PlanetObject).collect())
    }

    async fn planet(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PlanetObject>> {
        let id: PlanetId = parse_id(&id, "Planet")?;
        let row = with_conn(ctx, |conn| planets::get_planet(conn, id))?;
        Ok(row.map(PlanetObject))
    }

    async fn all_characters(&self, ctx: &Context<'_>) -> Result<Vec<CharacterObject>> {
        let rows = with_conn(ctx, characters::list_characters)?;
        Ok(rows.into_iter().map(CharacterObject).collect())
    }

    async fn character(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CharacterObject>> {
        let id: CharacterId = parse_id(&id, "Character")?;
        let row = with_conn(ctx, |conn| characters::get_character(conn, id))?;
        Ok(row.map(CharacterObject))
    }

    async fn all_starships(&self, ctx: &Context<'_>) -> Result<Vec<StarshipObject>> {
        let rows = with_conn(ctx, starships::list_starships)?;
        Ok(rows.into_iter().map(StarshipObject).collect())
    }

    async fn starship(&self, ctx: &Context<'_>, id: ID) -> Result<Option<StarshipObject>> {
        let id: StarshipId = parse_id(&id, "Starship")?;
        let row = with_conn(ctx, |conn| starships::get_starship(conn, id))?;
        Ok(row.map(StarshipObject))
    }
}
