//! Nested relation loading.
//!
//! Object fields such as `Character.homePlanet` resolve through the
//! [`RelationLoader`] stored in schema data rather than calling the query
//! modules directly. [`PoolLoader`] issues one pooled round trip per field
//! per parent object; a batching implementation can replace it through
//! [`crate::graphql::build_schema_with_loader`] without touching the
//! resolvers.

use async_trait::async_trait;
use holonet_common::{CharacterId, PlanetId, Result, StarshipId};
use holonet_db::models::{Character, Planet, Starship};
use holonet_db::pool::{get_conn, DbPool};
use holonet_db::queries::{assignments, characters, planets};

/// Source of related rows for nested GraphQL fields.
#[async_trait]
pub trait RelationLoader: Send + Sync {
    /// The planet a character calls home.
    async fn planet(&self, id: PlanetId) -> Result<Option<Planet>>;

    /// Characters living on a planet.
    async fn residents(&self, planet_id: PlanetId) -> Result<Vec<Character>>;

    /// Starships a character pilots.
    async fn piloted_starships(&self, character_id: CharacterId) -> Result<Vec<Starship>>;

    /// Characters piloting a starship.
    async fn pilots(&self, starship_id: StarshipId) -> Result<Vec<Character>>;
}

/// Loader that checks out a fresh pooled connection for every lookup.
#[derive(Clone)]
pub struct PoolLoader {
    pool: DbPool,
}

impl PoolLoader {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationLoader for PoolLoader {
    async fn planet(&self, id: PlanetId) -> Result<Option<Planet>> {
        let conn = get_conn(&self.pool)?;
        planets::get_planet(&conn, id)
    }

    async fn residents(&self, planet_id: PlanetId) -> Result<Vec<Character>> {
        let conn = get_conn(&self.pool)?;
        characters::planet_residents(&conn, planet_id)
    }

    async fn piloted_starships(&self, character_id: CharacterId) -> Result<Vec<Starship>> {
        let conn = get_conn(&self.pool)?;
        assignments::character_starships(&conn, character_id)
    }

    async fn pilots(&self, starship_id: StarshipId) -> Result<Vec<Character>> {
        let conn = get_conn(&self.pool)?;
        assignments::starship_pilots(&conn, starship_id)
    }
}
