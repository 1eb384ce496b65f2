//! GraphQL API surface.
//!
//! Root queries and mutations map one-to-one onto the `holonet_db` query
//! functions. Each root resolver checks out its own pooled connection via
//! [`with_conn`]; the guard returns it to the pool on every exit path.
//! Nested fields go through the [`RelationLoader`] in schema data.

pub mod error;
pub mod inputs;
pub mod loader;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};
use holonet_db::pool::{get_conn, DbPool};
use rusqlite::Connection;

pub use error::ApiError;
pub use loader::{PoolLoader, RelationLoader};
pub use mutation::MutationRoot;
pub use query::QueryRoot;

use self::error::api_error;

/// The executable holonet schema.
pub type HolonetSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the default one-round-trip-per-field loader.
pub fn build_schema(pool: DbPool) -> HolonetSchema {
    let loader = Arc::new(PoolLoader::new(pool.clone()));
    build_schema_with_loader(pool, loader)
}

/// Build the schema with a custom nested-relation loader.
pub fn build_schema_with_loader(pool: DbPool, loader: Arc<dyn RelationLoader>) -> HolonetSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .data(loader)
        .finish()
}

/// Run `op` on a connection checked out for this call only.
pub(crate) fn with_conn<T>(
    ctx: &Context<'_>,
    op: impl FnOnce(&Connection) -> holonet_common::Result<T>,
) -> async_graphql::Result<T> {
    let pool = ctx.data::<DbPool>()?;
    let conn = get_conn(pool).map_err(api_error)?;
    op(&conn).map_err(api_error)
}
