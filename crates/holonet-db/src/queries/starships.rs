//! Starship database queries.

use holonet_common::{Error, Result, StarshipId};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{db_err, row_exists, write_err};
use crate::models::{NewStarship, Starship, StarshipPatch};

pub(crate) const SELECT_STARSHIP: &str = "SELECT id, name, model, manufacturer FROM starships";

pub(crate) fn starship_from_row(row: &Row<'_>) -> rusqlite::Result<Starship> {
    Ok(Starship {
        id: StarshipId::from(row.get::<_, i64>(0)?),
        name: row.get(1)?,
        model: row.get(2)?,
        manufacturer: row.get(3)?,
    })
}

/// List all starships in id order.
pub fn list_starships(conn: &Connection) -> Result<Vec<Starship>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_STARSHIP} ORDER BY id"))
        .map_err(db_err)?;

    let starships = stmt
        .query_map([], starship_from_row)
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok(starships)
}

/// Get a starship by ID.
pub fn get_starship(conn: &Connection, id: StarshipId) -> Result<Option<Starship>> {
    conn.query_row(
        &format!("{SELECT_STARSHIP} WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        starship_from_row,
    )
    .optional()
    .map_err(db_err)
}

/// Whether a starship with this ID exists.
pub fn starship_exists(conn: &Connection, id: StarshipId) -> Result<bool> {
    row_exists(conn, "starships", id.get())
}

/// Create a new starship.
///
/// Fails with `DuplicateKey` if the name is already taken.
pub fn create_starship(conn: &Connection, new: &NewStarship) -> Result<Starship> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    tx.execute(
        "INSERT INTO starships (name, model, manufacturer)
         VALUES (:name, :model, :manufacturer)",
        rusqlite::named_params! {
            ":name": new.name,
            ":model": new.model,
            ":manufacturer": new.manufacturer,
        },
    )
    .map_err(|e| write_err(e, || format!("Starship '{}' already exists", new.name)))?;

    let id = StarshipId::from(tx.last_insert_rowid());
    let starship = get_starship(&tx, id)?
        .ok_or_else(|| Error::internal(format!("starship {id} vanished after insert")))?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(starship_id = %id, name = %starship.name, "Created starship");
    Ok(starship)
}

/// Apply a partial update to a starship.
///
/// Fails with `NotFound` if the starship does not exist and with
/// `DuplicateKey` if the new name collides.
pub fn update_starship(
    conn: &Connection,
    id: StarshipId,
    patch: StarshipPatch,
) -> Result<Starship> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    let current = get_starship(&tx, id)?.ok_or_else(|| Error::not_found("Starship", id))?;
    let merged = patch.apply(current);

    tx.execute(
        "UPDATE starships
         SET name = :name, model = :model, manufacturer = :manufacturer
         WHERE id = :id",
        rusqlite::named_params! {
            ":id": id.get(),
            ":name": merged.name,
            ":model": merged.model,
            ":manufacturer": merged.manufacturer,
        },
    )
    .map_err(|e| write_err(e, || format!("Starship name '{}' is already in use", merged.name)))?;

    let starship = get_starship(&tx, id)?.ok_or_else(|| Error::not_found("Starship", id))?;
    tx.commit().map_err(db_err)?;

    tracing::debug!(starship_id = %id, "Updated starship");
    Ok(starship)
}

/// Delete a starship and its pilot assignments atomically.
pub fn delete_starship(conn: &Connection, id: StarshipId) -> Result<bool> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    if !starship_exists(&tx, id)? {
        return Err(Error::not_found("Starship", id));
    }

    let unassigned = tx
        .execute(
            "DELETE FROM character_starships WHERE starship_id = :id",
            rusqlite::named_params! { ":id": id.get() },
        )
        .map_err(db_err)?;

    tx.execute(
        "DELETE FROM starships WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
    )
    .map_err(db_err)?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(starship_id = %id, unassigned, "Deleted starship");
    Ok(true)
}
