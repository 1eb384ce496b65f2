//! Planet database queries.
//!
//! This module provides CRUD operations for planets. A planet cannot be
//! deleted while any character names it as home.

use holonet_common::{Error, PlanetId, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{db_err, row_exists, write_err};
use crate::models::{NewPlanet, Planet, PlanetPatch};

const SELECT_PLANET: &str = "SELECT id, name, climate, terrain FROM planets";

pub(crate) fn planet_from_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: PlanetId::from(row.get::<_, i64>(0)?),
        name: row.get(1)?,
        climate: row.get(2)?,
        terrain: row.get(3)?,
    })
}

/// List all planets in id order.
pub fn list_planets(conn: &Connection) -> Result<Vec<Planet>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_PLANET} ORDER BY id"))
        .map_err(db_err)?;

    let planets = stmt
        .query_map([], planet_from_row)
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok(planets)
}

/// Get a planet by ID.
///
/// # Returns
///
/// * `Ok(Some(Planet))` - The planet if found
/// * `Ok(None)` - If the planet does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_planet(conn: &Connection, id: PlanetId) -> Result<Option<Planet>> {
    conn.query_row(
        &format!("{SELECT_PLANET} WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        planet_from_row,
    )
    .optional()
    .map_err(db_err)
}

/// Whether a planet with this ID exists.
pub fn planet_exists(conn: &Connection, id: PlanetId) -> Result<bool> {
    row_exists(conn, "planets", id.get())
}

/// Number of characters whose home planet is `id`.
pub fn count_residents(conn: &Connection, id: PlanetId) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM characters WHERE home_planet_id = :id",
        rusqlite::named_params! { ":id": id.get() },
        |row| row.get(0),
    )
    .map_err(db_err)
}

/// Create a new planet.
///
/// # Returns
///
/// * `Ok(Planet)` - The stored planet
/// * `Err(Error::DuplicateKey)` - If the name is already taken
pub fn create_planet(conn: &Connection, new: &NewPlanet) -> Result<Planet> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    tx.execute(
        "INSERT INTO planets (name, climate, terrain) VALUES (:name, :climate, :terrain)",
        rusqlite::named_params! {
            ":name": new.name,
            ":climate": new.climate,
            ":terrain": new.terrain,
        },
    )
    .map_err(|e| write_err(e, || format!("Planet '{}' already exists", new.name)))?;

    let id = PlanetId::from(tx.last_insert_rowid());
    let planet = get_planet(&tx, id)?
        .ok_or_else(|| Error::internal(format!("planet {id} vanished after insert")))?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(planet_id = %id, name = %planet.name, "Created planet");
    Ok(planet)
}

/// Apply a partial update to a planet.
///
/// Fields omitted from the patch keep their stored value.
///
/// # Returns
///
/// * `Ok(Planet)` - The planet as stored after the update
/// * `Err(Error::NotFound)` - If the planet does not exist
/// * `Err(Error::DuplicateKey)` - If the new name collides with another planet
pub fn update_planet(conn: &Connection, id: PlanetId, patch: PlanetPatch) -> Result<Planet> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    let current = get_planet(&tx, id)?.ok_or_else(|| Error::not_found("Planet", id))?;
    let merged = patch.apply(current);

    tx.execute(
        "UPDATE planets SET name = :name, climate = :climate, terrain = :terrain WHERE id = :id",
        rusqlite::named_params! {
            ":id": id.get(),
            ":name": merged.name,
            ":climate": merged.climate,
            ":terrain": merged.terrain,
        },
    )
    .map_err(|e| write_err(e, || format!("Planet name '{}' is already in use", merged.name)))?;

    let planet = get_planet(&tx, id)?.ok_or_else(|| Error::not_found("Planet", id))?;
    tx.commit().map_err(db_err)?;

    tracing::debug!(planet_id = %id, "Updated planet");
    Ok(planet)
}

/// Delete a planet.
///
/// # Returns
///
/// * `Ok(true)` - If the planet was deleted
/// * `Err(Error::NotFound)` - If the planet does not exist
/// * `Err(Error::Conflict)` - If at least one character lives there
pub fn delete_planet(conn: &Connection, id: PlanetId) -> Result<bool> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    if !planet_exists(&tx, id)? {
        return Err(Error::not_found("Planet", id));
    }

    let residents = count_residents(&tx, id)?;
    if residents > 0 {
        return Err(Error::conflict(format!(
            "Cannot delete planet {id} with {residents} resident(s)"
        )));
    }

    tx.execute(
        "DELETE FROM planets WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
    )
    .map_err(db_err)?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(planet_id = %id, "Deleted planet");
    Ok(true)
}
