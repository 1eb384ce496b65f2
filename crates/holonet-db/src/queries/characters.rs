//! Character database queries.
//!
//! Deleting a character removes its piloting assignments in the same
//! transaction as the character row.

use holonet_common::{CharacterId, Error, PlanetId, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use super::planets::planet_exists;
use super::{db_err, row_exists, write_err};
use crate::models::{Character, CharacterPatch, NewCharacter};

pub(crate) const SELECT_CHARACTER: &str =
    "SELECT id, name, species, home_planet_id FROM characters";

pub(crate) fn character_from_row(row: &Row<'_>) -> rusqlite::Result<Character> {
    Ok(Character {
        id: CharacterId::from(row.get::<_, i64>(0)?),
        name: row.get(1)?,
        species: row.get(2)?,
        home_planet_id: row.get::<_, Option<i64>>(3)?.map(PlanetId::from),
    })
}

fn query_characters(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Character>> {
    let mut stmt = conn.prepare(sql).map_err(db_err)?;
    let characters = stmt
        .query_map(params, character_from_row)
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;
    Ok(characters)
}

/// List all characters in id order.
pub fn list_characters(conn: &Connection) -> Result<Vec<Character>> {
    query_characters(conn, &format!("{SELECT_CHARACTER} ORDER BY id"), [])
}

/// Get a character by ID.
pub fn get_character(conn: &Connection, id: CharacterId) -> Result<Option<Character>> {
    conn.query_row(
        &format!("{SELECT_CHARACTER} WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
        character_from_row,
    )
    .optional()
    .map_err(db_err)
}

/// Whether a character with this ID exists.
pub fn character_exists(conn: &Connection, id: CharacterId) -> Result<bool> {
    row_exists(conn, "characters", id.get())
}

/// Characters whose home planet is `planet_id`.
pub fn planet_residents(conn: &Connection, planet_id: PlanetId) -> Result<Vec<Character>> {
    query_characters(
        conn,
        &format!("{SELECT_CHARACTER} WHERE home_planet_id = :planet_id ORDER BY id"),
        rusqlite::named_params! { ":planet_id": planet_id.get() },
    )
}

fn ensure_planet(conn: &Connection, planet_id: Option<PlanetId>) -> Result<()> {
    match planet_id {
        Some(pid) if !planet_exists(conn, pid)? => Err(Error::not_found("Planet", pid)),
        _ => Ok(()),
    }
}

/// Create a new character.
///
/// # Returns
///
/// * `Ok(Character)` - The stored character
/// * `Err(Error::NotFound)` - If `home_planet_id` names a missing planet
/// * `Err(Error::DuplicateKey)` - If the name is already taken
pub fn create_character(conn: &Connection, new: &NewCharacter) -> Result<Character> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    ensure_planet(&tx, new.home_planet_id)?;

    tx.execute(
        "INSERT INTO characters (name, species, home_planet_id)
         VALUES (:name, :species, :home_planet_id)",
        rusqlite::named_params! {
            ":name": new.name,
            ":species": new.species,
            ":home_planet_id": new.home_planet_id.map(|p| p.get()),
        },
    )
    .map_err(|e| write_err(e, || format!("Character '{}' already exists", new.name)))?;

    let id = CharacterId::from(tx.last_insert_rowid());
    let character = get_character(&tx, id)?
        .ok_or_else(|| Error::internal(format!("character {id} vanished after insert")))?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(character_id = %id, name = %character.name, "Created character");
    Ok(character)
}

/// Apply a partial update to a character.
///
/// # Returns
///
/// * `Ok(Character)` - The character as stored after the update
/// * `Err(Error::NotFound)` - If the character, or a newly named home planet, does not exist
/// * `Err(Error::DuplicateKey)` - If the new name collides with another character
pub fn update_character(
    conn: &Connection,
    id: CharacterId,
    patch: CharacterPatch,
) -> Result<Character> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    let current = get_character(&tx, id)?.ok_or_else(|| Error::not_found("Character", id))?;
    if let Some(home) = patch.home_planet_id {
        ensure_planet(&tx, home)?;
    }
    let merged = patch.apply(current);

    tx.execute(
        "UPDATE characters
         SET name = :name, species = :species, home_planet_id = :home_planet_id
         WHERE id = :id",
        rusqlite::named_params! {
            ":id": id.get(),
            ":name": merged.name,
            ":species": merged.species,
            ":home_planet_id": merged.home_planet_id.map(|p| p.get()),
        },
    )
    .map_err(|e| write_err(e, || format!("Character name '{}' is already in use", merged.name)))?;

    let character = get_character(&tx, id)?.ok_or_else(|| Error::not_found("Character", id))?;
    tx.commit().map_err(db_err)?;

    tracing::debug!(character_id = %id, "Updated character");
    Ok(character)
}

/// Delete a character and its piloting assignments atomically.
///
/// # Returns
///
/// * `Ok(true)` - If the character was deleted
/// * `Err(Error::NotFound)` - If the character does not exist
pub fn delete_character(conn: &Connection, id: CharacterId) -> Result<bool> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    if !character_exists(&tx, id)? {
        return Err(Error::not_found("Character", id));
    }

    let unassigned = tx
        .execute(
            "DELETE FROM character_starships WHERE character_id = :id",
            rusqlite::named_params! { ":id": id.get() },
        )
        .map_err(db_err)?;

    tx.execute(
        "DELETE FROM characters WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
    )
    .map_err(db_err)?;

    tx.commit().map_err(db_err)?;

    tracing::debug!(character_id = %id, unassigned, "Deleted character");
    Ok(true)
}
