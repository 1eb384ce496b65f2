//! Character/starship piloting assignments.
//!
//! Assigning the same pair twice is a no-op: the composite primary key
//! absorbs the duplicate via `INSERT OR IGNORE`.

use holonet_common::{CharacterId, Error, Result, StarshipId};
use rusqlite::Connection;

use super::characters::{character_exists, character_from_row, get_character};
use super::db_err;
use super::starships::{starship_exists, starship_from_row};
use crate::models::{Assignment, Character, Starship};

/// Assign a starship to a character, returning the character.
///
/// # Returns
///
/// * `Ok(Character)` - The pilot, whether or not the link already existed
/// * `Err(Error::NotFound)` - If the character or the starship does not exist
pub fn assign_starship(
    conn: &Connection,
    character_id: CharacterId,
    starship_id: StarshipId,
) -> Result<Character> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;

    if !character_exists(&tx, character_id)? {
        return Err(Error::not_found("Character", character_id));
    }
    if !starship_exists(&tx, starship_id)? {
        return Err(Error::not_found("Starship", starship_id));
    }

    let inserted = tx
        .execute(
            "INSERT OR IGNORE INTO character_starships (character_id, starship_id)
             VALUES (:character_id, :starship_id)",
            rusqlite::named_params! {
                ":character_id": character_id.get(),
                ":starship_id": starship_id.get(),
            },
        )
        .map_err(db_err)?;

    let character = get_character(&tx, character_id)?
        .ok_or_else(|| Error::not_found("Character", character_id))?;

    tx.commit().map_err(db_err)?;

    if inserted == 0 {
        tracing::debug!(%character_id, %starship_id, "Assignment already present");
    } else {
        tracing::debug!(%character_id, %starship_id, "Assigned starship");
    }
    Ok(character)
}

/// Starships piloted by a character.
pub fn character_starships(conn: &Connection, character_id: CharacterId) -> Result<Vec<Starship>> {
    let mut stmt = conn
        .prepare(
            "SELECT s.id, s.name, s.model, s.manufacturer
             FROM starships s
             JOIN character_starships cs ON s.id = cs.starship_id
             WHERE cs.character_id = :character_id
             ORDER BY s.id",
        )
        .map_err(db_err)?;

    let starships = stmt
        .query_map(
            rusqlite::named_params! { ":character_id": character_id.get() },
            starship_from_row,
        )
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok(starships)
}

/// Characters piloting a starship.
pub fn starship_pilots(conn: &Connection, starship_id: StarshipId) -> Result<Vec<Character>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.name, c.species, c.home_planet_id
             FROM characters c
             JOIN character_starships cs ON c.id = cs.character_id
             WHERE cs.starship_id = :starship_id
             ORDER BY c.id",
        )
        .map_err(db_err)?;

    let pilots = stmt
        .query_map(
            rusqlite::named_params! { ":starship_id": starship_id.get() },
            character_from_row,
        )
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok(pilots)
}

/// All assignment rows, ordered by character then starship.
pub fn list_assignments(conn: &Connection) -> Result<Vec<Assignment>> {
    let mut stmt = conn
        .prepare(
            "SELECT character_id, starship_id FROM character_starships
             ORDER BY character_id, starship_id",
        )
        .map_err(db_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Assignment {
                character_id: CharacterId::from(row.get::<_, i64>(0)?),
                starship_id: StarshipId::from(row.get::<_, i64>(1)?),
            })
        })
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok(rows)
}
