//! Database query modules.
//!
//! This module organizes all database operations into logical groups:
//! - planets: Planet CRUD and the residency guard on delete
//! - characters: Character CRUD, residents lookup, cascading delete
//! - starships: Starship CRUD and cascading delete
//! - assignments: The character/starship piloting relation
//!
//! Every write opens its own transaction on the connection it is given.
//! Returning early drops the transaction, which rolls it back.

pub mod assignments;
pub mod characters;
pub mod planets;
pub mod starships;

use holonet_common::Error;

/// Convert a rusqlite error into the common Database error.
pub(crate) fn db_err(e: rusqlite::Error) -> Error {
    Error::database(e.to_string())
}

/// Whether the error is a UNIQUE or PRIMARY KEY constraint violation.
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    match e {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == rusqlite::ErrorCode::ConstraintViolation
                && (err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        }
        _ => false,
    }
}

/// Map a write failure, turning unique violations into DuplicateKey.
pub(crate) fn write_err(e: rusqlite::Error, duplicate: impl FnOnce() -> String) -> Error {
    if is_unique_violation(&e) {
        Error::duplicate_key(duplicate())
    } else {
        db_err(e)
    }
}

/// Whether a row with the given id exists in `table`.
pub(crate) fn row_exists(
    conn: &rusqlite::Connection,
    table: &str,
    id: i64,
) -> holonet_common::Result<bool> {
    conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)"),
        [id],
        |row| row.get(0),
    )
    .map_err(db_err)
}
