//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order. A
//! `schema_migrations` table tracks which versions have been applied, so
//! running the migrations against an initialized store is a no-op.

use holonet_common::{Error, Result};
use rusqlite::Connection;

/// V1: the planets/characters/starships schema and the piloting relation.
///
/// `IF NOT EXISTS` lets the runner adopt a store whose tables were created
/// before version tracking existed.
const V1_INITIAL: &str = r#"
CREATE TABLE IF NOT EXISTS planets (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT UNIQUE NOT NULL,
    climate TEXT,
    terrain TEXT
);

CREATE TABLE IF NOT EXISTS characters (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT UNIQUE NOT NULL,
    species        TEXT,
    home_planet_id INTEGER,
    FOREIGN KEY (home_planet_id) REFERENCES planets (id)
);

CREATE TABLE IF NOT EXISTS starships (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT UNIQUE NOT NULL,
    model        TEXT,
    manufacturer TEXT
);

CREATE TABLE IF NOT EXISTS character_starships (
    character_id INTEGER,
    starship_id  INTEGER,
    PRIMARY KEY (character_id, starship_id),
    FOREIGN KEY (character_id) REFERENCES characters (id),
    FOREIGN KEY (starship_id) REFERENCES starships (id)
);
"#;

/// V2: lookup indexes for the residency and piloting joins.
const V2_RELATION_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_characters_home_planet ON characters(home_planet_id);
CREATE INDEX IF NOT EXISTS idx_character_starships_starship ON character_starships(starship_id);
"#;

const MIGRATIONS: &[(i64, &str, &str)] = &[
    (1, "initial", V1_INITIAL),
    (2, "relation_indexes", V2_RELATION_INDEXES),
];

fn init_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::database(format!("Failed to create schema_migrations: {e}")))
}

/// Run all pending migrations, returning how many were applied.
///
/// Each migration runs in its own transaction together with the row that
/// records it.
pub fn run_migrations(conn: &Connection) -> Result<usize> {
    init_migrations_table(conn)?;

    let mut applied = 0;
    for &(version, name, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::database(e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
            rusqlite::params![version, name],
        )
        .map_err(|e| Error::database(e.to_string()))?;

        tx.commit().map_err(|e| Error::database(e.to_string()))?;

        applied += 1;
        tracing::info!(version, name, "Applied migration");
    }

    Ok(applied)
}

/// Get the current schema version without applying migrations.
pub fn current_version(conn: &Connection) -> Result<i64> {
    init_migrations_table(conn)?;

    conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
        row.get::<_, Option<i64>>(0)
    })
    .map(|v| v.unwrap_or(0))
    .map_err(|e| Error::database(e.to_string()))
}

/// Get the latest available migration version.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.0).unwrap_or(0)
}
