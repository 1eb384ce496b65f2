//! Development fixture population.
//!
//! [`seed`] wipes every row and inserts a fixed set of planets, characters,
//! starships and assignments. It is destructive and meant for local
//! development only.

use std::collections::HashMap;

use holonet_common::{Error, Result};
use rusqlite::Connection;

use crate::queries::db_err;

const PLANETS: &[(&str, &str, &str)] = &[
    ("Tatooine", "Arid", "Desert"),
    ("Alderaan", "Temperate", "Grasslands, Mountains"),
    ("Yavin IV", "Temperate, Humid", "Jungle, Rainforests"),
    ("Naboo", "Temperate", "Grassy Hills, Swamps"),
    ("Coruscant", "Temperate", "Cityscape"),
];

const CHARACTERS: &[(&str, &str, Option<&str>)] = &[
    ("Luke Skywalker", "Human", Some("Tatooine")),
    ("Leia Organa", "Human", Some("Alderaan")),
    ("Han Solo", "Human", None),
    ("C-3PO", "Droid", None),
    ("Yoda", "Unknown", None),
];

const STARSHIPS: &[(&str, &str, &str)] = &[
    ("Millennium Falcon", "YT-1300 light freighter", "Corellian Engineering"),
    ("X-wing", "T-65 X-wing starfighter", "Incom Corporation"),
    ("TIE Fighter", "TIE/LN starfighter", "Sienar Fleet Systems"),
];

const ASSIGNMENTS: &[(&str, &str)] = &[
    ("Han Solo", "Millennium Falcon"),
    ("Luke Skywalker", "X-wing"),
];

/// Row counts inserted by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub planets: usize,
    pub characters: usize,
    pub starships: usize,
    pub assignments: usize,
}

/// Delete all rows in dependency order.
pub fn clear_all(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DELETE FROM character_starships;
         DELETE FROM characters;
         DELETE FROM starships;
         DELETE FROM planets;",
    )
    .map_err(db_err)
}

/// Replace the store's contents with the fixture set, in one transaction.
pub fn seed(conn: &Connection) -> Result<SeedSummary> {
    let tx = conn.unchecked_transaction().map_err(db_err)?;
    clear_all(&tx)?;

    let mut summary = SeedSummary::default();
    let mut planet_ids = HashMap::new();
    for &(name, climate, terrain) in PLANETS {
        tx.execute(
            "INSERT INTO planets (name, climate, terrain) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, climate, terrain],
        )
        .map_err(db_err)?;
        planet_ids.insert(name, tx.last_insert_rowid());
        summary.planets += 1;
    }

    let mut character_ids = HashMap::new();
    for &(name, species, home) in CHARACTERS {
        let home_planet_id = home.map(|p| lookup(&planet_ids, p)).transpose()?;
        tx.execute(
            "INSERT INTO characters (name, species, home_planet_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, species, home_planet_id],
        )
        .map_err(db_err)?;
        character_ids.insert(name, tx.last_insert_rowid());
        summary.characters += 1;
    }

    let mut starship_ids = HashMap::new();
    for &(name, model, manufacturer) in STARSHIPS {
        tx.execute(
            "INSERT INTO starships (name, model, manufacturer) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, model, manufacturer],
        )
        .map_err(db_err)?;
        starship_ids.insert(name, tx.last_insert_rowid());
        summary.starships += 1;
    }

    for &(pilot, ship) in ASSIGNMENTS {
        tx.execute(
            "INSERT INTO character_starships (character_id, starship_id) VALUES (?1, ?2)",
            rusqlite::params![lookup(&character_ids, pilot)?, lookup(&starship_ids, ship)?],
        )
        .map_err(db_err)?;
        summary.assignments += 1;
    }

    tx.commit().map_err(db_err)?;

    tracing::info!(
        planets = summary.planets,
        characters = summary.characters,
        starships = summary.starships,
        assignments = summary.assignments,
        "Seeded database"
    );
    Ok(summary)
}

fn lookup(ids: &HashMap<&str, i64>, name: &str) -> Result<i64> {
    ids.get(name)
        .copied()
        .ok_or_else(|| Error::internal(format!("seed fixture references unknown row '{name}'")))
}
