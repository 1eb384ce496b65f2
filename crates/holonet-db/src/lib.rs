//! Holonet-DB: Database schema, migrations, and query operations
//!
//! This crate provides the relational data-access layer for holonet using
//! SQLite with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema, plus create/patch inputs
//! - `queries` - Database query operations
//! - `seed` - Development fixture population
//!
//! # Example
//!
//! ```no_run
//! use holonet_db::models::NewPlanet;
//! use holonet_db::pool::{get_conn, init_pool};
//! use holonet_db::queries::planets;
//!
//! let pool = init_pool("/var/lib/holonet/holonet.db").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let planet = planets::create_planet(&conn, &NewPlanet::named("Hoth")).unwrap();
//! println!("Created planet: {}", planet.name);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
