//! Holonet - GraphQL data-access service for planets, characters and starships
//!
//! This library crate exposes the configuration, GraphQL schema and HTTP
//! server for integration testing.

pub mod config;
pub mod graphql;
pub mod server;
