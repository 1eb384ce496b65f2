//! Holonet-Common: Shared types and error handling.
//!
//! This crate provides common functionality used across holonet:
//!
//! - **Typed IDs**: Integer row id wrappers for planets, characters and starships
//! - **Error Handling**: The business error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use holonet_common::{Error, PlanetId, Result};
//!
//! let planet_id = PlanetId::from(7);
//! assert_eq!(planet_id.get(), 7);
//!
//! fn example(id: PlanetId) -> Result<()> {
//!     Err(Error::not_found("Planet", id))
//! }
//! assert!(example(planet_id).is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
