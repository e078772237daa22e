//! Data-driven content definitions and loaders.
//!
//! This crate houses the unit and skill catalogs and the battle rules file:
//! - Unit templates (data-driven via RON)
//! - Skill records (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! A default catalog is compiled in; [`ContentFactory`] loads a replacement
//! from a data directory. Content never appears in game state directly:
//! scenarios resolve templates into `game_core::UnitSpec` records at
//! placement time.

#[cfg(feature = "loaders")]
pub mod catalog;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use catalog::{Catalog, SkillCatalog, UnitCatalog, UnitTemplate};
#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SkillLoader, UnitLoader};
