//! License Explorer Library
//!
//! Catalog store, browse controller and pure logic for the license browser.
//! The terminal front end lives in the binary.

pub mod catalog;
pub mod error;
pub mod logic;
pub mod model;

pub use catalog::{Catalog, Category, License};
pub use error::{BrowseError, CatalogError, ConfigError};
pub use model::{BrowseController, BrowseState, Filter, Model, Toggle};
