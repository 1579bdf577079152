pub mod catalog;
pub mod config;
pub mod ffi;
pub mod model;
pub mod search;

pub use catalog::{locate_catalog, Catalog, CatalogError};
pub use config::{ConfigError, FinderConfig};
pub use model::*;
pub use search::{
    find_possible_recipes, no_match_message, search_for_recipe, Query, QueryError, QueryMode,
};

uniffi::setup_scaffolding!();
