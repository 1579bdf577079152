//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Recipes cross the boundary as plain records; the catalog stays on the
//! Rust side behind an object handle.

use crate::catalog::{Catalog, CatalogError};
use crate::config::ConfigError;
use crate::model::{default_groups, Ingredient, Recipe};
use camino::Utf8Path;
use std::sync::Arc;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum CocktailError {
    #[error("Catalog not found: {message}")]
    NotFound { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl From<CatalogError> for CocktailError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::IoError(e) => CocktailError::IoError {
                message: e.to_string(),
            },
            CatalogError::NotFound(p) => CocktailError::NotFound {
                message: p.to_string(),
            },
            e @ (CatalogError::Empty
            | CatalogError::InvalidHeader(_)
            | CatalogError::RowLength { .. }
            | CatalogError::UnterminatedQuote { .. }) => CocktailError::ParseError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for CocktailError {
    fn from(e: ConfigError) -> Self {
        CocktailError::ConfigError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of an ingredient line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    pub name: String,
    pub group: Option<String>,
    pub amount: Option<String>,
}

impl From<&Ingredient> for FfiIngredient {
    fn from(i: &Ingredient) -> Self {
        FfiIngredient {
            name: i.name.clone(),
            group: i.group.clone(),
            amount: i.amount.clone(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub name: String,
    pub page: Option<String>,
    pub glass: Option<String>,
    pub method: Option<String>,
    pub special: Option<String>,
    pub twist: Option<String>,
    pub garnish: Option<String>,
    pub ingredients: Vec<FfiIngredient>,
    pub ingredient_groups: Vec<String>,
    /// Plain-text rendering, as printed by the CLI
    pub display: String,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            name: r.name.clone(),
            page: r.page.clone(),
            glass: r.glass.clone(),
            method: r.method.clone(),
            special: r.special.clone(),
            twist: r.twist.clone(),
            garnish: r.garnish.clone(),
            ingredients: r.ingredients.iter().map(FfiIngredient::from).collect(),
            ingredient_groups: r.ingredient_groups.clone(),
            display: r.to_string(),
        }
    }
}

fn to_records(recipes: Vec<&Recipe>) -> Vec<FfiRecipe> {
    recipes.into_iter().map(FfiRecipe::from).collect()
}

/// A loaded catalog.
#[derive(uniffi::Object)]
pub struct FfiCatalog {
    inner: Catalog,
}

#[uniffi::export]
impl FfiCatalog {
    /// Loads a catalog file using the built-in ingredient groups.
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, CocktailError> {
        let inner = Catalog::from_path(Utf8Path::new(&path), &default_groups())?;
        Ok(Arc::new(FfiCatalog { inner }))
    }

    /// Loads a catalog file with the groups from a YAML config file.
    #[uniffi::constructor]
    pub fn open_with_config(path: String, config_path: String) -> Result<Arc<Self>, CocktailError> {
        let config = crate::config::FinderConfig::from_path(Utf8Path::new(&config_path))?;
        let inner = Catalog::from_path(Utf8Path::new(&path), &config.groups)?;
        Ok(Arc::new(FfiCatalog { inner }))
    }

    /// Recipes containing all of `tokens`.
    pub fn recipes_containing(&self, tokens: Vec<String>) -> Vec<FfiRecipe> {
        to_records(self.inner.search_for_recipe(&tokens))
    }

    /// Recipes makeable from only `tokens`.
    pub fn possible_recipes(&self, tokens: Vec<String>) -> Vec<FfiRecipe> {
        to_records(self.inner.find_possible_recipes(&tokens))
    }

    /// All recipes, sorted by name.
    pub fn all_recipes(&self) -> Vec<FfiRecipe> {
        to_records(self.inner.recipes_sorted())
    }

    /// Group labels in priority order.
    pub fn groups(&self) -> Vec<String> {
        self.inner.groups().into_iter().map(String::from).collect()
    }

    /// Every ingredient name in the catalog.
    pub fn universe(&self) -> Vec<String> {
        self.inner.universe().to_vec()
    }

    /// Ingredients belonging to `group`, empty if the group is unknown.
    pub fn group_members(&self, group: String) -> Vec<String> {
        self.inner
            .classifier()
            .members(&group)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
