//! Catalog loading.
//!
//! A catalog is a tab-separated file with one cocktail per row. This module
//! reads it, classifies the ingredient columns into groups and builds the
//! immutable [`Catalog`] that queries run against.

use crate::model::{Classifier, RawRecord, Recipe};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, info};

mod reader;

pub use reader::{parse_records, read_records, CatalogSchema, TRAILING_COLUMNS};

/// File extension tried when a catalog name is given without one.
pub const CATALOG_EXTENSION: &str = "tsv";

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog is empty")]
    Empty,

    #[error("Invalid catalog header: {0}")]
    InvalidHeader(String),

    #[error("Line {line}: expected at most {expected} cells, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: quoted cell is never closed")]
    UnterminatedQuote { line: usize },

    #[error("Catalog not found: {0}")]
    NotFound(Utf8PathBuf),
}

/// The loaded recipe collection plus the lookup tables derived from it.
///
/// Built once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: CatalogSchema,
    classifier: Classifier,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog from already-parsed rows.
    ///
    /// The ingredient universe comes from `schema`; `groups` are matched
    /// against it in order.
    pub fn from_records<S: AsRef<str>>(
        schema: CatalogSchema,
        records: &[RawRecord],
        groups: &[S],
    ) -> Self {
        let groups: Vec<&str> = groups.iter().map(|g| g.as_ref()).collect();
        let universe: Vec<&str> = schema.universe().iter().map(String::as_str).collect();
        let classifier = Classifier::new(&universe, &groups);

        let recipes: Vec<Recipe> = records
            .iter()
            .map(|record| Recipe::from_record(record, &classifier))
            .collect();

        info!(
            recipes = recipes.len(),
            ingredients = universe.len(),
            ungrouped = classifier.ungrouped().len(),
            "catalog loaded"
        );

        Catalog {
            schema,
            classifier,
            recipes,
        }
    }

    /// Reads a catalog from tab-separated text.
    pub fn from_reader<R: BufRead, S: AsRef<str>>(
        reader: R,
        groups: &[S],
    ) -> Result<Self, CatalogError> {
        let (schema, records) = parse_records(reader)?;
        Ok(Self::from_records(schema, &records, groups))
    }

    /// Reads a catalog file.
    pub fn from_path<S: AsRef<str>>(path: &Utf8Path, groups: &[S]) -> Result<Self, CatalogError> {
        debug!(%path, "reading catalog");
        let (schema, records) = read_records(path)?;
        Ok(Self::from_records(schema, &records, groups))
    }

    /// Recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes sorted alphabetically by name.
    pub fn recipes_sorted(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.iter().collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }

    /// Finds a recipe by name, ignoring case.
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        let name = name.to_lowercase();
        self.recipes.iter().find(|r| r.name.to_lowercase() == name)
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn schema(&self) -> &CatalogSchema {
        &self.schema
    }

    /// All ingredient names known to the catalog, in header order.
    pub fn universe(&self) -> &[String] {
        self.schema.universe()
    }

    /// Group labels in priority order.
    pub fn groups(&self) -> Vec<&str> {
        self.classifier.groups().collect()
    }
}

/// Searches `base_dirs` in order for a catalog file called `name`.
///
/// A name without an extension is tried as given first, then with
/// `.tsv` appended. An absolute `name` is used directly.
pub fn locate_catalog<P: AsRef<Utf8Path>>(
    base_dirs: impl IntoIterator<Item = P>,
    name: &Utf8Path,
) -> Result<Utf8PathBuf, CatalogError> {
    if name.is_absolute() {
        return if name.is_file() {
            Ok(name.to_path_buf())
        } else {
            Err(CatalogError::NotFound(name.to_path_buf()))
        };
    }

    for base_dir in base_dirs {
        let candidate = base_dir.as_ref().join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }

        if name.extension().is_none() {
            let candidate = candidate.with_extension(CATALOG_EXTENSION);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(CatalogError::NotFound(name.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_groups;
    use indoc::indoc;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const CATALOG: &str = indoc! {"
        Name\tPage #\tGlass\tMethod\tMuddle/Egg/Other\tTwist\tGarnish\tBourbon Whiskey\tRye Whiskey\tSyrup\tLemon Juice\tNotes\tSource
        Sazerac\t7\tRocks\tStir\t\tLemon\t←\t\t2 oz\t0.25 oz\t\t\t
        Gold Rush\t3\tRocks\tShake\t\t\t\t2 oz\t\t0.75 oz\t0.75 oz\t\t
        Bourbon Smash\t4\tRocks\tShake\tMint\t\tMint Sprig\t2 oz\t\t0.5 oz\t\t\t
    "};

    fn temp_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_from_reader() {
        let catalog = Catalog::from_reader(Cursor::new(CATALOG), &default_groups()).unwrap();

        assert_eq!(catalog.recipes().len(), 3);
        assert_eq!(catalog.universe().len(), 4);
        assert_eq!(catalog.groups().len(), 38);
        assert_eq!(catalog.classifier().group_of("Lemon Juice"), Some("Lemon"));

        let sazerac = catalog.recipe("SAZERAC").unwrap();
        assert_eq!(sazerac.ingredient_groups, vec!["Syrup", "Whiskey"]);
        assert!(sazerac.garnish.is_none());
    }

    #[test]
    fn test_recipes_sorted() {
        let catalog = Catalog::from_reader(Cursor::new(CATALOG), &default_groups()).unwrap();
        let names: Vec<&str> = catalog
            .recipes_sorted()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bourbon Smash", "Gold Rush", "Sazerac"]);
    }

    #[test]
    fn test_trailing_columns_become_ungrouped_ingredients() {
        let tsv = CATALOG.replace(
            "Mint Sprig\t2 oz\t\t0.5 oz\t\t\t",
            "Mint Sprig\t2 oz\t\t0.5 oz\t\tHouse\t",
        );
        let catalog = Catalog::from_reader(Cursor::new(tsv), &default_groups()).unwrap();

        let smash = catalog.recipe("Bourbon Smash").unwrap();
        let notes = smash.ingredients.last().unwrap();
        assert_eq!(notes.name, "Notes");
        assert!(notes.group.is_none());
        assert!(!catalog.universe().contains(&"Notes".to_string()));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir).join("recipes.tsv");
        fs::write(&path, CATALOG).unwrap();

        let catalog = Catalog::from_path(&path, &default_groups()).unwrap();
        assert_eq!(catalog.recipes().len(), 3);
    }

    #[test]
    fn test_from_path_missing() {
        let result = Catalog::from_path(
            Utf8Path::new("/nonexistent/recipes.tsv"),
            &default_groups(),
        );
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }

    #[test]
    fn test_locate_catalog() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let first_path = temp_path(&first);
        let second_path = temp_path(&second);
        fs::write(second_path.join("recipes.tsv"), CATALOG).unwrap();

        let found = locate_catalog([&first_path, &second_path], Utf8Path::new("recipes")).unwrap();
        assert_eq!(found, second_path.join("recipes.tsv"));

        let found =
            locate_catalog([&first_path, &second_path], Utf8Path::new("recipes.tsv")).unwrap();
        assert_eq!(found, second_path.join("recipes.tsv"));

        let found = locate_catalog(Vec::<Utf8PathBuf>::new(), &second_path.join("recipes.tsv"))
            .unwrap();
        assert_eq!(found, second_path.join("recipes.tsv"));
    }

    #[test]
    fn test_locate_catalog_not_found() {
        let dir = TempDir::new().unwrap();
        let result = locate_catalog([temp_path(&dir)], Utf8Path::new("missing"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}
