use crate::catalog::Catalog;
use crate::model::Recipe;
use thiserror::Error;
use tracing::debug;

mod model;

pub use model::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Both modes selected (--possible-recipes and --recipes-containing), choose one")]
    ConflictingModes,

    #[error("Must select a mode: --possible-recipes or --recipes-containing")]
    NoMode,

    #[error("No ingredients provided. Please give ingredients with --ingredients")]
    NoIngredients,
}

/// Recipes containing every token, in catalog order.
///
/// A group token matches any ingredient in that group, any other token must
/// match an ingredient name. Matching ignores case. With no tokens every
/// recipe matches.
pub fn search_for_recipe<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    tokens: &[S],
) -> Vec<&'a Recipe> {
    let split = catalog.classifier().split_tokens(tokens);

    let found: Vec<&Recipe> = catalog
        .recipes()
        .iter()
        .filter(|recipe| split.groups.iter().all(|g| recipe.has_group_ingredient(g)))
        .filter(|recipe| split.specific.iter().all(|s| recipe.has_specific_ingredient(s)))
        .collect();

    debug!(
        groups = ?split.groups,
        specific = ?split.specific,
        found = found.len(),
        "recipes containing"
    );
    found
}

/// Recipes whose every ingredient is covered by `tokens`, in catalog order.
///
/// With no tokens only recipes without ingredients match.
pub fn find_possible_recipes<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    tokens: &[S],
) -> Vec<&'a Recipe> {
    let classifier = catalog.classifier();
    let found: Vec<&Recipe> = catalog
        .recipes()
        .iter()
        .filter(|recipe| recipe.all_ingredients_available(classifier, tokens))
        .collect();

    debug!(found = found.len(), "possible recipes");
    found
}

/// Message shown when a query matches nothing.
pub fn no_match_message<S: AsRef<str>>(tokens: &[S]) -> String {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    format!("No valid recipes were found for these ingredients: {tokens:?}")
}

impl Query {
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Recipe> {
        match self.mode {
            QueryMode::PossibleRecipes => find_possible_recipes(catalog, &self.tokens),
            QueryMode::RecipesContaining => search_for_recipe(catalog, &self.tokens),
        }
    }
}

impl Catalog {
    /// See [`search_for_recipe`].
    pub fn search_for_recipe<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&Recipe> {
        search_for_recipe(self, tokens)
    }

    /// See [`find_possible_recipes`].
    pub fn find_possible_recipes<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&Recipe> {
        find_possible_recipes(self, tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSchema;
    use crate::model::{default_groups, RawRecord};

    const HEADER: [&str; 14] = [
        "Name",
        "Page #",
        "Glass",
        "Method",
        "Muddle/Egg/Other",
        "Twist",
        "Garnish",
        "Bourbon Whiskey",
        "Rye Whiskey",
        "Syrup",
        "Lemon Juice",
        "Egg White",
        "Notes",
        "Source",
    ];

    fn record(name: &str, ingredients: &[(&str, &str)]) -> RawRecord {
        HEADER
            .iter()
            .map(|column| {
                let value = match *column {
                    "Name" => Some(name),
                    _ => ingredients
                        .iter()
                        .find(|(ingredient, _)| ingredient == column)
                        .map(|(_, amount)| *amount),
                };
                (*column, value)
            })
            .collect()
    }

    fn catalog() -> Catalog {
        let schema = CatalogSchema::from_header(HEADER).unwrap();
        let records = vec![
            record(
                "Bourbon Old Fashioned",
                &[("Bourbon Whiskey", "2 oz"), ("Syrup", "0.5 oz")],
            ),
            record(
                "Whiskey Sour",
                &[
                    ("Rye Whiskey", "2 oz"),
                    ("Syrup", "0.75 oz"),
                    ("Lemon Juice", "0.75 oz"),
                    ("Egg White", "1"),
                ],
            ),
            record("Neat Rye", &[("Rye Whiskey", "2 oz")]),
            record("Lemonade", &[("Lemon Juice", "1 oz"), ("Syrup", "1 oz")]),
        ];
        Catalog::from_records(schema, &records, &default_groups())
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_scenario_group_substitution() {
        let catalog = catalog();

        let possible = names(&catalog.find_possible_recipes(&["Whiskey", "Syrup"]));
        assert!(possible.contains(&"Bourbon Old Fashioned".to_string()));

        let possible = names(&catalog.find_possible_recipes(&["Whiskey"]));
        assert!(!possible.contains(&"Bourbon Old Fashioned".to_string()));

        let containing = names(&catalog.search_for_recipe(&["Bourbon Whiskey"]));
        assert!(containing.contains(&"Bourbon Old Fashioned".to_string()));

        let containing = names(&catalog.search_for_recipe(&["Rye Whiskey"]));
        assert!(!containing.contains(&"Bourbon Old Fashioned".to_string()));
    }

    #[test]
    fn test_search_for_recipe_is_conjunctive() {
        let catalog = catalog();
        let found = names(&catalog.search_for_recipe(&["Whiskey", "lemon juice"]));
        assert_eq!(found, vec!["Whiskey Sour"]);

        let found = names(&catalog.search_for_recipe(&["Whiskey", "Syrup"]));
        assert_eq!(found, vec!["Bourbon Old Fashioned", "Whiskey Sour"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(
            catalog.search_for_recipe(&["RYE WHISKEY"]),
            catalog.search_for_recipe(&["rye whiskey"])
        );
        assert_eq!(
            catalog.search_for_recipe(&["SYRUP"]),
            catalog.search_for_recipe(&["syrup"])
        );
    }

    #[test]
    fn test_search_without_tokens_returns_catalog_in_order() {
        let catalog = catalog();
        let found = catalog.search_for_recipe::<&str>(&[]);
        assert_eq!(found.len(), catalog.recipes().len());
        for (found, recipe) in found.iter().zip(catalog.recipes()) {
            assert_eq!(*found, recipe);
        }
    }

    #[test]
    fn test_find_possible_without_tokens_only_empty_recipes() {
        let catalog = catalog();
        assert!(catalog.find_possible_recipes::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_find_possible_results_satisfy_availability() {
        let catalog = catalog();
        let tokens = ["Whiskey", "lemon", "Syrup"];
        let found = catalog.find_possible_recipes(&tokens);

        assert_eq!(
            names(&found),
            vec!["Bourbon Old Fashioned", "Neat Rye", "Lemonade"]
        );
        for recipe in found {
            assert!(recipe.all_ingredients_available(catalog.classifier(), &tokens));
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = catalog();
        assert!(catalog.search_for_recipe(&["Mezcal"]).is_empty());
        assert!(catalog.find_possible_recipes(&["Cream"]).is_empty());
    }

    #[test]
    fn test_query_mode_from_flags() {
        assert_eq!(
            QueryMode::from_flags(true, false),
            Ok(QueryMode::PossibleRecipes)
        );
        assert_eq!(
            QueryMode::from_flags(false, true),
            Ok(QueryMode::RecipesContaining)
        );
        assert_eq!(
            QueryMode::from_flags(true, true),
            Err(QueryError::ConflictingModes)
        );
        assert_eq!(QueryMode::from_flags(false, false), Err(QueryError::NoMode));
    }

    #[test]
    fn test_query_requires_tokens() {
        let result = Query::new(QueryMode::PossibleRecipes, vec![]);
        assert_eq!(result, Err(QueryError::NoIngredients));
    }

    #[test]
    fn test_query_run() {
        let catalog = catalog();
        let query =
            Query::new(QueryMode::RecipesContaining, vec!["egg white".to_string()]).unwrap();
        assert_eq!(names(&query.run(&catalog)), vec!["Whiskey Sour"]);

        let query =
            Query::new(QueryMode::PossibleRecipes, vec!["Rye Whiskey".to_string()]).unwrap();
        assert_eq!(names(&query.run(&catalog)), vec!["Neat Rye"]);
    }

    #[test]
    fn test_no_match_message() {
        assert_eq!(
            no_match_message(&["Gin", "Lime"]),
            r#"No valid recipes were found for these ingredients: ["Gin", "Lime"]"#
        );
    }
}
