use super::QueryError;
use serde::{Deserialize, Serialize};

/// Which of the two questions a query asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryMode {
    /// Recipes makeable from only the given ingredients
    PossibleRecipes,
    /// Recipes containing all of the given ingredients
    RecipesContaining,
}

impl QueryMode {
    /// Resolves the two mutually exclusive mode flags.
    pub fn from_flags(
        possible_recipes: bool,
        recipes_containing: bool,
    ) -> Result<Self, QueryError> {
        match (possible_recipes, recipes_containing) {
            (true, true) => Err(QueryError::ConflictingModes),
            (false, false) => Err(QueryError::NoMode),
            (true, false) => Ok(QueryMode::PossibleRecipes),
            (false, true) => Ok(QueryMode::RecipesContaining),
        }
    }
}

/// A validated query: a mode plus at least one ingredient token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub mode: QueryMode,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn new(mode: QueryMode, tokens: Vec<String>) -> Result<Self, QueryError> {
        if tokens.is_empty() {
            return Err(QueryError::NoIngredients);
        }
        Ok(Query { mode, tokens })
    }
}
