//! Recipe, ingredient and ingredient-group types.

mod group;
mod ingredient;
mod recipe;

pub use group::{default_groups, title_case, Classifier, TokenSplit, DEFAULT_GROUPS};
pub use ingredient::Ingredient;
pub use recipe::{
    RawRecord, Recipe, GARNISH_COLUMN, GARNISH_SAME_AS_TWIST, GLASS_COLUMN, METADATA_COLUMNS,
    METHOD_COLUMN, NAME_COLUMN, PAGE_COLUMN, SPECIAL_COLUMN, TWIST_COLUMN,
};
