use super::group::Classifier;
use super::ingredient::Ingredient;
use serde::Serialize;
use std::fmt;

pub const NAME_COLUMN: &str = "Name";
pub const PAGE_COLUMN: &str = "Page #";
pub const GLASS_COLUMN: &str = "Glass";
pub const METHOD_COLUMN: &str = "Method";
pub const SPECIAL_COLUMN: &str = "Muddle/Egg/Other";
pub const TWIST_COLUMN: &str = "Twist";
pub const GARNISH_COLUMN: &str = "Garnish";

/// Fixed, non-ingredient columns that lead every catalog row, in order.
pub const METADATA_COLUMNS: [&str; 7] = [
    NAME_COLUMN,
    PAGE_COLUMN,
    GLASS_COLUMN,
    METHOD_COLUMN,
    SPECIAL_COLUMN,
    TWIST_COLUMN,
    GARNISH_COLUMN,
];

/// Garnish cell value meaning "same as the twist".
pub const GARNISH_SAME_AS_TWIST: &str = "←";

/// One catalog row: column name to cell value, in header order.
///
/// Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: Vec<(String, Option<String>)>,
}

impl RawRecord {
    pub fn new(cells: Vec<(String, Option<String>)>) -> Self {
        RawRecord { cells }
    }

    /// Returns the value of `column`, or `None` if absent or empty.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Iterates over the non-empty cells in column order.
    pub fn filled(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .filter_map(|(c, v)| v.as_deref().map(|v| (c.as_str(), v)))
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, Option<V>)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (C, Option<V>)>>(iter: I) -> Self {
        RawRecord {
            cells: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.map(Into::into)))
                .collect(),
        }
    }
}

/// A cocktail recipe built from one catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub page: Option<String>,
    pub glass: Option<String>,
    pub method: Option<String>,
    /// Muddle/egg/other preparation notes
    pub special: Option<String>,
    pub twist: Option<String>,
    /// `None` when the catalog defers to the twist
    pub garnish: Option<String>,
    /// Sorted grouped-first, then by group label, then by name
    pub ingredients: Vec<Ingredient>,
    /// Distinct groups among `ingredients`, in ingredient order
    pub ingredient_groups: Vec<String>,
}

impl Recipe {
    /// Builds a recipe from a catalog row.
    ///
    /// Every non-empty cell outside [`METADATA_COLUMNS`] becomes an
    /// ingredient whose amount is the cell value.
    pub fn from_record(record: &RawRecord, classifier: &Classifier) -> Self {
        let field = |column: &str| record.get(column).map(String::from);

        let garnish = field(GARNISH_COLUMN).filter(|g| g != GARNISH_SAME_AS_TWIST);

        let mut ingredients: Vec<Ingredient> = record
            .filled()
            .filter(|(column, _)| !METADATA_COLUMNS.contains(column))
            .map(|(column, amount)| Ingredient::new(column, Some(amount.to_string()), classifier))
            .collect();
        ingredients.sort();

        let mut ingredient_groups: Vec<String> = Vec::new();
        for group in ingredients.iter().filter_map(|i| i.group.as_ref()) {
            if !ingredient_groups.contains(group) {
                ingredient_groups.push(group.clone());
            }
        }

        Recipe {
            name: field(NAME_COLUMN).unwrap_or_default(),
            page: field(PAGE_COLUMN),
            glass: field(GLASS_COLUMN),
            method: field(METHOD_COLUMN),
            special: field(SPECIAL_COLUMN),
            twist: field(TWIST_COLUMN),
            garnish,
            ingredients,
            ingredient_groups,
        }
    }

    /// True if any ingredient belongs to `group`, ignoring case.
    pub fn has_group_ingredient(&self, group: &str) -> bool {
        let group = group.to_lowercase();
        self.ingredient_groups
            .iter()
            .any(|g| g.to_lowercase() == group)
    }

    /// True if the recipe lists an ingredient called `name`, ignoring case.
    pub fn has_specific_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|i| i.is_named(name))
    }

    /// True if every ingredient is covered by `tokens`.
    ///
    /// A group token covers every ingredient in that group; any other token
    /// covers the ingredient with exactly that name. A recipe without
    /// ingredients is always makeable.
    pub fn all_ingredients_available<S: AsRef<str>>(
        &self,
        classifier: &Classifier,
        tokens: &[S],
    ) -> bool {
        let split = classifier.split_tokens(tokens);
        self.ingredients.iter().all(|ingredient| {
            split.groups.iter().any(|g| ingredient.has_group(g))
                || split.specific.iter().any(|s| ingredient.is_named(s))
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n{} ({} | {} | Page {}):",
            self.name,
            self.method.as_deref().unwrap_or_default(),
            self.glass.as_deref().unwrap_or_default(),
            self.page.as_deref().unwrap_or_default(),
        )?;
        for ingredient in &self.ingredients {
            writeln!(f, "   {ingredient}")?;
        }
        if let Some(special) = &self.special {
            writeln!(f, "   {SPECIAL_COLUMN} | {special}")?;
        }
        if let Some(twist) = &self.twist {
            writeln!(f, "   {TWIST_COLUMN} | {twist}")?;
        }
        if let Some(garnish) = &self.garnish {
            writeln!(f, "   {GARNISH_COLUMN} | {garnish}")?;
        }
        writeln!(f)
    }
}
