use super::group::Classifier;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// Column name from the catalog header
    pub name: String,
    /// Group resolved through the catalog classifier
    pub group: Option<String>,
    /// Free-text quantity, e.g. "2 oz"
    pub amount: Option<String>,
}

impl Ingredient {
    /// Creates an ingredient, resolving its group through `classifier`.
    pub fn new(name: impl Into<String>, amount: Option<String>, classifier: &Classifier) -> Self {
        let name = name.into();
        let group = classifier.group_of(&name).map(String::from);
        Ingredient {
            name,
            group,
            amount,
        }
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.group
            .as_deref()
            .is_some_and(|g| g.to_lowercase() == group.to_lowercase())
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Grouped ingredients sort before ungrouped ones, then by group label,
/// then by name.
impl Ord for Ingredient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .is_none()
            .cmp(&other.group.is_none())
            .then_with(|| self.group.cmp(&other.group))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.amount.cmp(&other.amount))
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(group) = &self.group {
            write!(f, "{group} | ")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(amount) = &self.amount {
            write!(f, " | {amount}")?;
        }
        Ok(())
    }
}
