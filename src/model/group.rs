use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Built-in ingredient categories, in priority order.
///
/// An ingredient is assigned to the first label that appears in its name, so
/// a label earlier in this list wins over a later one ("Lemon Syrup" is a
/// Syrup, not a Lemon).
pub const DEFAULT_GROUPS: &[&str] = &[
    "Syrup",
    "Bitters",
    "Mix",
    "Lemon",
    "Lime",
    "Orange",
    "Grapefruit",
    "Brandy",
    "Champagne",
    "Vodka",
    "Mezcal",
    "Tequila",
    "Cognac",
    "Pisco",
    "Gin",
    "Aquavit",
    "Rum",
    "Whiskey",
    "Scotch",
    "Bourbon",
    "Rye",
    "Absinthe",
    "Rosé",
    "Sherry",
    "Vermouth",
    "Cider",
    "Beer",
    "Liqueur",
    "Amaro",
    "Amaretto",
    "Campari",
    "Cointreau",
    "Curacao",
    "Chartreuse",
    "Aperitif",
    "Cordial",
    "Gastrique",
    "Soda",
];

/// Returns the built-in group list as owned labels.
pub fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

/// Title-cases a label: the first letter of every alphabetic run is
/// upper-cased and the remaining letters lower-cased.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_alpha = false;
    for c in label.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Query tokens split into category tokens and specific ingredient tokens.
///
/// Both halves are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSplit {
    pub groups: Vec<String>,
    pub specific: Vec<String>,
}

/// Partition of the ingredient universe into groups.
///
/// Built once per catalog and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Groups in priority order with the ingredients they claimed
    members: Vec<(String, Vec<String>)>,
    /// Ingredient name -> group label
    lookup: HashMap<String, String>,
    /// Ingredients no group claimed, sorted and deduplicated
    ungrouped: Vec<String>,
}

impl Classifier {
    /// Classifies `universe` against `groups`.
    ///
    /// Each group, in order, claims every still-unclaimed ingredient whose
    /// name contains the group label (case-sensitive substring match).
    pub fn new<S: AsRef<str>>(universe: &[S], groups: &[S]) -> Self {
        let mut pool: Vec<&str> = universe.iter().map(|s| s.as_ref()).collect();
        let mut members: Vec<(String, Vec<String>)> = Vec::with_capacity(groups.len());

        for group in groups {
            let group = group.as_ref();
            let (claimed, rest): (Vec<&str>, Vec<&str>) =
                pool.into_iter().partition(|name| name.contains(group));
            pool = rest;

            debug!(group, claimed = claimed.len(), "classified group");
            let claimed: Vec<String> = claimed.into_iter().map(String::from).collect();
            members.push((group.to_string(), claimed));
        }

        let lookup: HashMap<String, String> = members
            .iter()
            .flat_map(|(group, names)| names.iter().map(move |n| (n.clone(), group.clone())))
            .collect();

        let ungrouped = pool
            .into_iter()
            .map(String::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Classifier {
            members,
            lookup,
            ungrouped,
        }
    }

    /// Returns the group an ingredient belongs to, if any.
    pub fn group_of(&self, ingredient: &str) -> Option<&str> {
        self.lookup.get(ingredient).map(String::as_str)
    }

    /// Returns the ingredients assigned to `group` (exact label match).
    pub fn members(&self, group: &str) -> Option<&[String]> {
        self.members
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, names)| names.as_slice())
    }

    /// Returns the group labels in priority order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(g, _)| g.as_str())
    }

    pub fn ungrouped(&self) -> &[String] {
        &self.ungrouped
    }

    /// True if `token` names a declared group, ignoring case.
    pub fn is_group(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.groups().any(|g| g.to_lowercase() == token)
    }

    /// Splits query tokens into group tokens and specific ingredient tokens.
    pub fn split_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> TokenSplit {
        let mut split = TokenSplit::default();
        for token in tokens {
            let token = token.as_ref();
            if self.is_group(token) {
                split.groups.push(token.to_lowercase());
            } else {
                split.specific.push(token.to_lowercase());
            }
        }
        split
    }
}
