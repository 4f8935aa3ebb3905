use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalize an ingredient name for comparison: trimmed and lowercased
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A recipe record exactly as it appears in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    pub ingredients: Vec<String>,
}

/// A validated recipe held by the catalog
///
/// Ingredient names are normalized and deduplicated, keeping the order in
/// which they were first listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    title: String,
    ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe, normalizing its ingredient names
    pub fn new<T, I, S>(title: T, ingredients: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let ingredients = ingredients
            .into_iter()
            .map(|name| normalize_name(name.as_ref()))
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self {
            title: title.into(),
            ingredients,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Normalized ingredient names in first-listed order
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe::new(record.title, record.ingredients)
    }
}

/// The ordered, read-only collection of known recipes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find a recipe by title, ignoring case
    pub fn find(&self, title: &str) -> Option<&Recipe> {
        let wanted = normalize_name(title);
        self.recipes
            .iter()
            .find(|recipe| normalize_name(recipe.title()) == wanted)
    }

    /// Recipes whose title or any ingredient contains the query
    ///
    /// Matching is case-insensitive and keeps catalog order. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = normalize_name(query);
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe.title().to_lowercase().contains(&query)
                    || recipe.ingredients().iter().any(|name| name.contains(&query))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
