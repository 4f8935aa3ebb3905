use crate::catalog::{Catalog, Recipe};
use crate::io::input::UserIngredients;
use serde::Serialize;
use tracing::debug;

/// Feasibility of one recipe against the user's ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(rename = "recipe")]
    recipe_title: String,
    #[serde(rename = "missing_ingredients")]
    missing: Vec<String>,
    can_make: bool,
}

impl MatchResult {
    /// Build a result; `can_make` always follows from `missing`
    pub fn new(recipe_title: impl Into<String>, missing: Vec<String>) -> Self {
        let can_make = missing.is_empty();
        Self {
            recipe_title: recipe_title.into(),
            missing,
            can_make,
        }
    }

    /// Evaluate a single recipe
    pub fn for_recipe(recipe: &Recipe, user: &UserIngredients) -> Self {
        let missing = recipe
            .ingredients()
            .iter()
            .filter(|name| !user.contains(name))
            .cloned()
            .collect();
        Self::new(recipe.title(), missing)
    }

    pub fn recipe_title(&self) -> &str {
        &self.recipe_title
    }

    /// Missing ingredient names, in recipe order
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn can_make(&self) -> bool {
        self.can_make
    }
}

/// Match every catalog recipe against the user's ingredients
///
/// Recipes that can be made come first, then by fewest missing ingredients.
/// The sort is stable, so ties keep catalog order.
pub fn match_recipes(user: &UserIngredients, catalog: &Catalog) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|recipe| MatchResult::for_recipe(recipe, user))
        .collect();

    results.sort_by_key(|result| (!result.can_make(), result.missing_count()));

    debug!(
        recipes = results.len(),
        makeable = makeable(&results).count(),
        "Matched catalog against user ingredients"
    );
    results
}

/// Results that can be made outright
pub fn makeable(results: &[MatchResult]) -> impl Iterator<Item = &MatchResult> {
    results.iter().filter(|result| result.can_make())
}
