use super::matcher::MatchResult;
use crate::catalog::Recipe;
use crate::io::input::UserIngredients;
use serde::Serialize;

/// Whether the user has one recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientStatus {
    pub name: String,
    pub have: bool,
}

/// Per-ingredient view of a single recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    ingredients: Vec<IngredientStatus>,
    #[serde(flatten)]
    result: MatchResult,
}

impl RecipeDetail {
    pub fn new(recipe: &Recipe, user: &UserIngredients) -> Self {
        let ingredients = recipe
            .ingredients()
            .iter()
            .map(|name| IngredientStatus {
                name: name.clone(),
                have: user.contains(name),
            })
            .collect();

        Self {
            ingredients,
            result: MatchResult::for_recipe(recipe, user),
        }
    }

    /// Ingredients in recipe order
    pub fn ingredients(&self) -> &[IngredientStatus] {
        &self.ingredients
    }

    pub fn result(&self) -> &MatchResult {
        &self.result
    }
}
