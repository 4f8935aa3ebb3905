//! Recipe matching engine

pub mod detail;
pub mod matcher;

pub use detail::{IngredientStatus, RecipeDetail};
pub use matcher::{makeable, match_recipes, MatchResult};
