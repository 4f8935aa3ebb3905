pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod grocery;
pub mod io;

pub use catalog::{Catalog, CatalogLoader, Recipe};
pub use engine::matcher::{match_recipes, MatchResult};
pub use error::{PantryError, Result};
pub use io::input::{BlankTokens, UserIngredients};
