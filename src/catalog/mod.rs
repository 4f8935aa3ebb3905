//! Recipe catalog: typed records and the file loader

pub mod loader;
pub mod types;

pub use loader::CatalogLoader;
pub use types::{normalize_name, Catalog, Recipe, RecipeRecord};
