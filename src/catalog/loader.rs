use super::types::{Catalog, Recipe, RecipeRecord};
use crate::{PantryError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Loader for recipe catalog files
#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Create new catalog loader
    pub fn new() -> Self {
        Self
    }

    /// Load and validate the catalog file at `path`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PantryError::Data(format!("Failed to read catalog file {}: {}", path_str, e))
        })?;

        let catalog = self.parse(&contents, &path_str)?;
        debug!(path = %path_str, recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Parse catalog JSON; `source` names the origin in error messages
    pub fn parse(&self, contents: &str, source: &str) -> Result<Catalog> {
        let values: Vec<serde_json::Value> = serde_json::from_str(contents).map_err(|e| {
            PantryError::Data(format!(
                "Failed to parse catalog {}: expected an array of recipes: {}",
                source, e
            ))
        })?;

        let mut recipes = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let record: RecipeRecord = serde_json::from_value(value).map_err(|e| {
                PantryError::Data(format!("Invalid recipe #{} in {}: {}", index, source, e))
            })?;
            self.validate_record(&record, index, source)?;
            recipes.push(Recipe::from(record));
        }

        if recipes.is_empty() {
            warn!(source, "Recipe catalog is empty");
        }

        Ok(Catalog::new(recipes))
    }

    /// Reject records whose fields are present but unusable
    fn validate_record(&self, record: &RecipeRecord, index: usize, source: &str) -> Result<()> {
        if record.title.trim().is_empty() {
            return Err(PantryError::Data(format!(
                "Invalid recipe #{} in {}: title is blank",
                index, source
            )));
        }

        if let Some(position) = record.ingredients.iter().position(|i| i.trim().is_empty()) {
            return Err(PantryError::Data(format!(
                "Invalid recipe #{} ({}) in {}: ingredient {} is blank",
                index, record.title, source, position
            )));
        }

        Ok(())
    }
}

impl Catalog {
    /// Parse a catalog from an in-memory JSON document
    pub fn from_json(contents: &str) -> Result<Catalog> {
        CatalogLoader::new().parse(contents, "<inline>")
    }
}
