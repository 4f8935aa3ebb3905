use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Catalog data error: {0}")]
    Data(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("No recipe titled '{0}' in the catalog")]
    RecipeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl PantryError {
    /// True for errors that mean the catalog could not be used at all
    pub fn is_data_error(&self) -> bool {
        matches!(self, PantryError::Data(_))
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
