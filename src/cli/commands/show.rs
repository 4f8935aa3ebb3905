use super::{blank_tokens, gather_ingredients, load_catalog, CommandHandler};
use crate::engine::RecipeDetail;
use crate::io::render::render_detail;
use crate::io::OutputFormat;
use crate::{PantryError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handler for the `show` command
pub struct ShowCommand {
    pub catalog: PathBuf,
    pub title: String,
    pub have: Option<String>,
    pub format: OutputFormat,
    pub keep_blank: bool,
}

impl CommandHandler for ShowCommand {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let catalog = load_catalog(&self.catalog)?;
        let recipe = catalog
            .find(&self.title)
            .ok_or_else(|| PantryError::RecipeNotFound(self.title.clone()))?;

        let user = gather_ingredients(
            self.have.as_deref(),
            blank_tokens(self.keep_blank),
            self.format,
            input,
            output,
        )?;

        render_detail(&RecipeDetail::new(recipe, &user), self.format, output)
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(
        catalog: PathBuf,
        title: String,
        have: Option<String>,
        format: OutputFormat,
        keep_blank: bool,
    ) -> Self {
        Self {
            catalog,
            title,
            have,
            format,
            keep_blank,
        }
    }
}
