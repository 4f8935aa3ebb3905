use super::{blank_tokens, gather_ingredients, load_catalog, CommandHandler};
use crate::engine::match_recipes;
use crate::io::render::render_matches;
use crate::io::OutputFormat;
use crate::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Handler for the `suggest` command
pub struct SuggestCommand {
    pub catalog: PathBuf,
    pub have: Option<String>,
    pub format: OutputFormat,
    pub keep_blank: bool,
}

impl CommandHandler for SuggestCommand {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        // Catalog errors must surface before the user is prompted
        let catalog = load_catalog(&self.catalog)?;

        let user = gather_ingredients(
            self.have.as_deref(),
            blank_tokens(self.keep_blank),
            self.format,
            input,
            output,
        )?;
        info!(ingredients = user.len(), "Matching recipes");

        let results = match_recipes(&user, &catalog);
        render_matches(&results, self.format, output)
    }

    fn name(&self) -> &'static str {
        "suggest"
    }
}

impl SuggestCommand {
    /// Create new suggest command
    pub fn new(
        catalog: PathBuf,
        have: Option<String>,
        format: OutputFormat,
        keep_blank: bool,
    ) -> Self {
        Self {
            catalog,
            have,
            format,
            keep_blank,
        }
    }
}
