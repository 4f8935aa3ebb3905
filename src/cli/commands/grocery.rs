use super::{blank_tokens, gather_ingredients, load_catalog, CommandHandler};
use crate::engine::match_recipes;
use crate::grocery::GroceryList;
use crate::io::render::render_grocery;
use crate::io::OutputFormat;
use crate::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handler for the `grocery` command
pub struct GroceryCommand {
    pub catalog: PathBuf,
    pub have: Option<String>,
    pub format: OutputFormat,
    pub keep_blank: bool,
}

impl CommandHandler for GroceryCommand {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let catalog = load_catalog(&self.catalog)?;
        let user = gather_ingredients(
            self.have.as_deref(),
            blank_tokens(self.keep_blank),
            self.format,
            input,
            output,
        )?;

        let list = GroceryList::from_matches(&match_recipes(&user, &catalog));
        render_grocery(&list, self.format, output)
    }

    fn name(&self) -> &'static str {
        "grocery"
    }
}

impl GroceryCommand {
    /// Create new grocery command
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
