use super::{load_catalog, CommandHandler};
use crate::io::render::render_recipes;
use crate::io::OutputFormat;
use crate::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Handler for the `search` command
pub struct SearchCommand {
    pub catalog: PathBuf,
    pub query: String,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn run(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let catalog = load_catalog(&self.catalog)?;

        let hits = catalog.search(&self.query);
        debug!(query = %self.query, hits = hits.len(), "Searched catalog");

        render_recipes(&hits, self.format, output)
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(catalog: PathBuf, query: String, format: OutputFormat) -> Self {
        Self {
            catalog,
            query,
            format,
        }
    }
}
