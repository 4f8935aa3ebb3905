pub mod grocery;
pub mod search;
pub mod show;
pub mod suggest;

use crate::catalog::{Catalog, CatalogLoader};
use crate::io::{BlankTokens, OutputFormat, UserIngredients};
use crate::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against stdin/stdout
    fn execute(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Execute the command with explicit input and output streams
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Load the catalog; any failure here is fatal for the command
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    CatalogLoader::new().load(path)
}

/// Use `--have` when given, otherwise prompt for one line
///
/// With JSON output the prompt goes to stderr so stdout stays parseable.
pub(crate) fn gather_ingredients(
    have: Option<&str>,
    blanks: BlankTokens,
    format: OutputFormat,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<UserIngredients> {
    match (have, format) {
        (Some(line), _) => Ok(UserIngredients::parse(line, blanks)),
        (None, OutputFormat::Json) => {
            UserIngredients::prompt(input, &mut std::io::stderr(), blanks)
        }
        (None, OutputFormat::Text) => UserIngredients::prompt(input, output, blanks),
    }
}

pub(crate) fn blank_tokens(keep_blank: bool) -> BlankTokens {
    if keep_blank {
        BlankTokens::Keep
    } else {
        BlankTokens::Drop
    }
}
