use crate::catalog::normalize_name;
use crate::{PantryError, Result};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter the ingredients you have in your fridge (comma separated):";

/// How empty tokens in the ingredient line are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankTokens {
    /// Discard them; blank input means no ingredients
    #[default]
    Drop,
    /// Keep them as the ingredient `""`; blank input yields `{""}`
    Keep,
}

/// The set of ingredients the user has, normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIngredients {
    names: BTreeSet<String>,
}

impl UserIngredients {
    /// Parse a comma-separated line, trimming and lowercasing each token
    pub fn parse(line: &str, blanks: BlankTokens) -> Self {
        let names = line
            .split(',')
            .map(normalize_name)
            .filter(|name| blanks == BlankTokens::Keep || !name.is_empty())
            .collect();
        Self { names }
    }

    /// Print the prompt and read one line from `reader`
    pub fn prompt<R: BufRead + ?Sized, W: Write + ?Sized>(
        reader: &mut R,
        writer: &mut W,
        blanks: BlankTokens,
    ) -> Result<Self> {
        writeln!(writer, "{}", PROMPT)?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| PantryError::Input(format!("Failed to read ingredients: {}", e)))?;
        if read == 0 {
            return Err(PantryError::Input("No input received from stdin".to_string()));
        }

        Ok(Self::parse(line.trim_end_matches(['\r', '\n']), blanks))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
