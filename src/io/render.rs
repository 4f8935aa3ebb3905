use crate::catalog::Recipe;
use crate::engine::{MatchResult, RecipeDetail};
use crate::grocery::GroceryList;
use crate::Result;
use clap::ValueEnum;
use std::io::Write;

pub const SEPARATOR: &str = "------";

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render ranked match results
pub fn render_matches<W: Write + ?Sized>(
    results: &[MatchResult],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(results, out),
        OutputFormat::Text => {
            writeln!(out, "\n--- Recipe Suggestions ---\n")?;
            for result in results {
                writeln!(out, "Recipe: {}", result.recipe_title())?;
                writeln!(out, "Missing Ingredients: {}", join_or_none(result.missing()))?;
                writeln!(
                    out,
                    "Can make? {}",
                    if result.can_make() { "Yes" } else { "No" }
                )?;
                writeln!(out, "{}", SEPARATOR)?;
            }
            Ok(())
        }
    }
}

/// Render search hits
pub fn render_recipes<W: Write + ?Sized>(
    recipes: &[&Recipe],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(recipes, out),
        OutputFormat::Text => {
            if recipes.is_empty() {
                writeln!(out, "No recipes found.")?;
                return Ok(());
            }
            for recipe in recipes {
                writeln!(out, "Recipe: {}", recipe.title())?;
                writeln!(out, "Ingredients: {}", join_or_none(recipe.ingredients()))?;
                writeln!(out, "{}", SEPARATOR)?;
            }
            Ok(())
        }
    }
}

/// Render one recipe with a have/missing mark per ingredient
pub fn render_detail<W: Write + ?Sized>(
    detail: &RecipeDetail,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(detail, out),
        OutputFormat::Text => {
            let result = detail.result();
            writeln!(out, "Recipe: {}", result.recipe_title())?;
            writeln!(out, "Ingredients:")?;
            for ingredient in detail.ingredients() {
                let mark = if ingredient.have { "x" } else { " " };
                writeln!(out, "  [{}] {}", mark, ingredient.name)?;
            }
            writeln!(out, "Missing Ingredients: {}", join_or_none(result.missing()))?;
            writeln!(
                out,
                "Can make? {}",
                if result.can_make() { "Yes" } else { "No" }
            )?;
            Ok(())
        }
    }
}

/// Render a grocery list as a checklist
pub fn render_grocery<W: Write + ?Sized>(
    list: &GroceryList,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(list, out),
        OutputFormat::Text => {
            if list.is_empty() {
                writeln!(out, "Nothing to buy.")?;
                return Ok(());
            }
            for group in list.groups() {
                writeln!(out, "{}:", group.recipe)?;
                for item in &group.items {
                    writeln!(out, "  [ ] {}", item)?;
                }
            }
            Ok(())
        }
    }
}

fn write_json<T, W>(value: &T, out: &mut W) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    W: Write + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
