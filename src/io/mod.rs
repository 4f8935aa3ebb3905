//! Console input parsing and result rendering

pub mod input;
pub mod render;

pub use input::{BlankTokens, UserIngredients};
pub use render::OutputFormat;
