//! Grocery list built from the missing ingredients of matched recipes

use crate::engine::MatchResult;
use serde::Serialize;
use tracing::debug;

/// Missing items for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroceryGroup {
    pub recipe: String,
    pub items: Vec<String>,
}

/// Grocery items grouped per recipe, in the order recipes were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroceryList {
    groups: Vec<GroceryGroup>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from every result that cannot be made yet
    pub fn from_matches(results: &[MatchResult]) -> Self {
        let mut list = Self::new();
        for result in results.iter().filter(|r| !r.can_make()) {
            list.add_missing(result.recipe_title(), result.missing());
        }
        debug!(
            groups = list.groups.len(),
            items = list.item_count(),
            "Built grocery list"
        );
        list
    }

    /// Add items for a recipe, merging into its group if it already exists
    pub fn add_missing<S: AsRef<str>>(&mut self, recipe: &str, items: &[S]) {
        let index = match self.groups.iter().position(|g| g.recipe == recipe) {
            Some(index) => index,
            None => {
                self.groups.push(GroceryGroup {
                    recipe: recipe.to_string(),
                    items: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        let group = &mut self.groups[index];
        for item in items {
            let item = item.as_ref();
            if !group.items.iter().any(|existing| existing == item) {
                group.items.push(item.to_string());
            }
        }

        if group.items.is_empty() {
            self.groups.remove(index);
        }
    }

    /// Remove a bought item; a group left empty is dropped
    ///
    /// Returns false when the recipe or item was not on the list.
    pub fn check_off(&mut self, recipe: &str, item: &str) -> bool {
        let Some(index) = self.groups.iter().position(|g| g.recipe == recipe) else {
            return false;
        };

        let group = &mut self.groups[index];
        let before = group.items.len();
        group.items.retain(|existing| existing != item);
        let removed = group.items.len() != before;

        if group.items.is_empty() {
            self.groups.remove(index);
        }
        removed
    }

    pub fn groups(&self) -> &[GroceryGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
