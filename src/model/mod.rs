// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the
//! [`Recipe`] and the ordered [`RecipeCollection`] that flows from the recipe
//! service through the search filter and into the recipe list.

pub(crate) mod search;

use std::fmt;

/// Highest rating a recipe can carry.
pub(crate) const MAX_RATING: u8 = 5;

/// Stable identity of a recipe, unchanged across fetches.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct RecipeId(pub(crate) i64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Recipe {
    pub(crate) id: RecipeId,
    pub(crate) title: String,
    pub(crate) rating: u8,
    pub(crate) description: String,
    pub(crate) tags: Vec<String>,
}

impl Recipe {
    pub(crate) fn new(id: i64, title: impl Into<String>, rating: u8) -> Self {
        Self {
            id: RecipeId(id),
            title: title.into(),
            rating: rating.min(MAX_RATING),
            description: String::default(),
            tags: vec![],
        }
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The text fields a search query is matched against, in priority order.
    pub(crate) fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(std::iter::once(self.description.as_str()))
            .chain(self.tags.iter().map(String::as_str))
    }
}

/// An ordered sequence of recipes.
///
/// Insertion order is display order, the collection is never re-sorted on the
/// client side.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.recipes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub(crate) fn position(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|r| r.id == id)
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> Vec<RecipeId> {
        self.recipes.iter().map(|r| r.id).collect()
    }

    /// Returns a new collection holding the recipes accepted by `predicate`,
    /// in their original relative order.
    pub(crate) fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Recipe) -> bool,
    {
        Self {
            recipes: self.recipes.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}

impl From<Vec<Recipe>> for RecipeCollection {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl FromIterator<Recipe> for RecipeCollection {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_to_maximum() {
        let recipe = Recipe::new(7, "Soup", 9);

        assert_eq!(recipe.rating, MAX_RATING);
    }

    #[test]
    fn searchable_fields_cover_title_description_and_tags() {
        let recipe = Recipe::new(1, "Ramen", 4)
            .with_description("Rich broth")
            .with_tags(["japanese", "soup"]);

        let fields: Vec<&str> = recipe.searchable_fields().collect();

        assert_eq!(fields, vec!["Ramen", "Rich broth", "japanese", "soup"]);
    }

    #[test]
    fn filtered_keeps_relative_order() {
        let collection = fixtures::baseline();

        let filtered = collection.filtered(|r| r.rating == 5);

        assert_eq!(filtered.ids(), vec![RecipeId(1), RecipeId(3)]);
    }

    #[test]
    fn position_finds_recipe_by_identity() {
        let collection = fixtures::baseline();

        assert_eq!(collection.position(RecipeId(2)), Some(1));
        assert_eq!(collection.position(RecipeId(99)), None);
    }
}
