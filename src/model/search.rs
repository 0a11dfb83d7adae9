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

//! Recipe search filtering.
//!
//! This module provides the filter predicate applied by the search bar to the
//! baseline collection. Filtering is a stable, case-insensitive selection over
//! the searchable text of each recipe; an empty query selects everything.

use serde::{Deserialize, Serialize};

use crate::model::{Recipe, RecipeCollection};

/// How a query is matched against the searchable text of a recipe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The query must occur at the start of a word.
    #[default]
    WordPrefix,
    /// The query may occur anywhere.
    Substring,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct SearchQuery {
    text: String,
    needle: String,
    mode: MatchMode,
}

impl SearchQuery {
    pub(crate) fn new(text: &str, mode: MatchMode) -> Self {
        Self {
            text: text.to_string(),
            needle: text.trim().to_lowercase(),
            mode,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the query does not filter anything.
    pub(crate) fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub(crate) fn matches(&self, recipe: &Recipe) -> bool {
        if self.is_empty() {
            return true;
        }

        recipe
            .searchable_fields()
            .any(|field| self.matches_field(&field.to_lowercase()))
    }

    /// Applies the query to `baseline`, preserving the baseline order.
    pub(crate) fn apply(&self, baseline: &RecipeCollection) -> RecipeCollection {
        if self.is_empty() {
            return baseline.clone();
        }

        baseline.filtered(|recipe| self.matches(recipe))
    }

    fn matches_field(&self, field: &str) -> bool {
        match self.mode {
            MatchMode::Substring => field.contains(&self.needle),
            MatchMode::WordPrefix => field
                .match_indices(&self.needle)
                .any(|(idx, _)| starts_word(field, idx)),
        }
    }
}

// A match starts a word when nothing alphanumeric precedes it.
fn starts_word(field: &str, idx: usize) -> bool {
    field[..idx]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}
