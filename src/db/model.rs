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

//! Database row mapping for domain models.
//!
//! This module provides the conversion logic between raw SQLite result rows
//! and high-level domain models, ensuring type-safe extraction of model
//! attributes from database queries.

use rusqlite::Row;

use crate::model::Recipe;

// Separator used by `group_concat` when folding tags into one column.
const TAG_SEPARATOR: char = '\u{1f}';

impl Recipe {
    /// Maps an SQLite row to a [`Recipe`] instance.
    ///
    /// This is a helper function designed to be used with [`rusqlite::Statement::query_map`].
    /// Expects the columns `id, title, rating, description, tags`.
    ///
    /// # Errors
    ///
    /// Returns a [`rusqlite::Error`] if:
    /// * The row does not contain enough columns.
    /// * The data in a column cannot be converted to the required Rust type.
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let id: i64 = row.get(0)?;
        let title: String = row.get(1)?;
        let rating: u8 = row.get(2)?;
        let description: String = row.get(3)?;
        let tags: Option<String> = row.get(4)?;

        let tags = tags
            .as_deref()
            .map(|t| t.split(TAG_SEPARATOR).collect::<Vec<_>>())
            .unwrap_or_default();

        Ok(Recipe::new(id, title, rating)
            .with_description(description)
            .with_tags(tags))
    }
}
