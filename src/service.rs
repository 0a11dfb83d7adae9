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

//! Recipe data source.
//!
//! The home screen only depends on the [`RecipesService`] trait. Calls run on
//! the task worker thread and every call yields exactly one [`FetchOutcome`]
//! delivered back to the UI thread.

use anyhow::Result;
use rusqlite::Connection;

use crate::{db, model::{Recipe, RecipeCollection}};

/// Source of the top rated recipes.
pub(crate) trait RecipesService: Send {
    /// Returns the full ordered result set, best first. "No results" is an
    /// empty vector, not an error.
    fn fetch_top_rating(&mut self) -> Result<Vec<Recipe>>;
}

/// Completion of a single fetch, as seen by the screen.
#[derive(Debug)]
pub(crate) enum FetchOutcome {
    Loaded(RecipeCollection),
    Failed(String),
}

impl From<Result<Vec<Recipe>>> for FetchOutcome {
    fn from(result: Result<Vec<Recipe>>) -> Self {
        match result {
            Ok(recipes) => FetchOutcome::Loaded(RecipeCollection::from(recipes)),
            Err(e) => FetchOutcome::Failed(format!("{:#}", e)),
        }
    }
}

/// [`RecipesService`] backed by the SQLite recipe catalog.
pub(crate) struct SqliteRecipes {
    conn: Connection,
    limit: u32,
}

impl SqliteRecipes {
    pub(crate) fn open(path: &str, limit: u32) -> Result<Self> {
        Ok(Self {
            conn: db::init_db(path)?,
            limit,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_connection(conn: Connection, limit: u32) -> Self {
        Self { conn, limit }
    }
}

impl RecipesService for SqliteRecipes {
    fn fetch_top_rating(&mut self) -> Result<Vec<Recipe>> {
        db::fetch_top_rating(&self.conn, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_service_returns_seeded_recipes_best_first() {
        let conn = Connection::open_in_memory().unwrap();
        db::create_schema(&conn).unwrap();
        db::seed_if_empty(&conn).unwrap();
        let mut service = SqliteRecipes::from_connection(conn, 3);

        let recipes = service.fetch_top_rating().unwrap();

        assert_eq!(recipes.len(), 3);
        assert!(recipes.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn failed_result_becomes_failed_outcome() {
        let outcome = FetchOutcome::from(Err(anyhow::anyhow!("connection reset")));

        assert!(matches!(outcome, FetchOutcome::Failed(msg) if msg == "connection reset"));
    }

    #[test]
    fn empty_result_is_loaded_not_failed() {
        let outcome = FetchOutcome::from(Ok(vec![]));

        assert!(matches!(outcome, FetchOutcome::Loaded(c) if c.is_empty()));
    }
}
