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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite recipe catalog,
//! including schema creation and fetching the top rated recipes. It uses
//! cached statements for the queries issued on every refresh.
//!
//! # Tables
//!
//! * `recipes` - One row per recipe, with its rating and description.
//! * `recipe_tags` - Free-form tags attached to a recipe.

mod model;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::info;

use crate::model::Recipe;

/// Opens a connection to the SQLite database and configures performance settings.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging for better concurrency.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
/// * **Constraints**: Enforces foreign key integrity.
/// * **Schema**: Executes [`create_schema`] to ensure all tables and indices exist.
/// * **Sample data**: Executes [`seed_if_empty`] so a fresh catalog is not blank.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {path}"))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
    ",
    )?;

    create_schema(&conn)?;
    seed_if_empty(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Creates the `recipes` and `recipe_tags` tables if they do not already
/// exist, along with the index used to order recipes by rating. The operation
/// is wrapped in a single transaction.
///
/// # Errors
///
/// Returns an error if the transaction fails, if there are permission issues
/// with the database file, or if the SQL syntax is invalid.
pub(crate) fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL COLLATE NOCASE,
            rating INTEGER NOT NULL DEFAULT 0 CHECK (rating BETWEEN 0 AND 5),
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_recipes_rating ON recipes (rating DESC, title);

        CREATE TABLE IF NOT EXISTS recipe_tags (
            recipe_id INTEGER NOT NULL,
            tag TEXT NOT NULL COLLATE NOCASE,
            UNIQUE (recipe_id, tag),
            FOREIGN KEY (recipe_id) REFERENCES recipes (id) ON DELETE CASCADE
        );

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Inserts a recipe and its tags, returning the new recipe id.
pub(crate) fn insert_recipe(
    conn: &Connection,
    title: &str,
    rating: u8,
    description: &str,
    tags: &[&str],
) -> Result<i64> {
    let mut stmt =
        conn.prepare_cached("INSERT INTO recipes (title, rating, description) VALUES (?, ?, ?)")?;
    stmt.execute(params![title, rating, description])?;
    let recipe_id = conn.last_insert_rowid();

    let mut stmt =
        conn.prepare_cached("INSERT OR IGNORE INTO recipe_tags (recipe_id, tag) VALUES (?, ?)")?;
    for tag in tags {
        stmt.execute(params![recipe_id, tag])?;
    }

    Ok(recipe_id)
}

/// Populates an empty catalog with a handful of sample recipes.
///
/// Returns the number of recipes inserted, zero if the catalog already held
/// recipes.
pub(crate) fn seed_if_empty(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM recipes", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let samples: [(&str, u8, &str, &[&str]); 6] = [
        ("Pasta", 5, "Fresh egg pasta with butter and sage.", &["italian", "dinner"]),
        ("Tacos", 4, "Corn tortillas with slow cooked pork.", &["mexican"]),
        ("Pad Thai", 5, "Rice noodles, tamarind, peanuts and lime.", &["thai", "noodles"]),
        ("Shakshuka", 4, "Eggs poached in spiced tomato sauce.", &["breakfast"]),
        ("Ramen", 3, "Pork broth, noodles and a soft boiled egg.", &["japanese", "noodles"]),
        ("Banana Bread", 3, "Moist loaf with walnuts.", &["baking"]),
    ];

    let tx = conn.unchecked_transaction()?;
    for (title, rating, description, tags) in samples {
        insert_recipe(&tx, title, rating, description, tags)?;
    }
    tx.commit()?;

    info!(count = samples.len(), "seeded empty recipe catalog");

    Ok(samples.len())
}

/// Fetches the highest rated recipes, best first.
///
/// Recipes with the same rating are ordered by title so the display order is
/// stable across fetches.
///
/// # Errors
///
/// Returns an error if the SQL query fails or if there is a type mismatch
/// when mapping the database rows to the [`Recipe`] struct.
pub(crate) fn fetch_top_rating(conn: &Connection, limit: u32) -> Result<Vec<Recipe>> {
    let sql = "
        SELECT r.id, r.title, r.rating, r.description,
               (SELECT group_concat(t.tag, char(31)) FROM recipe_tags t WHERE t.recipe_id = r.id)
        FROM recipes r
        ORDER BY r.rating DESC, r.title
        LIMIT ?";

    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params![limit], Recipe::from_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeId;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn fetch_from_empty_catalog_returns_no_recipes() {
        let conn = memory_db();

        assert!(fetch_top_rating(&conn, 10).unwrap().is_empty());
    }

    #[test]
    fn fetch_orders_by_rating_then_title() {
        let conn = memory_db();
        insert_recipe(&conn, "Tacos", 4, "", &["mexican"]).unwrap();
        insert_recipe(&conn, "Pasta", 5, "", &[]).unwrap();
        insert_recipe(&conn, "Pad Thai", 5, "", &["thai", "noodles"]).unwrap();

        let recipes = fetch_top_rating(&conn, 10).unwrap();

        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pad Thai", "Pasta", "Tacos"]);
    }

    #[test]
    fn fetch_maps_tags_and_identity() {
        let conn = memory_db();
        let id = insert_recipe(&conn, "Pad Thai", 5, "Noodles", &["thai", "noodles"]).unwrap();

        let recipes = fetch_top_rating(&conn, 10).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, RecipeId(id));
        assert_eq!(recipes[0].description, "Noodles");
        let mut tags = recipes[0].tags.clone();
        tags.sort();
        assert_eq!(tags, vec!["noodles", "thai"]);
    }

    #[test]
    fn fetch_respects_limit() {
        let conn = memory_db();
        seed_if_empty(&conn).unwrap();

        assert_eq!(fetch_top_rating(&conn, 2).unwrap().len(), 2);
    }

    #[test]
    fn seed_only_populates_empty_catalog() {
        let conn = memory_db();

        assert_eq!(seed_if_empty(&conn).unwrap(), 6);
        assert_eq!(seed_if_empty(&conn).unwrap(), 0);
    }

    #[test]
    fn failed_seed_rolls_back() {
        let conn = memory_db();
        conn.execute_batch(
            "CREATE TRIGGER reject_ramen BEFORE INSERT ON recipes
             WHEN NEW.title = 'Ramen'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

        assert!(seed_if_empty(&conn).is_err());

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM recipes", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 0);
        assert!(conn.is_autocommit());
    }
}
