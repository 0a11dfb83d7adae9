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

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{App, model::Recipe, service::FetchOutcome};

pub(super) fn handle_recipes_fetched(app: &mut App, outcome: FetchOutcome) {
    match app.home.as_mut() {
        Some(home) => home.complete_fetch(outcome),
        None => debug!("fetch completed after the home screen was torn down"),
    }
}

pub(super) fn handle_recipe_selected(app: &mut App, recipe: Recipe) {
    info!(id = %recipe.id, title = recipe.title.as_str(), "recipe selected");
    app.selected_recipe = Some(recipe);
}

pub(super) fn handle_refresh(app: &mut App) -> Result<()> {
    if let Some(home) = app.home.as_mut() {
        home.refresh()?;
    }

    Ok(())
}

pub(super) fn handle_search(app: &mut App, text: &str) {
    if let Some(home) = app.home.as_mut() {
        home.on_query_change(text);
    }
}

pub(super) fn handle_clear_search(app: &mut App) {
    if let Some(home) = app.home.as_mut() {
        home.dismiss_search();
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.last_error = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    if let Some(home) = app.home.as_mut() {
        home.tick();
    }
}
