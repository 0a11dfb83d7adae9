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

//! Application events and the main event loop.
//!
//! Every state change of the application happens on the thread running
//! [`process_events`]. Key presses, timer ticks and task completions all
//! arrive as [`AppEvent`]s on one channel and are applied in the order they
//! are received, so the screen state needs no locking.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Recipe, render::draw, service::FetchOutcome};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    RecipesFetched(FetchOutcome),
    RecipeSelected(Recipe),

    Refresh,
    Search(String),
    ClearSearch,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::RecipesFetched(outcome) => handle_recipes_fetched(app, outcome),
        AppEvent::RecipeSelected(recipe) => handle_recipe_selected(app, recipe),
        AppEvent::Refresh => handle_refresh(app)?,
        AppEvent::Search(text) => handle_search(app, &text),
        AppEvent::ClearSearch => handle_clear_search(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
