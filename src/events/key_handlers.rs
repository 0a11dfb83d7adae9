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
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{App, events::AppEvent};

/// Routes keyboard input through the application's input layers.
///
/// Keys are offered, in order, to:
///
/// * **Command line**: while open it consumes every key. It is not offered
///   keys while the search bar is being typed into.
/// * **Home screen**: search input, list navigation and refresh.
/// * **Global bindings**: quitting and dismissing the detail pane.
///
/// # Errors
///
/// Returns an error if an event or task cannot be posted.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let typing = app.home.as_ref().is_some_and(|home| home.search().is_active());
    if !typing && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if let Some(home) = app.home.as_mut() {
        if home.process_key_event(key)? {
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Esc => {
            app.selected_recipe = None;
            app.last_error = None;
        }

        _ => {}
    }

    Ok(())
}
