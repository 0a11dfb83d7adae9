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

//! Key routing for the home screen.
//!
//! While the search bar is open it receives all printable input; the arrow
//! keys and `Enter` still drive the list so a result can be picked without
//! leaving the search.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    components::{RecipeListAction, SearchAction},
    screen::HomeScreen,
};

impl HomeScreen {
    /// Handles `key`, returning true if the screen consumed it.
    ///
    /// # Errors
    ///
    /// Returns an error if a refresh cannot be posted to the task worker.
    pub(crate) fn process_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if !self.is_active() {
            return Ok(false);
        }

        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.refresh()?;
            return Ok(true);
        }

        let event = Event::Key(key);
        let typing = self.search.is_active();

        if typing {
            if self.list.process_event(&event, true).is_some() {
                return Ok(true);
            }

            if let Some(SearchAction::QueryChanged | SearchAction::Dismissed) =
                self.search.process_event(&event)
            {
                self.rerender();
            }

            return Ok(true);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.activate_search();
                Ok(true)
            }

            KeyCode::Char('r') => {
                self.refresh()?;
                Ok(true)
            }

            _ => Ok(matches!(
                self.list.process_event(&event, false),
                Some(RecipeListAction::Moved | RecipeListAction::Activated(_))
            )),
        }
    }
}
