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

//! Input handling for the recipe list.
//!
//! Maps terminal key events to list navigation and row activation.

use crossterm::event::{Event, KeyCode};

use crate::components::{RecipeList, RecipeListAction};

impl RecipeList {
    /// Handles `event` when it is a list key, returning what happened.
    ///
    /// Only arrow keys and `Enter` are accepted when `typing` is set, so that
    /// the vim-style letters reach the search input instead.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        typing: bool,
    ) -> Option<RecipeListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, typing) {
            (KeyCode::Down, _) | (KeyCode::Char('j'), false) => self.goto_next(),
            (KeyCode::Up, _) | (KeyCode::Char('k'), false) => self.goto_previous(),
            (KeyCode::Home, _) | (KeyCode::Char('g'), false) => self.goto_first(),
            (KeyCode::End, _) | (KeyCode::Char('G'), false) => self.goto_last(),

            (KeyCode::Enter, _) => {
                return self.activate_selected().map(RecipeListAction::Activated);
            }

            _ => return None,
        }

        Some(RecipeListAction::Moved)
    }
}
