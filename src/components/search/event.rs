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

//! Event routing for the search bar.
//!
//! While the bar is active, key events are delegated to the managed text
//! input and every edit is reported as a query change.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBar};

impl SearchBar {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        if !self.is_active() {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc => self.dismiss().then_some(SearchAction::Dismissed),

            _ => {
                let changed = self
                    .input
                    .handle_event(event)
                    .is_some_and(|change| change.value);
                if changed {
                    self.sync_query();
                    Some(SearchAction::QueryChanged)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::config::SearchConfig;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ignores_keys_while_inactive() {
        let mut search = SearchBar::new(&SearchConfig::default());

        assert_eq!(search.process_event(&key(KeyCode::Char('a'))), None);
        assert!(search.query().is_empty());
    }

    #[test]
    fn typing_updates_query() {
        let mut search = SearchBar::new(&SearchConfig::default());
        search.activate();

        search.process_event(&key(KeyCode::Char('t')));
        let action = search.process_event(&key(KeyCode::Char('a')));

        assert_eq!(action, Some(SearchAction::QueryChanged));
        assert_eq!(search.query().as_str(), "ta");

        search.process_event(&key(KeyCode::Backspace));
        assert_eq!(search.query().as_str(), "t");
    }

    #[test]
    fn escape_dismisses() {
        let mut search = SearchBar::new(&SearchConfig::default());
        search.activate();
        search.process_event(&key(KeyCode::Char('x')));

        let action = search.process_event(&key(KeyCode::Esc));

        assert_eq!(action, Some(SearchAction::Dismissed));
        assert!(!search.is_active());
        assert!(search.query().is_empty());
    }
}
