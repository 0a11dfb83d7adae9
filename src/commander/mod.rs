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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: it handles a text input
//! and posts the corresponding application event when a command is
//! submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an event to the command line, returning `true` if it was consumed.
    ///
    /// While inactive only `:` is consumed, which opens the command line.
    /// While active every key is consumed: `Esc` closes, `Enter` submits and
    /// anything else edits the input.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();
                if !buffer.is_empty() {
                    let _ = self.run_command(&buffer, event_tx);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        debug!(command = buffer, "running command");

        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

            ["r"] | ["refresh"] => event_tx.send(AppEvent::Refresh)?,

            ["search", query_parts @ ..] if !query_parts.is_empty() => {
                event_tx.send(AppEvent::Search(query_parts.join(" ")))?
            }

            ["clear"] => event_tx.send(AppEvent::ClearSearch)?,

            [] => {}

            [cmd, ..] => event_tx.send(AppEvent::Error(format!("Unknown command: {}", cmd)))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn submit(commander: &mut Commander, tx: &Sender<AppEvent>, text: &str) {
        commander.handle_event(&key(KeyCode::Char(':')), tx);
        for c in text.chars() {
            commander.handle_event(&key(KeyCode::Char(c)), tx);
        }
        commander.handle_event(&key(KeyCode::Enter), tx);
    }

    fn channel() -> (Sender<AppEvent>, Receiver<AppEvent>) {
        mpsc::channel()
    }

    #[test]
    fn inactive_commander_ignores_other_keys() {
        let (tx, _rx) = channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &tx));
        assert!(!commander.active());
    }

    #[test]
    fn colon_opens_and_esc_closes() {
        let (tx, rx) = channel();
        let mut commander = Commander::new();

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());
        assert!(commander.handle_event(&key(KeyCode::Char('x')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Esc), &tx));

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn search_command_posts_joined_query() {
        let (tx, rx) = channel();
        let mut commander = Commander::new();

        submit(&mut commander, &tx, "search pad thai");

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Search(q)) if q == "pad thai"));
        assert!(!commander.active());
    }

    #[test]
    fn refresh_clear_and_quit_commands() {
        let (tx, rx) = channel();
        let mut commander = Commander::new();

        submit(&mut commander, &tx, "refresh");
        submit(&mut commander, &tx, "clear");
        submit(&mut commander, &tx, "q");

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Refresh)));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ClearSearch)));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn unknown_command_reports_error() {
        let (tx, rx) = channel();
        let mut commander = Commander::new();

        submit(&mut commander, &tx, "bake now");

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(m)) if m == "Unknown command: bake"));
    }

    #[test]
    fn search_without_text_is_unknown() {
        let (tx, rx) = channel();
        let mut commander = Commander::new();

        submit(&mut commander, &tx, "search");

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(_))));
    }
}
