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

//! Render the home screen: search bar, recipe list and status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    render::{Render, empty::draw_empty},
    screen::{HomeScreen, SCREEN_TITLE},
    theme::Theme,
};

impl Render for HomeScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(
                Line::from(format!(" {} ", SCREEN_TITLE))
                    .style(Style::default().fg(theme.accent_colour)),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let search_height = if self.search.is_attached() { 1 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(search_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        if self.search.is_attached() {
            self.search.draw(f, rows[0], theme);
        }

        if self.list.is_empty() {
            draw_empty(f, rows[1], &self.placeholder(), theme);
        } else {
            self.list.draw(f, rows[1], theme);
        }

        self.draw_status(f, rows[2], theme);
    }
}

impl HomeScreen {
    fn placeholder(&self) -> String {
        if self.refresh_indicator().is_pending() && self.baseline().is_empty() {
            "Loading recipes...".to_string()
        } else if !self.search().query().is_empty() {
            format!("No recipes match \"{}\"", self.search().query().as_str().trim())
        } else {
            "No recipes".to_string()
        }
    }

    fn draw_status(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = if let Some(spinner) = self.refresh_indicator().spinner() {
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(theme.accent_colour)),
                Span::styled(" Refreshing", Style::default().fg(theme.muted_colour)),
            ])
        } else {
            Line::from(Span::styled(
                format!("{} of {} recipes", self.list().len(), self.baseline().len()),
                Style::default().fg(theme.muted_colour),
            ))
        };

        f.render_widget(Paragraph::new(line), area);
    }
}
