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

//! Render the search bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::SearchBar, render::Render, theme::Theme};

const PROMPT: &str = "/ ";

impl Render for SearchBar {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = if self.is_active() {
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(theme.accent_colour)),
                Span::styled(self.input.value(), Style::default().fg(theme.text_colour)),
            ])
        } else {
            Line::from(Span::styled(
                "Press / to search",
                Style::default().fg(theme.muted_colour),
            ))
        };

        f.render_widget(Paragraph::new(line), area);

        if self.is_active() {
            let cursor_x = area.x + (PROMPT.len() + self.input.visual_cursor()) as u16;
            f.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}
