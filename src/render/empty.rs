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

//! Placeholder shown in place of an empty list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::theme::Theme;

pub(crate) fn draw_empty(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(
        Paragraph::new(text)
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.muted_colour),
            )
            .alignment(Alignment::Center),
        line,
    );
}
