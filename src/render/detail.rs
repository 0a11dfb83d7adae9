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

//! Render the most recently selected recipe.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{model::Recipe, theme::Theme, util::format::format_rating};

pub(crate) fn draw_detail(f: &mut Frame, area: Rect, recipe: &Recipe, theme: &Theme) {
    let block = Block::default()
        .title(
            Line::from(format!(" {} ", recipe.id))
                .style(Style::default().fg(theme.muted_colour)),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(Span::styled(
            recipe.title.as_str(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.text_colour),
        )),
        Line::from(Span::styled(
            format_rating(recipe.rating),
            Style::default().fg(theme.rating_colour),
        )),
        Line::from(""),
    ];

    if !recipe.description.is_empty() {
        lines.push(Line::from(Span::styled(
            recipe.description.as_str(),
            Style::default().fg(theme.text_colour),
        )));
        lines.push(Line::from(""));
    }

    if !recipe.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            recipe.tags.join(", "),
            Style::default().fg(theme.muted_colour),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
