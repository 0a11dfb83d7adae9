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

//! UI rendering logic for the recipe list.
//!
//! This module handles the visual representation of the recipe collection,
//! including column layout, highlight styling and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::RecipeList, render::Render, theme::Theme, util::format::format_rating};

impl Render for RecipeList {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.items.iter().map(|recipe| {
            Row::new(vec![
                Cell::from(
                    Line::from(format_rating(recipe.rating))
                        .style(Style::default().fg(theme.rating_colour)),
                ),
                Cell::from(
                    Line::from(recipe.title.as_str()).style(Style::default().fg(theme.text_colour)),
                ),
                Cell::from(
                    Line::from(recipe.tags.join(", "))
                        .style(Style::default().fg(theme.muted_colour)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(60),
                Constraint::Percentage(40),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Rating"),
                Cell::from("Recipe"),
                Cell::from("Tags"),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(theme.highlight_fg_colour),
        )
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
