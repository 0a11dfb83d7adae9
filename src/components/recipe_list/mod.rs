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

//! Interactive recipe list and its rendering state.
//!
//! The list owns the collection currently on screen together with the table
//! highlight. Collections are only ever replaced wholesale through
//! [`RecipeList::set_items`], which triggers a full re-render; there is no
//! incremental diffing. Activating a row hands the exact recipe at that
//! position to the installed selection handler.

mod event;
mod render;

use ratatui::widgets::TableState;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Recipe, RecipeCollection, RecipeId};

/// Callback raised synchronously when a recipe row is activated.
pub(crate) type SelectHandler = Box<dyn FnMut(&Recipe)>;

#[derive(Debug, Error, Eq, PartialEq)]
pub(crate) enum ListError {
    #[error("index {index} is out of range for a list of {len} recipes")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Outcome of a key event handled by the list.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RecipeListAction {
    Moved,
    Activated(RecipeId),
}

pub(crate) struct RecipeList {
    items: RecipeCollection,
    table_state: TableState,
    revision: u64,
    on_select: Option<SelectHandler>,
}

impl RecipeList {
    pub(crate) fn new() -> Self {
        Self {
            items: RecipeCollection::new(),
            table_state: TableState::new(),
            revision: 0,
            on_select: None,
        }
    }

    pub(crate) fn set_on_select(&mut self, handler: SelectHandler) {
        self.on_select = Some(handler);
    }

    /// Replaces the displayed collection and requests a full re-render.
    ///
    /// The highlight follows the previously highlighted recipe by identity
    /// when it survives the replacement, otherwise it resets to the first row.
    pub(crate) fn set_items(&mut self, items: RecipeCollection) {
        let highlighted = self.selected_recipe().map(|r| r.id);

        self.items = items;
        self.revision += 1;

        let index = highlighted
            .and_then(|id| self.items.position(id))
            .or_else(|| (!self.items.is_empty()).then_some(0));
        self.table_state.select(index);
        if index.is_none() {
            *self.table_state.offset_mut() = 0;
        }

        debug!(
            len = self.items.len(),
            revision = self.revision,
            "recipe list re-rendered"
        );
    }

    #[cfg(test)]
    pub(crate) fn items(&self) -> &RecipeCollection {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of full re-renders requested so far.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn cell_at(&self, index: usize) -> Result<&Recipe, ListError> {
        self.items.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    #[cfg(test)]
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn selected_recipe(&self) -> Option<&Recipe> {
        self.items.get(self.table_state.selected()?)
    }

    /// Activates the row at `index`, invoking the selection handler with the
    /// recipe currently at that position.
    pub(crate) fn activate(&mut self, index: usize) -> Result<RecipeId, ListError> {
        let recipe = match self.cell_at(index) {
            Ok(recipe) => recipe.clone(),
            Err(err) => {
                warn!("{err}");
                return Err(err);
            }
        };

        match self.on_select.as_mut() {
            Some(handler) => handler(&recipe),
            None => debug!(id = %recipe.id, "recipe activated with no handler installed"),
        }

        Ok(recipe.id)
    }

    pub(crate) fn activate_selected(&mut self) -> Option<RecipeId> {
        let index = self.table_state.selected()?;
        self.activate(index).ok()
    }

    fn goto_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use proptest::prelude::*;

    use super::*;
    use crate::model::fixtures;

    fn recording_list() -> (RecipeList, Rc<RefCell<Vec<Recipe>>>) {
        let selected = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&selected);

        let mut list = RecipeList::new();
        list.set_on_select(Box::new(move |recipe| sink.borrow_mut().push(recipe.clone())));

        (list, selected)
    }

    #[test]
    fn new_list_is_empty_without_highlight() {
        let list = RecipeList::new();

        assert!(list.is_empty());
        assert_eq!(list.selected_index(), None);
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn set_items_replaces_collection_and_highlights_first_row() {
        let mut list = RecipeList::new();

        list.set_items(fixtures::baseline());

        assert_eq!(list.len(), 3);
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.cell_at(2).map(|r| r.id), Ok(RecipeId(3)));
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn set_items_twice_is_idempotent() {
        let mut once = RecipeList::new();
        once.set_items(fixtures::baseline());

        let mut twice = RecipeList::new();
        twice.set_items(fixtures::baseline());
        twice.set_items(fixtures::baseline());

        assert_eq!(once.items(), twice.items());
        assert_eq!(once.selected_index(), twice.selected_index());
    }

    #[test]
    fn highlight_follows_recipe_identity_across_replacement() {
        let mut list = RecipeList::new();
        list.set_items(fixtures::baseline());
        list.goto_last();

        list.set_items(RecipeCollection::from(vec![
            fixtures::pad_thai(),
            fixtures::pasta(),
        ]));

        assert_eq!(list.selected_recipe().map(|r| r.id), Some(RecipeId(3)));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn highlight_resets_when_recipe_disappears() {
        let mut list = RecipeList::new();
        list.set_items(fixtures::baseline());
        list.goto_next();

        list.set_items(RecipeCollection::from(vec![fixtures::pad_thai()]));

        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn empty_replacement_clears_highlight() {
        let mut list = RecipeList::new();
        list.set_items(fixtures::baseline());

        list.set_items(RecipeCollection::new());

        assert_eq!(list.selected_index(), None);
        assert_eq!(list.activate_selected(), None);
    }

    #[test]
    fn cell_at_out_of_range_is_an_error() {
        let mut list = RecipeList::new();
        list.set_items(fixtures::baseline());

        assert_eq!(
            list.cell_at(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn activate_out_of_range_does_not_fire_handler() {
        let (mut list, selected) = recording_list();
        list.set_items(fixtures::baseline());

        let result = list.activate(10);

        assert_eq!(result, Err(ListError::IndexOutOfRange { index: 10, len: 3 }));
        assert!(selected.borrow().is_empty());
    }

    #[test]
    fn activation_uses_current_collection_after_filtering() {
        let (mut list, selected) = recording_list();
        list.set_items(fixtures::baseline());
        list.set_items(RecipeCollection::from(vec![
            fixtures::pasta(),
            fixtures::pad_thai(),
        ]));

        let id = list.activate(1);

        assert_eq!(id, Ok(RecipeId(3)));
        assert_eq!(*selected.borrow(), vec![fixtures::pad_thai()]);
    }

    #[test]
    fn activate_fires_handler_once_per_activation() {
        let (mut list, selected) = recording_list();
        list.set_items(fixtures::baseline());

        list.activate_selected();

        assert_eq!(selected.borrow().len(), 1);
        assert_eq!(selected.borrow()[0].id, RecipeId(1));
    }

    #[test]
    fn navigation_wraps_around() {
        let mut list = RecipeList::new();
        list.set_items(fixtures::baseline());

        list.goto_previous();
        assert_eq!(list.selected_index(), Some(2));

        list.goto_next();
        assert_eq!(list.selected_index(), Some(0));
    }

    fn arb_collection() -> impl Strategy<Value = RecipeCollection> {
        prop::collection::vec(0u8..=5, 0..12).prop_map(|ratings| {
            ratings
                .into_iter()
                .enumerate()
                .map(|(i, rating)| Recipe::new(i as i64, format!("Recipe {i}"), rating))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn activation_matches_most_recent_collection(
            first in arb_collection(),
            second in arb_collection(),
            index in 0usize..12,
        ) {
            let (mut list, selected) = recording_list();
            list.set_items(first);
            list.set_items(second.clone());

            let result = list.activate(index);

            match second.get(index) {
                Some(expected) => {
                    let last = selected.borrow().last().cloned();
                    prop_assert_eq!(result, Ok(expected.id));
                    prop_assert_eq!(last, Some(expected.clone()));
                }
                None => {
                    prop_assert!(result.is_err());
                    prop_assert!(selected.borrow().is_empty());
                }
            }
        }

        #[test]
        fn cell_count_tracks_latest_collection(collection in arb_collection()) {
            let mut list = RecipeList::new();
            list.set_items(collection.clone());

            prop_assert_eq!(list.len(), collection.len());
            for index in 0..collection.len() {
                prop_assert_eq!(list.cell_at(index).ok(), collection.get(index));
            }
        }
    }
}
