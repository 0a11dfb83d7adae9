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

//! Search bar state and query filtering.
//!
//! The search bar owns the text query and turns the baseline collection into
//! the collection shown by the recipe list. The baseline itself is never
//! modified, so dismissing the search always restores the unfiltered view.
//!
//! ```text
//! Inactive --activate--> Active("") --input--> Active(q) --dismiss--> Inactive
//! ```

mod event;
mod render;

use thiserror::Error;
use tracing::debug;
use tui_input::Input;

use crate::{
    config::SearchConfig,
    model::{
        RecipeCollection,
        search::{MatchMode, SearchQuery},
    },
};

#[derive(Debug, Error, Eq, PartialEq)]
pub(crate) enum SearchError {
    #[error("search bar is already attached to a screen")]
    DoubleAttachment,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub(crate) enum SearchState {
    #[default]
    Inactive,
    Active,
}

/// Outcome of a key event handled by the search bar.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum SearchAction {
    QueryChanged,
    Dismissed,
}

pub(crate) struct SearchBar {
    state: SearchState,
    attached: bool,
    pub(crate) input: Input,
    query: SearchQuery,
    mode: MatchMode,
    keep_query_on_dismiss: bool,
}

impl SearchBar {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            state: SearchState::Inactive,
            attached: false,
            input: Input::default(),
            query: SearchQuery::new("", config.match_mode),
            mode: config.match_mode,
            keep_query_on_dismiss: config.keep_query_on_dismiss,
        }
    }

    /// Installs the search bar on its host screen.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DoubleAttachment`] if already attached, in which
    /// case nothing changes.
    pub(crate) fn attach(&mut self) -> Result<(), SearchError> {
        if self.attached {
            return Err(SearchError::DoubleAttachment);
        }
        self.attached = true;

        Ok(())
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn state(&self) -> SearchState {
        self.state
    }

    pub(crate) fn is_active(&self) -> bool {
        self.state() == SearchState::Active
    }

    /// Opens the search bar. Returns false if it was already open.
    pub(crate) fn activate(&mut self) -> bool {
        if self.is_active() {
            return false;
        }

        self.state = SearchState::Active;
        self.sync_query();
        debug!(query = self.query.as_str(), "search activated");

        true
    }

    /// Replaces the query text, opening the search bar if needed.
    pub(crate) fn on_query_change(&mut self, text: &str) {
        self.state = SearchState::Active;
        self.input = Input::new(text.to_string());
        self.sync_query();
    }

    /// Closes the search bar. Returns false if it was not open.
    pub(crate) fn dismiss(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        self.state = SearchState::Inactive;
        if !self.keep_query_on_dismiss {
            self.input.reset();
        }
        self.sync_query();
        debug!("search dismissed");

        true
    }

    /// The query in effect; always empty while the bar is inactive.
    pub(crate) fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Produces the collection to render from `baseline`.
    pub(crate) fn filter(&self, baseline: &RecipeCollection) -> RecipeCollection {
        self.query.apply(baseline)
    }

    fn sync_query(&mut self) {
        let text = match self.state {
            SearchState::Active => self.input.value(),
            SearchState::Inactive => "",
        };
        self.query = SearchQuery::new(text, self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeId, fixtures};

    fn search_bar() -> SearchBar {
        SearchBar::new(&SearchConfig::default())
    }

    #[test]
    fn attach_twice_is_rejected() {
        let mut search = search_bar();

        assert_eq!(search.attach(), Ok(()));
        assert_eq!(search.attach(), Err(SearchError::DoubleAttachment));
        assert!(search.is_attached());
    }

    #[test]
    fn starts_inactive_with_empty_query() {
        let search = search_bar();

        assert_eq!(search.state(), SearchState::Inactive);
        assert!(search.query().is_empty());
    }

    #[test]
    fn activate_opens_with_empty_query() {
        let mut search = search_bar();

        assert!(search.activate());
        assert!(!search.activate());
        assert!(search.is_active());
        assert!(search.query().is_empty());
    }

    #[test]
    fn query_change_filters_baseline() {
        let mut search = search_bar();
        search.activate();

        search.on_query_change("ta");

        assert_eq!(search.filter(&fixtures::baseline()).ids(), vec![RecipeId(2)]);

        search.on_query_change("");

        assert_eq!(search.filter(&fixtures::baseline()), fixtures::baseline());
    }

    #[test]
    fn dismiss_restores_baseline_and_resets_query() {
        let mut search = search_bar();
        search.on_query_change("tacos");

        assert!(search.dismiss());
        assert_eq!(search.filter(&fixtures::baseline()), fixtures::baseline());

        search.activate();
        assert!(search.query().is_empty());
        assert_eq!(search.input.value(), "");
    }

    #[test]
    fn dismiss_can_keep_query_for_reactivation() {
        let config = SearchConfig {
            keep_query_on_dismiss: true,
            ..SearchConfig::default()
        };
        let mut search = SearchBar::new(&config);
        search.on_query_change("pad");

        search.dismiss();
        assert!(search.query().is_empty());
        assert_eq!(search.filter(&fixtures::baseline()).len(), 3);

        search.activate();
        assert_eq!(search.query().as_str(), "pad");
        assert_eq!(search.filter(&fixtures::baseline()).ids(), vec![RecipeId(3)]);
    }

    #[test]
    fn dismiss_when_inactive_is_a_no_op() {
        let mut search = search_bar();

        assert!(!search.dismiss());
    }
}
