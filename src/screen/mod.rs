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

//! The home screen, listing the top rated recipes.
//!
//! [`HomeScreen`] owns the recipe list, the search bar and the refresh
//! indicator, and is the only place the baseline collection lives. The
//! rendered collection is always recomputed from the baseline and the current
//! query, never edited in place:
//!
//! * the baseline changes only when a fetch completes successfully;
//! * the query changes only through the search bar.
//!
//! Fetches are posted to the task worker and complete through
//! [`HomeScreen::complete_fetch`] on the UI thread. Each fetch ends the
//! refresh indicator exactly once, whether it succeeded or failed.

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    components::{RecipeList, RefreshIndicator, SearchBar, SelectHandler},
    config::SearchConfig,
    model::RecipeCollection,
    service::FetchOutcome,
    tasks::AppTask,
};

pub(crate) const SCREEN_TITLE: &str = "Recipes";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Lifecycle {
    Created,
    Active,
    TornDown,
}

pub(crate) struct HomeScreen {
    lifecycle: Lifecycle,
    baseline: RecipeCollection,
    list: RecipeList,
    search: SearchBar,
    refresh: RefreshIndicator,
    task_tx: Sender<AppTask>,
    on_recipe_selected: Option<SelectHandler>,
}

impl HomeScreen {
    /// Creates the screen with an empty baseline.
    ///
    /// # Arguments
    ///
    /// * `task_tx` - Channel to the task worker that performs fetches.
    /// * `search_config` - Match mode and dismiss policy for the search bar.
    /// * `on_recipe_selected` - Raised with the activated recipe.
    pub(crate) fn new(
        task_tx: Sender<AppTask>,
        search_config: &SearchConfig,
        on_recipe_selected: SelectHandler,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::Created,
            baseline: RecipeCollection::new(),
            list: RecipeList::new(),
            search: SearchBar::new(search_config),
            refresh: RefreshIndicator::new(),
            task_tx,
            on_recipe_selected: Some(on_recipe_selected),
        }
    }

    /// Wires the components together and performs the initial fetch.
    ///
    /// Calling this again once active does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial fetch cannot be posted to the task
    /// worker.
    pub(crate) fn activate(&mut self) -> Result<()> {
        if self.lifecycle != Lifecycle::Created {
            debug!(lifecycle = ?self.lifecycle, "home screen already activated");
            return Ok(());
        }

        if let Err(e) = self.search.attach() {
            warn!("{}", e);
        }

        if let Some(handler) = self.on_recipe_selected.take() {
            self.list.set_on_select(handler);
        }

        self.lifecycle = Lifecycle::Active;
        info!("home screen activated");

        self.fetch()
    }

    /// Releases the baseline. Fetch completions arriving later are ignored.
    pub(crate) fn teardown(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
        self.baseline = RecipeCollection::new();
        self.list.set_items(RecipeCollection::new());
        self.refresh.end_refresh();

        let (begun, ended) = self.refresh.counts();
        debug!(
            begun,
            ended,
            revision = self.list.revision(),
            "home screen torn down"
        );
    }

    pub(crate) fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    /// Requests the top rated recipes from the task worker.
    ///
    /// A request made while a fetch is already pending is coalesced into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the task worker is gone. The refresh indicator is
    /// ended before returning so it cannot be left running.
    pub(crate) fn fetch(&mut self) -> Result<()> {
        if !self.is_active() || !self.refresh.begin_refresh() {
            return Ok(());
        }

        if let Err(e) = self.task_tx.send(AppTask::FetchTopRating) {
            self.refresh.end_refresh();
            return Err(e).context("Failed to request top rated recipes");
        }

        Ok(())
    }

    /// Pull-to-refresh trigger.
    pub(crate) fn refresh(&mut self) -> Result<()> {
        self.fetch()
    }

    /// Applies the completion of a fetch.
    ///
    /// A loaded collection replaces the baseline and is re-rendered through
    /// the current query. A failure leaves the baseline and the rendered list
    /// untouched. Either way the refresh indicator ends.
    pub(crate) fn complete_fetch(&mut self, outcome: FetchOutcome) {
        if !self.is_active() {
            debug!("fetch completion ignored, home screen is not active");
            return;
        }

        match outcome {
            FetchOutcome::Loaded(collection) => {
                info!(count = collection.len(), "baseline replaced");
                self.baseline = collection;
                self.rerender();
            }

            FetchOutcome::Failed(message) => {
                warn!("refresh completed with no change: {}", message);
            }
        }

        self.refresh.end_refresh();
    }

    /// Replaces the query text and re-renders the filtered baseline.
    pub(crate) fn on_query_change(&mut self, text: &str) {
        self.search.on_query_change(text);
        self.rerender();
    }

    pub(crate) fn activate_search(&mut self) {
        if self.search.activate() {
            self.rerender();
        }
    }

    pub(crate) fn dismiss_search(&mut self) {
        if self.search.dismiss() {
            self.rerender();
        }
    }

    pub(crate) fn tick(&mut self) {
        self.refresh.tick();
    }

    pub(crate) fn baseline(&self) -> &RecipeCollection {
        &self.baseline
    }

    pub(crate) fn list(&self) -> &RecipeList {
        &self.list
    }

    pub(crate) fn search(&self) -> &SearchBar {
        &self.search
    }

    pub(crate) fn refresh_indicator(&self) -> &RefreshIndicator {
        &self.refresh
    }

    fn rerender(&mut self) {
        self.list.set_items(self.search.filter(&self.baseline));
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::mpsc::{self, Receiver},
    };

    use super::*;
    use crate::model::{Recipe, RecipeId, fixtures};

    struct Harness {
        screen: HomeScreen,
        task_rx: Receiver<AppTask>,
        selected: Rc<RefCell<Vec<Recipe>>>,
    }

    fn harness() -> Harness {
        let (task_tx, task_rx) = mpsc::channel();
        let selected = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&selected);

        let screen = HomeScreen::new(
            task_tx,
            &SearchConfig::default(),
            Box::new(move |recipe| sink.borrow_mut().push(recipe.clone())),
        );

        Harness {
            screen,
            task_rx,
            selected,
        }
    }

    fn fetches(task_rx: &Receiver<AppTask>) -> usize {
        task_rx.try_iter().count()
    }

    fn active_with_baseline() -> Harness {
        let mut h = harness();
        h.screen.activate().unwrap();
        h.screen.complete_fetch(FetchOutcome::Loaded(fixtures::baseline()));
        fetches(&h.task_rx);
        h
    }

    #[test]
    fn starts_with_empty_baseline() {
        let h = harness();

        assert!(h.screen.baseline().is_empty());
        assert!(h.screen.list().is_empty());
        assert!(!h.screen.is_active());
    }

    #[test]
    fn activation_attaches_search_and_fetches_once() {
        let mut h = harness();

        h.screen.activate().unwrap();

        assert!(h.screen.search().is_attached());
        assert!(h.screen.refresh_indicator().is_pending());
        assert_eq!(fetches(&h.task_rx), 1);

        h.screen.activate().unwrap();
        assert_eq!(fetches(&h.task_rx), 0);
    }

    #[test]
    fn fetch_before_activation_does_nothing() {
        let mut h = harness();

        h.screen.fetch().unwrap();

        assert_eq!(fetches(&h.task_rx), 0);
        assert!(!h.screen.refresh_indicator().is_pending());
    }

    #[test]
    fn successful_fetch_replaces_baseline_and_ends_refresh() {
        let mut h = harness();
        h.screen.activate().unwrap();

        h.screen.complete_fetch(FetchOutcome::Loaded(fixtures::baseline()));

        assert_eq!(h.screen.baseline(), &fixtures::baseline());
        assert_eq!(h.screen.list().items(), &fixtures::baseline());
        assert!(!h.screen.refresh_indicator().is_pending());
        assert_eq!(h.screen.refresh_indicator().counts(), (1, 1));
    }

    #[test]
    fn failed_fetch_keeps_rendered_collection_and_ends_refresh() {
        let mut h = active_with_baseline();
        let before = h.screen.list().items().ids();

        h.screen.refresh().unwrap();
        h.screen.complete_fetch(FetchOutcome::Failed("timed out".to_string()));

        assert_eq!(h.screen.list().items().ids(), before);
        assert_eq!(h.screen.baseline(), &fixtures::baseline());
        assert!(!h.screen.refresh_indicator().is_pending());
        assert_eq!(h.screen.refresh_indicator().counts(), (2, 2));
    }

    #[test]
    fn every_begin_has_one_end_for_both_outcomes() {
        let mut h = active_with_baseline();

        for outcome in [
            FetchOutcome::Failed("offline".to_string()),
            FetchOutcome::Loaded(fixtures::baseline()),
            FetchOutcome::Failed("offline".to_string()),
        ] {
            h.screen.refresh().unwrap();
            assert!(h.screen.refresh_indicator().is_pending());

            h.screen.complete_fetch(outcome);
            assert!(!h.screen.refresh_indicator().is_pending());
        }

        let (begun, ended) = h.screen.refresh_indicator().counts();
        assert_eq!(begun, ended);
        assert_eq!(begun, 4);
    }

    #[test]
    fn refresh_while_pending_is_coalesced() {
        let mut h = active_with_baseline();

        h.screen.refresh().unwrap();
        h.screen.refresh().unwrap();

        assert_eq!(fetches(&h.task_rx), 1);
    }

    #[test]
    fn empty_fetch_renders_empty_list() {
        let mut h = active_with_baseline();
        h.screen.refresh().unwrap();

        h.screen.complete_fetch(FetchOutcome::Loaded(RecipeCollection::new()));

        assert!(h.screen.list().is_empty());
        assert_eq!(h.screen.list().selected_index(), None);
        assert!(!h.screen.refresh_indicator().is_pending());
    }

    #[test]
    fn fetch_respects_active_query() {
        let mut h = active_with_baseline();
        h.screen.on_query_change("ta");
        h.screen.refresh().unwrap();

        h.screen.complete_fetch(FetchOutcome::Loaded(RecipeCollection::from(vec![
            fixtures::tacos(),
            Recipe::new(9, "Tamales", 4),
            fixtures::pasta(),
        ])));

        assert_eq!(h.screen.list().items().ids(), vec![RecipeId(2), RecipeId(9)]);
        assert_eq!(h.screen.baseline().len(), 3);
    }

    #[test]
    fn query_scenario_filters_and_restores_baseline() {
        let mut h = active_with_baseline();

        h.screen.on_query_change("ta");
        assert_eq!(h.screen.list().items().ids(), vec![RecipeId(2)]);

        h.screen.on_query_change("");
        assert_eq!(h.screen.list().items(), &fixtures::baseline());
    }

    #[test]
    fn dismissing_search_restores_unfiltered_view() {
        let mut h = active_with_baseline();
        h.screen.activate_search();
        h.screen.on_query_change("pad");
        assert_eq!(h.screen.list().len(), 1);

        h.screen.dismiss_search();

        assert_eq!(h.screen.list().items(), &fixtures::baseline());
        assert_eq!(h.screen.baseline(), &fixtures::baseline());
    }

    #[test]
    fn selection_after_filtering_reports_rendered_recipe() {
        let mut h = active_with_baseline();
        h.screen.on_query_change("pa");
        assert_eq!(h.screen.list().items().ids(), vec![RecipeId(1), RecipeId(3)]);

        h.screen.list.activate(1).unwrap();

        let selected = h.selected.borrow();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, RecipeId(3));
    }

    #[test]
    fn completion_after_teardown_is_ignored() {
        let mut h = harness();
        h.screen.activate().unwrap();

        h.screen.teardown();
        h.screen.complete_fetch(FetchOutcome::Loaded(fixtures::baseline()));

        assert!(h.screen.baseline().is_empty());
        assert!(h.screen.list().is_empty());
        assert!(!h.screen.refresh_indicator().is_pending());
    }

    #[test]
    fn lost_worker_does_not_leave_refresh_pending() {
        let mut h = harness();
        drop(h.task_rx);

        assert!(h.screen.activate().is_err());
        assert!(!h.screen.refresh_indicator().is_pending());
    }
}
