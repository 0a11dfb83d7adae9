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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload potentially
//! blocking recipe service calls from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into service
//! calls and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! The worker only holds a sender for application events, never the screen
//! itself, so a completion that arrives after the screen is gone is simply
//! dropped by the event loop.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use anyhow::Result;
use tracing::{debug, error};

use crate::{events::AppEvent, service::RecipesService};

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum AppTask {
    FetchTopRating,
}

/// Spawns a background thread to process application tasks.
///
/// The service is opened on the worker thread itself. If opening fails the
/// error is reported once and every later fetch completes as failed, so the
/// refresh indicator on the screen is still released.
///
/// # Arguments
///
/// * `open_service` - Opens the recipe service on the worker thread.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<S, F>(
    open_service: F,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()>
where
    S: RecipesService + 'static,
    F: FnOnce() -> Result<S> + Send + 'static,
{
    thread::spawn(move || {
        let mut service = match open_service() {
            Ok(service) => Some(service),
            Err(e) => {
                error!("Failed to open recipe service: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(format!(
                    "Failed to open recipe service: {:#}",
                    e
                )));
                None
            }
        };

        while let Ok(task) = task_rx.recv() {
            debug!(?task, "task received");

            let mut ctx = TaskContext {
                event_tx: &event_tx,
                service: service.as_mut().map(|s| s as &mut dyn RecipesService),
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        debug!("task channel closed, worker exiting");
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    service: Option<&'a mut dyn RecipesService>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::FetchTopRating => handlers::fetch_top_rating(ctx),
    }
}
