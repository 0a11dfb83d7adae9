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

use anyhow::Result;
use tracing::{info, warn};

use crate::{events::AppEvent, service::FetchOutcome, tasks::TaskContext};

pub(super) fn fetch_top_rating(ctx: &mut TaskContext) -> Result<()> {
    let outcome = match ctx.service.as_mut() {
        Some(service) => FetchOutcome::from(service.fetch_top_rating()),
        None => FetchOutcome::Failed("recipe service unavailable".to_string()),
    };

    match &outcome {
        FetchOutcome::Loaded(recipes) => info!(count = recipes.len(), "fetched top rated recipes"),
        FetchOutcome::Failed(msg) => {
            warn!("fetch failed: {}", msg);
            ctx.event_tx.send(AppEvent::Error(format!("Refresh failed: {}", msg)))?;
        }
    }

    ctx.event_tx.send(AppEvent::RecipesFetched(outcome))?;

    Ok(())
}
