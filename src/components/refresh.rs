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

//! Refresh indicator state.
//!
//! Tracks whether a fetch is pending and animates the loading spinner shown in
//! the status line. Every successful [`RefreshIndicator::begin_refresh`] must
//! be matched by exactly one [`RefreshIndicator::end_refresh`], whatever the
//! outcome of the fetch, otherwise the spinner would be left running.

use tracing::debug;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Default)]
pub(crate) struct RefreshIndicator {
    pending: bool,
    frame: usize,
    begun: u64,
    ended: u64,
}

impl RefreshIndicator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Shows the loading affordance.
    ///
    /// Returns true when the caller should issue exactly one fetch. A request
    /// arriving while a refresh is already pending is coalesced into it and
    /// returns false.
    pub(crate) fn begin_refresh(&mut self) -> bool {
        if self.pending {
            debug!("refresh already pending, request coalesced");
            return false;
        }

        self.pending = true;
        self.frame = 0;
        self.begun += 1;

        true
    }

    /// Hides the loading affordance. Does nothing if no refresh is pending.
    pub(crate) fn end_refresh(&mut self) {
        if !self.pending {
            debug!("end_refresh without a pending refresh ignored");
            return;
        }

        self.pending = false;
        self.ended += 1;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Advances the spinner animation while pending.
    pub(crate) fn tick(&mut self) {
        if self.pending {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub(crate) fn spinner(&self) -> Option<&'static str> {
        self.pending.then(|| SPINNER_FRAMES[self.frame])
    }

    /// Number of refreshes begun and ended so far.
    pub(crate) fn counts(&self) -> (u64, u64) {
        (self.begun, self.ended)
    }
}
