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

//! Reusable screen components.
//!
//! * [`recipe_list`]: the recipe table and its selection callback.
//! * [`search`]: the search bar and its query filter.
//! * [`refresh`]: the loading indicator driving (re)fetches.

pub(crate) mod recipe_list;
pub(crate) mod refresh;
pub(crate) mod search;

pub(crate) use recipe_list::{RecipeList, RecipeListAction, SelectHandler};
pub(crate) use refresh::RefreshIndicator;
pub(crate) use search::{SearchAction, SearchBar};
