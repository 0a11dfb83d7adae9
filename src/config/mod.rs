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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::model::search::MatchMode;

const CONFIG_NAME: &str = "recipes";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub database_file: String,
    pub log_file: String,
    pub top_rating_limit: u32,
    pub theme: ThemeConfig,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: "recipes.db".to_string(),
            log_file: "recipes.log".to_string(),
            top_rating_limit: 50,
            theme: ThemeConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// The two recognised theme colours, as `#rrggbb` strings.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_colour: String,
    pub accent_colour: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_colour: "#F4F4F4".to_string(),
            accent_colour: "#9E6BE0".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub match_mode: MatchMode,
    pub keep_query_on_dismiss: bool,
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_word_prefix_and_reset_on_dismiss() {
        let config = AppConfig::default();

        assert_eq!(config.search.match_mode, MatchMode::WordPrefix);
        assert!(!config.search.keep_query_on_dismiss);
        assert_eq!(config.theme.accent_colour, "#9E6BE0");
    }

    #[test]
    fn match_mode_deserialises_from_snake_case() {
        let parsed: MatchMode = serde::Deserialize::deserialize(
            serde::de::value::StrDeserializer::<serde::de::value::Error>::new("substring"),
        )
        .unwrap();

        assert_eq!(parsed, MatchMode::Substring);
    }
}
