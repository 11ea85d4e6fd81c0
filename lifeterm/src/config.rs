/*  Copyright 2026 the Lifeterm Developers.
 *
 *  This file is part of lifeterm.
 *
 *  lifeterm is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  lifeterm is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with lifeterm.  If not, see
 *  <http://www.gnu.org/licenses/>. */

use crate::constants::*;
use crate::error::{LifetermError, LifetermResult};

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Settings contains all of the user's configurable settings. They are read from a TOML file
/// (`lifeterm.toml` by default) and can be overridden on the command line. Every section and
/// every field is optional in the file; anything missing keeps its default.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub board:    BoardSettings,
    pub gameplay: GamePlaySettings,
    pub video:    VideoSettings,
    pub logging:  LogSettings,
}

/// Dimensions of the board, in cells.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoardSettings {
    pub width:  usize,
    pub height: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings {
            width:  DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GamePlaySettings {
    pub tick_interval_ms: u64,
}

impl Default for GamePlaySettings {
    fn default() -> Self {
        GamePlaySettings {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GamePlaySettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// How cells are drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct VideoSettings {
    pub color:          bool,
    pub alive_glyph:    char,
    pub dead_glyph:     char,
    pub selected_glyph: char,
}

impl Default for VideoSettings {
    fn default() -> Self {
        VideoSettings {
            color:          true,
            alive_glyph:    DEFAULT_ALIVE_GLYPH,
            dead_glyph:     DEFAULT_DEAD_GLYPH,
            selected_glyph: DEFAULT_SELECTED_GLYPH,
        }
    }
}

/// The terminal is in raw mode while the game runs, so log records only go somewhere when a file
/// is configured (or `RUST_LOG` is set).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file:  Option<String>,
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            file:  None,
            level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl LogSettings {
    /// Falls back to `Info` for unparseable levels; `Settings::validate` reports those.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Settings {
    /// Creates the default configuration with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let toml_str =
            fs::read_to_string(path).with_context(|| format!("could not read config file {}", path.display()))?;
        Settings::from_toml_str(&toml_str).with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Loads settings from `path` if given (it must exist). Otherwise `CONFIG_FILE_PATH` is read
    /// if it exists, and the defaults are used if it doesn't.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Settings::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_PATH);
                if default_path.exists() {
                    Settings::from_file(default_path)
                } else {
                    Ok(Settings::new())
                }
            }
        }
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks values that deserialize fine but that the game cannot work with.
    pub fn validate(&self) -> LifetermResult<()> {
        if self.board.width == 0 || self.board.height == 0 {
            return Err(LifetermError::InvalidConfig {
                reason: format!(
                    "board must be at least 1x1, got {}x{}",
                    self.board.width, self.board.height
                ),
            });
        }
        if self.board.width > MAX_BOARD_DIMENSION || self.board.height > MAX_BOARD_DIMENSION {
            return Err(LifetermError::InvalidConfig {
                reason: format!(
                    "board must be at most {}x{}, got {}x{}",
                    MAX_BOARD_DIMENSION, MAX_BOARD_DIMENSION, self.board.width, self.board.height
                ),
            });
        }
        if self.gameplay.tick_interval_ms == 0 {
            return Err(LifetermError::InvalidConfig {
                reason: "tick_interval_ms must be positive".to_owned(),
            });
        }
        for (name, glyph) in &[
            ("alive_glyph", self.video.alive_glyph),
            ("dead_glyph", self.video.dead_glyph),
            ("selected_glyph", self.video.selected_glyph),
        ] {
            if glyph.is_control() || glyph.is_whitespace() {
                return Err(LifetermError::InvalidConfig {
                    reason: format!("{} must be a visible character, got {:?}", name, glyph),
                });
            }
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(LifetermError::InvalidConfig {
                reason: format!("unknown log level {:?}", self.logging.level),
            });
        }
        Ok(())
    }
}
