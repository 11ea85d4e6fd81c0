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

// board
pub const DEFAULT_BOARD_WIDTH: usize  = life::board::DEFAULT_WIDTH;  // cells
pub const DEFAULT_BOARD_HEIGHT: usize = life::board::DEFAULT_HEIGHT; // cells
pub const MAX_BOARD_DIMENSION: usize  = 1000;                         // cells, per side

// game play
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500; // milliseconds between generations

// display
pub const DEFAULT_ALIVE_GLYPH: char    = '▣';
pub const DEFAULT_DEAD_GLYPH: char     = '□';
pub const DEFAULT_SELECTED_GLYPH: char = '◈'; // only used when color is off
pub const RUN_HEADER_RULE: &str        = "---------------";

// logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

// persistent configuration
pub const CONFIG_FILE_PATH: &str = "lifeterm.toml";
