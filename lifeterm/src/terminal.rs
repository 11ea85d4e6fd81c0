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

use std::io;

use crossterm::{cursor, execute, terminal};

/// Keeps the terminal in raw mode (no echo, no line buffering, no signal keys) for as long as it
/// lives. Dropping it restores the terminal, whichever way the program leaves.
pub struct RawTerminal {
    _private: (),
}

impl RawTerminal {
    pub fn enter() -> crossterm::Result<RawTerminal> {
        terminal::enable_raw_mode()?;
        let guard = RawTerminal { _private: () };
        execute!(io::stdout(), cursor::Hide)?;
        debug!("Terminal switched to raw mode");
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show) {
            warn!("Failed to show cursor: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            error!("Failed to restore terminal: {}", e);
        }
        debug!("Terminal restored");
    }
}
