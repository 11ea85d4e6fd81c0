/*  Copyright 2026 the Lifeterm Developers.
 *
 *  This file is part of liblife.
 *
 *  liblife is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  liblife is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with liblife.  If not, see <http://www.gnu.org/licenses/>. */

use crate::position::Position;

/// State of a single board square. A cell is created once for its position and never moves.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    position: Position,
    alive:    bool,
    selected: bool, // only meaningful while editing
}

impl Cell {
    /// Creates an unselected cell at `position`.
    pub fn new(position: Position, alive: bool) -> Self {
        Cell {
            position,
            alive,
            selected: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Flips the alive flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.alive = !self.alive;
        self.alive
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
