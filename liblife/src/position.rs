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

use std::fmt;

/// One of the four axis-aligned directions a selection can move in.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Direction {
    North, // y - 1
    South, // y + 1
    East,  // x + 1
    West,  // x - 1
}

/// A coordinate on the board. Column `x` grows to the east, row `y` grows to the south.
///
/// Positions are plain values; nothing here knows about board bounds. Use `Board::is_inside` and
/// `Board::wrap` for that.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Default)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub fn new(x: isize, y: isize) -> Self {
        Position { x, y }
    }

    pub fn north(self) -> Self {
        Position::new(self.x, self.y - 1)
    }

    pub fn south(self) -> Self {
        Position::new(self.x, self.y + 1)
    }

    pub fn east(self) -> Self {
        Position::new(self.x + 1, self.y)
    }

    pub fn west(self) -> Self {
        Position::new(self.x - 1, self.y)
    }

    /// Returns the position one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::North => self.north(),
            Direction::South => self.south(),
            Direction::East => self.east(),
            Direction::West => self.west(),
        }
    }

    /// The 8 positions of the Moore neighbourhood, clockwise starting from the north-west corner.
    /// These are not wrapped.
    pub fn neighbours(self) -> [Position; 8] {
        let n = self.north();
        let s = self.south();
        [
            n.west(),
            n,
            n.east(),
            self.east(),
            s.east(),
            s,
            s.west(),
            self.west(),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
