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

#[macro_use]
extern crate log;
#[macro_use]
extern crate custom_error;

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod position;

pub use board::{Board, BoardBuilder};
pub use cell::Cell;
pub use error::{LifeError, LifeResult};
pub use game::{Command, Game, GameState, Outcome};
pub use position::{Direction, Position};
